//! The one-shot batch run.

use std::time::{SystemTime, UNIX_EPOCH};

use exiorank_analysis::filter::filter_pollutant;
use exiorank_analysis::inspect::inspect;
use exiorank_analysis::rank::rank;
use exiorank_analysis::resolve::resolve;
use exiorank_io::readers::load_export;
use exiorank_io::writers::{write_csv_table, write_svg_chart};

use crate::config::RunConfig;
use crate::summary::RunSummary;
use crate::{Error, Result};

/// Execute load → inspect → filter → resolve → rank → render.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let started_ms = now_ms();

    let dataset = load_export(&config.dataset).map_err(Error::Load)?;
    let structure = inspect(&dataset).map_err(Error::Inspect)?;
    tracing::info!(
        regions = structure.region_count,
        sectors = structure.sector_count,
        extensions = structure.extension_count,
        "dataset structure"
    );

    let account = dataset
        .account(&config.account)
        .ok_or_else(|| Error::UnknownAccount {
            account: config.account.clone(),
            available: dataset
                .account_names()
                .into_iter()
                .map(|s| s.to_string())
                .collect(),
        })?;

    let selection = filter_pollutant(account, &config.pollutant).map_err(Error::Filter)?;

    let industry = config.industry();
    let resolution = resolve(&dataset, industry.full());

    let report = rank(&selection.series, &dataset, config.top_n, |label| {
        industry.matches_core(label)
    })
    .map_err(Error::Rank)?;

    let chart_path = config.chart_path();
    let chart_path =
        write_svg_chart(report.descending(), &config.chart_title(), &chart_path)
            .map_err(Error::Render)?;

    let table_path = match &config.table_output {
        Some(path) => Some(write_csv_table(report.descending(), path).map_err(Error::Render)?),
        None => None,
    };

    let fingerprint = dataset.fingerprint().map_err(Error::Summary)?;

    Ok(RunSummary {
        structure,
        account: config.account.clone(),
        pollutant: config.pollutant.clone(),
        matched_stressors: selection.matched_labels,
        resolved_industries: resolution.resolved,
        unresolved_industries: resolution.unresolved,
        entries_ranked: report.len(),
        chart_path,
        table_path,
        dataset_fingerprint: fingerprint.to_hex(),
        started_ms,
        finished_ms: now_ms(),
    })
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
