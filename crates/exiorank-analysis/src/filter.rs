//! Pollutant filter: select matching stressor rows, sum them per column.
//!
//! The aggregation is a straight sum over the rows of the account as
//! published. It reports territorial/production totals, **not** a
//! demand-attributed footprint; no Leontief weighting happens here.

use exiorank_core::error::Result;
use exiorank_core::prelude::{EmissionsSeries, ExtensionAccount};

/// Result of filtering one account by a pollutant name fragment.
///
/// `matched_labels` empty is the no-match signal: non-fatal, and distinct
/// from "matched rows that sum to zero". The series always spans the
/// account's full column domain either way.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutantSelection {
    pub series: EmissionsSeries,
    pub matched_labels: Vec<String>,
}

impl PollutantSelection {
    pub fn no_match(&self) -> bool {
        self.matched_labels.is_empty()
    }
}

/// Sum all rows of `account` whose label contains `fragment`,
/// case-insensitively.
pub fn filter_pollutant(account: &ExtensionAccount, fragment: &str) -> Result<PollutantSelection> {
    let needle = fragment.to_lowercase();
    let mut series = EmissionsSeries::zeros(account.n_columns());
    let mut matched_labels = Vec::new();

    for (label, row) in account.row_labels.iter().zip(&account.values) {
        if label.to_lowercase().contains(&needle) {
            series.accumulate(row)?;
            matched_labels.push(label.clone());
        }
    }

    if matched_labels.is_empty() {
        tracing::warn!(
            account = %account.name,
            fragment,
            "no stressor row matched; continuing with an all-zero series"
        );
    } else {
        tracing::debug!(
            account = %account.name,
            fragment,
            matched = matched_labels.len(),
            "aggregated pollutant rows"
        );
    }

    Ok(PollutantSelection {
        series,
        matched_labels,
    })
}
