//! Injectable run configuration.
//!
//! One config drives every variant of the run (with or without a table,
//! default or explicit chart path); there are no copy-modified entry
//! points. The CLI builds this from a YAML job file, flags, or both.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use exiorank_core::industry::IndustryDefinition;
use exiorank_io::writers::svg::DEFAULT_CHART_FILENAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory holding the engine's CSV export.
    pub dataset: PathBuf,

    /// Extension account to aggregate.
    #[serde(default = "default_account")]
    pub account: String,

    /// Pollutant name fragment, matched case-insensitively.
    #[serde(default = "default_pollutant")]
    pub pollutant: String,

    /// How many columns the ranked report keeps.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Chart output path; falls back to `pm_emissions_top.svg` in the
    /// working directory.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Optional CSV table alongside the chart.
    #[serde(default)]
    pub table_output: Option<PathBuf>,

    /// Chart title override.
    #[serde(default)]
    pub title: Option<String>,

    /// Industry-family override: core sector names.
    #[serde(default)]
    pub industry_core: Vec<String>,

    /// Industry-family override: downstream waste-handling sector names.
    #[serde(default)]
    pub industry_downstream: Vec<String>,
}

fn default_account() -> String {
    "air_emissions".to_string()
}

fn default_pollutant() -> String {
    "PM2.5".to_string()
}

fn default_top_n() -> usize {
    15
}

impl RunConfig {
    pub fn new(dataset: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            account: default_account(),
            pollutant: default_pollutant(),
            top_n: default_top_n(),
            output: None,
            table_output: None,
            title: None,
            industry_core: Vec::new(),
            industry_downstream: Vec::new(),
        }
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_FILENAME))
    }

    pub fn chart_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            format!(
                "Top {} {} emitters by region and sector",
                self.top_n, self.pollutant
            )
        })
    }

    /// Industry family to tag against; the curated textiles family unless
    /// the config overrides the core list.
    pub fn industry(&self) -> IndustryDefinition {
        if self.industry_core.is_empty() {
            IndustryDefinition::textiles()
        } else {
            IndustryDefinition::new(
                self.industry_core.clone(),
                self.industry_downstream.clone(),
            )
        }
    }
}
