//! Run summary emitted after a successful pipeline run.

use std::path::PathBuf;

use serde::Serialize;

use exiorank_core::types::StructureReport;

/// Everything a caller needs to know about one completed run, including
/// the recoverable conditions that did not abort it (no pollutant match,
/// unresolved industry names).
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub structure: StructureReport,
    pub account: String,
    pub pollutant: String,
    /// Stressor labels the pollutant fragment matched; empty means the
    /// run proceeded on an all-zero series.
    pub matched_stressors: Vec<String>,
    pub resolved_industries: Vec<(String, usize)>,
    pub unresolved_industries: Vec<String>,
    pub entries_ranked: usize,
    pub chart_path: PathBuf,
    pub table_path: Option<PathBuf>,
    /// blake3 fingerprint of the dataset structure, hex.
    pub dataset_fingerprint: String,
    pub started_ms: u64,
    pub finished_ms: u64,
}
