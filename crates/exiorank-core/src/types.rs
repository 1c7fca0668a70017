//! Lightweight shared types used across the pipeline stages.

use serde::Serialize;

/// Addresses one (region, sector) column of an extension-account table.
///
/// Columns are region-major: the flat column index is
/// `region * n_sectors + sector`. Both fields are positions into the
/// dataset's ordered region/sector lists, never names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnKey {
    pub region: usize,
    pub sector: usize,
}

impl ColumnKey {
    pub fn flat_index(&self, n_sectors: usize) -> usize {
        self.region * n_sectors + self.sector
    }

    pub fn from_flat(index: usize, n_sectors: usize) -> Self {
        Self {
            region: index / n_sectors,
            sector: index % n_sectors,
        }
    }
}

/// One row of the ranked report.
///
/// `is_target` is decided once at ranking time and carried as data from
/// there on; renderers consume it and never re-derive it from the label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Rendered display label, e.g. `"CN | Textiles (17)"`.
    pub label: String,
    pub key: ColumnKey,
    pub value: f64,
    pub is_target: bool,
}

/// Structural diagnostics for a loaded dataset.
///
/// Returned as data rather than printed, so stages stay testable without
/// capturing console output. Samples are the first entries in dataset
/// order, capped at [`STRUCTURE_SAMPLE_LEN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub region_count: usize,
    pub region_sample: Vec<String>,
    pub sector_count: usize,
    pub sector_sample: Vec<String>,
    pub extension_count: usize,
    pub extension_names: Vec<String>,
}

/// How many leading region/sector names a `StructureReport` carries.
pub const STRUCTURE_SAMPLE_LEN: usize = 10;
