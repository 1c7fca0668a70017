//! Tabular CSV report from ranked entries.
//!
//! Same contract as the chart writer: descending input, `is_target`
//! consumed as data, empty input is an error, rewrite truncates.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv as csv_crate;
use exiorank_core::types::RankedEntry;

use crate::{Error, Result};

/// Write `rank,label,value,target_industry` rows, rank 1 = largest.
pub fn write_csv_table(entries: &[RankedEntry], path: &Path) -> Result<PathBuf> {
    if entries.is_empty() {
        return Err(Error::EmptyReport);
    }

    let file = File::create(path)?;
    let mut wtr = csv_crate::Writer::from_writer(file);
    wtr.write_record(["rank", "label", "value", "target_industry"])?;
    for (i, entry) in entries.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entry.label.clone(),
            entry.value.to_string(),
            entry.is_target.to_string(),
        ])?;
    }
    wtr.flush().map_err(Error::Io)?;

    tracing::info!(rows = entries.len(), output = %path.display(), "wrote table");
    Ok(path.to_path_buf())
}
