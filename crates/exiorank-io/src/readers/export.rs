//! Loader for the engine's CSV directory export.
//!
//! Expected layout:
//!
//! ```text
//! <export>/
//!   regions.csv            header "region", one region per row
//!   sectors.csv            header "sector", one sector per row
//!   extensions/<name>.csv  header "stressor" + one column per (region,
//!                          sector) pair, region-major; one row per stressor
//! ```
//!
//! Caveats:
//! - No numeric inference beyond f64; empty cells are an error, not zero.
//! - Account order follows file-name order for deterministic fingerprints.

use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv as csv_crate;
use exiorank_core::dataset::{Dataset, ExtensionAccount};

use crate::{Error, Result};

/// Load a complete dataset export into a validated handle.
pub fn load_export(dir: &Path) -> Result<Dataset> {
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let regions = read_name_list(&dir.join("regions.csv"), "region")?;
    let sectors = read_name_list(&dir.join("sectors.csv"), "sector")?;

    let ext_dir = dir.join("extensions");
    if !ext_dir.is_dir() {
        return Err(Error::Format {
            file: ext_dir.display().to_string(),
            reason: "missing extensions directory".into(),
        });
    }

    let n_columns = regions.len() * sectors.len();
    let mut paths: Vec<PathBuf> = fs::read_dir(&ext_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    let mut accounts = Vec::with_capacity(paths.len());
    for path in paths {
        accounts.push(read_account(&path, n_columns)?);
    }

    tracing::info!(
        regions = regions.len(),
        sectors = sectors.len(),
        accounts = accounts.len(),
        export = %dir.display(),
        "loaded dataset export"
    );

    Ok(Dataset::new(regions, sectors, accounts)?)
}

/// Read a single-column name list (`regions.csv` / `sectors.csv`).
fn read_name_list(path: &Path, expected_header: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    let mut rdr = csv_crate::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = rdr.headers().map_err(|e| format_error(path, e))?;
    if headers.get(0) != Some(expected_header) {
        return Err(Error::Format {
            file: path.display().to_string(),
            reason: format!(
                "expected header '{}', got '{}'",
                expected_header,
                headers.get(0).unwrap_or("")
            ),
        });
    }

    let mut names = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| format_error(path, e))?;
        match rec.get(0) {
            Some(name) if !name.is_empty() => names.push(name.to_string()),
            _ => {
                return Err(Error::Format {
                    file: path.display().to_string(),
                    reason: format!("blank entry at row {}", names.len() + 2),
                })
            }
        }
    }
    Ok(names)
}

/// Read one extension-account table. The account name is the file stem.
fn read_account(path: &Path, n_columns: usize) -> Result<ExtensionAccount> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("extension")
        .to_string();

    let file = File::open(path)?;
    let mut rdr = csv_crate::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = rdr.headers().map_err(|e| format_error(path, e))?;
    if headers.len() != n_columns + 1 {
        return Err(Error::Format {
            file: path.display().to_string(),
            reason: format!(
                "expected {} columns (stressor + region×sector), got {}",
                n_columns + 1,
                headers.len()
            ),
        });
    }

    let mut row_labels = Vec::new();
    let mut values = Vec::new();
    for rec in rdr.records() {
        // Ragged rows come back as csv errors carrying only a byte
        // position; re-wrap so the message names the file.
        let rec = rec.map_err(|e| format_error(path, e))?;
        let label = rec.get(0).unwrap_or("").to_string();
        if label.is_empty() {
            return Err(Error::Format {
                file: path.display().to_string(),
                reason: format!("blank stressor label at row {}", values.len() + 2),
            });
        }

        let mut row = Vec::with_capacity(n_columns);
        for (col, cell) in rec.iter().skip(1).enumerate() {
            let v: f64 = cell.parse().map_err(|_| Error::Format {
                file: path.display().to_string(),
                reason: format!("non-numeric cell '{}' (row '{}', column {})", cell, label, col),
            })?;
            row.push(v);
        }

        row_labels.push(label);
        values.push(row);
    }

    Ok(ExtensionAccount {
        name,
        row_labels,
        values,
    })
}

fn format_error(path: &Path, e: csv_crate::Error) -> Error {
    Error::Format {
        file: path.display().to_string(),
        reason: e.to_string(),
    }
}
