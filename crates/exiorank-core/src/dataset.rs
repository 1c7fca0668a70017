//! Loaded-dataset handle: region/sector domains plus extension accounts.
//!
//! The external MRIO engine owns the matrix algebra (technical coefficients,
//! Leontief inverse); this handle only carries the tables it exports. It is
//! built once per run and read-only afterwards.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::hash::{hash_serde, Hash256};
use crate::types::ColumnKey;

/// One named extension account: labelled stressor rows over the full
/// (region, sector) column domain.
///
/// Row labels are not unique by substring; a pollutant fragment like
/// "PM2.5" routinely matches several sub-category rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionAccount {
    pub name: String,
    pub row_labels: Vec<String>,
    /// `values[row][column]`, region-major column order.
    pub values: Vec<Vec<f64>>,
}

impl ExtensionAccount {
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_columns(&self) -> usize {
        self.values.first().map(|r| r.len()).unwrap_or(0)
    }
}

/// Immutable handle to a loaded MRIO dataset.
///
/// Construction validates the domains and every account's shape; all
/// downstream stages may assume a well-formed handle. Sector lookup by
/// name goes through a map built once here, not a per-query scan.
#[derive(Debug, Clone)]
pub struct Dataset {
    regions: Vec<String>,
    sectors: Vec<String>,
    sector_index: HashMap<String, usize>,
    accounts: Vec<ExtensionAccount>,
}

impl Dataset {
    pub fn new(
        regions: Vec<String>,
        sectors: Vec<String>,
        accounts: Vec<ExtensionAccount>,
    ) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::InvalidDataset("region list is empty".into()));
        }
        if sectors.is_empty() {
            return Err(Error::InvalidDataset("sector list is empty".into()));
        }

        let mut sector_index = HashMap::with_capacity(sectors.len());
        for (idx, name) in sectors.iter().enumerate() {
            if sector_index.insert(name.clone(), idx).is_some() {
                return Err(Error::InvalidDataset(format!(
                    "duplicate sector name '{}'",
                    name
                )));
            }
        }

        let n_columns = regions.len() * sectors.len();
        for account in &accounts {
            if account.row_labels.len() != account.values.len() {
                return Err(Error::Shape(format!(
                    "account '{}': {} row labels but {} value rows",
                    account.name,
                    account.row_labels.len(),
                    account.values.len()
                )));
            }
            for (row_idx, row) in account.values.iter().enumerate() {
                if row.len() != n_columns {
                    return Err(Error::Shape(format!(
                        "account '{}' row {}: expected {} columns, got {}",
                        account.name,
                        row_idx,
                        n_columns,
                        row.len()
                    )));
                }
            }
        }

        Ok(Self {
            regions,
            sectors,
            sector_index,
            accounts,
        })
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// Size of the full (region × sector) column domain.
    pub fn n_columns(&self) -> usize {
        self.regions.len() * self.sectors.len()
    }

    /// Position of a sector by its exact canonical label.
    pub fn sector_position(&self, name: &str) -> Option<usize> {
        self.sector_index.get(name).copied()
    }

    pub fn account(&self, name: &str) -> Option<&ExtensionAccount> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn accounts(&self) -> &[ExtensionAccount] {
        &self.accounts
    }

    pub fn account_names(&self) -> Vec<&str> {
        self.accounts.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn column_key(&self, flat_index: usize) -> ColumnKey {
        ColumnKey::from_flat(flat_index, self.sectors.len())
    }

    /// Display label for one column, `"REGION | Sector"`.
    pub fn column_label(&self, key: ColumnKey) -> String {
        format!("{} | {}", self.regions[key.region], self.sectors[key.sector])
    }

    /// Stable fingerprint of the dataset structure (domains and account
    /// row labels, not the numeric tables). Recorded in the run summary
    /// so identical inputs are recognizable across runs.
    pub fn fingerprint(&self) -> Result<Hash256> {
        #[derive(Serialize)]
        struct Structure<'a> {
            regions: &'a [String],
            sectors: &'a [String],
            accounts: Vec<(&'a str, &'a [String])>,
        }
        hash_serde(&Structure {
            regions: &self.regions,
            sectors: &self.sectors,
            accounts: self
                .accounts
                .iter()
                .map(|a| (a.name.as_str(), a.row_labels.as_slice()))
                .collect(),
        })
    }
}
