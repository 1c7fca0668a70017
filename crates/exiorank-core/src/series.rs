//! Aggregate emissions series over the full (region, sector) column domain.

use serde::Serialize;

use crate::error::{Error, Result};

/// One total per column of the source account.
///
/// Invariant: the length always equals the account's full column domain,
/// even when no stressor row matched (all zeros). Columns are never
/// dropped for being zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionsSeries {
    values: Vec<f64>,
}

impl EmissionsSeries {
    pub fn zeros(n_columns: usize) -> Self {
        Self {
            values: vec![0.0; n_columns],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, flat_index: usize) -> f64 {
        self.values[flat_index]
    }

    /// Add one account row into the running totals.
    pub fn accumulate(&mut self, row: &[f64]) -> Result<()> {
        if row.len() != self.values.len() {
            return Err(Error::Shape(format!(
                "cannot accumulate row of length {} into series of length {}",
                row.len(),
                self.values.len()
            )));
        }
        for (total, v) in self.values.iter_mut().zip(row) {
            *total += v;
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
