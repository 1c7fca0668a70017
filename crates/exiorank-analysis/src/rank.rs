//! Top-N ranking with the single authoritative tagging step.

use std::cmp::Ordering;

use exiorank_core::error::{Error, Result};
use exiorank_core::prelude::{Dataset, EmissionsSeries, RankedEntry};

/// The ranked report, held in descending order.
///
/// The ascending display order is always a pure reversal of the same
/// sequence, never a second sort, so tie-breaks cannot diverge between
/// ranking and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedReport {
    entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Entries in strictly descending value order.
    pub fn descending(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Entries in ascending order, largest last (bottom-to-top display).
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = &RankedEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Take the `n` largest series entries, descending, ties broken by column
/// (dataset) order. `predicate` decides `is_target` per display label and
/// runs exactly once per entry, here.
///
/// `n == 0` yields an empty report; `n > |series|` yields every column.
/// A series whose length differs from the dataset's column domain cannot
/// be labelled and is a shape error.
pub fn rank<P>(
    series: &EmissionsSeries,
    dataset: &Dataset,
    n: usize,
    predicate: P,
) -> Result<RankedReport>
where
    P: Fn(&str) -> bool,
{
    if series.len() != dataset.n_columns() {
        return Err(Error::Shape(format!(
            "series has {} entries but the dataset has {} columns",
            series.len(),
            dataset.n_columns()
        )));
    }

    let mut order: Vec<usize> = (0..series.len()).collect();
    // Descending by value; NaN sorts as equal so the column index decides.
    order.sort_by(|&a, &b| {
        series
            .value(b)
            .partial_cmp(&series.value(a))
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order.truncate(n);

    let entries = order
        .into_iter()
        .map(|flat| {
            let key = dataset.column_key(flat);
            let label = dataset.column_label(key);
            let is_target = predicate(&label);
            RankedEntry {
                label,
                key,
                value: series.value(flat),
                is_target,
            }
        })
        .collect();

    Ok(RankedReport { entries })
}
