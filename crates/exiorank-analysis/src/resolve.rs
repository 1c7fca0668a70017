//! Industry resolver: curated sector names → positions in the sector list.

use exiorank_core::prelude::Dataset;

/// Partition of an attempted name resolution.
///
/// `resolved` preserves the input name order. A resolution never fails as
/// a whole; callers that need at least one index must check for an empty
/// `resolved` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: Vec<(String, usize)>,
    pub unresolved: Vec<String>,
}

impl Resolution {
    pub fn indices(&self) -> Vec<usize> {
        self.resolved.iter().map(|(_, idx)| *idx).collect()
    }
}

/// Map each name onto its sector position by exact label equality.
///
/// Lookup goes through the dataset's prebuilt name→index map. Unresolved
/// names are collected, not fatal; every name is attempted.
pub fn resolve(dataset: &Dataset, names: &[String]) -> Resolution {
    let mut resolved = Vec::with_capacity(names.len());
    let mut unresolved = Vec::new();

    for name in names {
        match dataset.sector_position(name) {
            Some(idx) => resolved.push((name.clone(), idx)),
            None => unresolved.push(name.clone()),
        }
    }

    if !unresolved.is_empty() {
        tracing::warn!(
            unresolved = unresolved.len(),
            names = ?unresolved,
            "industry names not present in the sector list"
        );
    }

    Resolution {
        resolved,
        unresolved,
    }
}
