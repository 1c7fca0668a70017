//! Structure inspector: cardinalities and leading samples as data.

use exiorank_core::error::{Error, Result};
use exiorank_core::prelude::{Dataset, StructureReport, STRUCTURE_SAMPLE_LEN};

/// Read region/sector cardinalities and sample names from a dataset.
///
/// `Dataset::new` already rejects empty domains, so this only fails on a
/// handle constructed by other means. Samples keep dataset-native order.
pub fn inspect(dataset: &Dataset) -> Result<StructureReport> {
    if dataset.regions().is_empty() || dataset.sectors().is_empty() {
        return Err(Error::InvalidDataset(
            "dataset has an empty region or sector domain".into(),
        ));
    }

    let sample = |names: &[String]| -> Vec<String> {
        names.iter().take(STRUCTURE_SAMPLE_LEN).cloned().collect()
    };

    Ok(StructureReport {
        region_count: dataset.regions().len(),
        region_sample: sample(dataset.regions()),
        sector_count: dataset.sectors().len(),
        sector_sample: sample(dataset.sectors()),
        extension_count: dataset.accounts().len(),
        extension_names: dataset
            .account_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
