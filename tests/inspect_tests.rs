//! Structure inspector tests


use exiorank_analysis::inspect::inspect;
use exiorank_core::dataset::Dataset;
use exiorank_core::error::Error;
use test_data_gen::{sample_air_emissions, sample_dataset};

#[test]
fn counts_match_domain_lengths() {
    let dataset = sample_dataset();
    let report = inspect(&dataset).expect("inspect should succeed");

    assert_eq!(report.region_count, dataset.regions().len());
    assert_eq!(report.sector_count, dataset.sectors().len());
    assert_eq!(report.extension_count, 1);
    assert_eq!(report.extension_names, vec!["air_emissions".to_string()]);
}

#[test]
fn samples_keep_dataset_order_and_cap_at_ten() {
    let regions: Vec<String> = (0..25).map(|i| format!("R{:02}", i)).collect();
    let sectors: Vec<String> = (0..12).map(|i| format!("Sector {}", i)).collect();
    let dataset = Dataset::new(regions.clone(), sectors.clone(), vec![]).unwrap();

    let report = inspect(&dataset).unwrap();
    assert_eq!(report.region_sample.len(), 10);
    assert_eq!(report.region_sample, regions[..10].to_vec());
    assert_eq!(report.sector_sample.len(), 10);
    assert_eq!(report.sector_sample, sectors[..10].to_vec());
}

#[test]
fn sample_shorter_than_cap_keeps_everything() {
    let dataset = sample_dataset();
    let report = inspect(&dataset).unwrap();
    assert_eq!(report.region_sample, dataset.regions().to_vec());
    assert_eq!(report.sector_sample, dataset.sectors().to_vec());
}

#[test]
fn empty_region_domain_is_rejected_at_construction() {
    let result = Dataset::new(
        vec![],
        vec!["Textiles (17)".to_string()],
        vec![sample_air_emissions()],
    );
    assert!(matches!(result, Err(Error::InvalidDataset(_))));
}

#[test]
fn empty_sector_domain_is_rejected_at_construction() {
    let result = Dataset::new(vec!["US".to_string()], vec![], vec![]);
    assert!(matches!(result, Err(Error::InvalidDataset(_))));
}

#[test]
fn misshapen_account_is_rejected_at_construction() {
    let mut account = sample_air_emissions();
    account.values[0].pop();
    let result = Dataset::new(
        test_data_gen::sample_regions(),
        test_data_gen::sample_sectors(),
        vec![account],
    );
    assert!(matches!(result, Err(Error::Shape(_))));
}
