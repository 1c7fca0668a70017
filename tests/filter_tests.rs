//! Pollutant filter tests


use exiorank_analysis::filter::filter_pollutant;
use test_data_gen::{sample_air_emissions, sample_dataset};

#[test]
fn sums_all_matched_rows_per_column() {
    let account = sample_air_emissions();
    let selection = filter_pollutant(&account, "PM2.5").unwrap();

    // Two PM2.5 rows ("PM2.5 - combustion" + "pm2.5 - process") sum columnwise.
    assert_eq!(selection.matched_labels.len(), 2);
    assert_eq!(selection.series.len(), 9);
    assert_eq!(selection.series.value(0), 5.0); // US | Textiles: 3 + 2
    assert_eq!(selection.series.value(3), 50.0); // CN | Textiles: 40 + 10
    assert_eq!(selection.series.value(8), 20.0); // DE | Apparel: 15 + 5
    assert_eq!(selection.series.value(7), 0.0); // DE | Mining: 0 in both rows
}

#[test]
fn matching_is_case_insensitive() {
    let account = sample_air_emissions();
    let lower = filter_pollutant(&account, "pm2.5").unwrap();
    let upper = filter_pollutant(&account, "PM2.5").unwrap();

    assert_eq!(lower.series, upper.series);
    assert_eq!(lower.matched_labels, upper.matched_labels);
}

#[test]
fn no_match_yields_all_zero_series_over_full_domain() {
    let account = sample_air_emissions();
    let selection = filter_pollutant(&account, "NOx-rare").unwrap();

    assert!(selection.no_match());
    assert!(selection.matched_labels.is_empty());
    assert_eq!(selection.series.len(), account.n_columns());
    assert!(selection.series.values().iter().all(|&v| v == 0.0));
}

#[test]
fn no_match_is_distinguishable_from_zero_valued_match() {
    let mut account = sample_air_emissions();
    // A row that matches but carries only zeros.
    account.row_labels.push("PM10 dust".to_string());
    account.values.push(vec![0.0; 9]);
    let dataset_check = sample_dataset();
    assert_eq!(account.n_columns(), dataset_check.n_columns());

    let zero_match = filter_pollutant(&account, "PM10").unwrap();
    assert!(!zero_match.no_match());
    assert_eq!(zero_match.series.total(), 0.0);

    let no_match = filter_pollutant(&account, "SO2").unwrap();
    assert!(no_match.no_match());
    assert_eq!(no_match.series.total(), 0.0);
}

#[test]
fn zero_columns_are_not_dropped() {
    let account = sample_air_emissions();
    let selection = filter_pollutant(&account, "NOx").unwrap();
    // One matched row; domain stays the full 9 columns regardless of values.
    assert_eq!(selection.matched_labels, vec!["NOx - combustion".to_string()]);
    assert_eq!(selection.series.len(), 9);
}
