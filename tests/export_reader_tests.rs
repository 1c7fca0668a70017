//! Engine-export loader tests


use std::fs;
use std::io::Write;
use std::path::Path;

use exiorank_io::readers::load_export;
use exiorank_io::Error;
use test_data_gen::{create_temp_dir, write_sample_export};

#[test]
fn loads_a_complete_export() {
    let dir = create_temp_dir("load");
    write_sample_export(&dir);

    let dataset = load_export(&dir).expect("export should load");
    assert_eq!(dataset.regions(), &["US", "CN", "DE"]);
    assert_eq!(dataset.sectors().len(), 3);
    assert_eq!(dataset.n_columns(), 9);

    let account = dataset.account("air_emissions").expect("account present");
    assert_eq!(account.n_rows(), 4);
    assert_eq!(account.n_columns(), 9);
    assert_eq!(account.row_labels[0], "PM2.5 - combustion");
    assert_eq!(account.values[0][3], 40.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn account_name_comes_from_the_file_stem() {
    let dir = create_temp_dir("stem");
    write_sample_export(&dir);

    let dataset = load_export(&dir).unwrap();
    assert_eq!(dataset.account_names(), vec!["air_emissions"]);
    assert!(dataset.account("water_emissions").is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_directory_is_not_found() {
    let dir = create_temp_dir("missing");
    let result = load_export(&dir);
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn missing_regions_file_is_not_found() {
    let dir = create_temp_dir("no-regions");
    write_sample_export(&dir);
    fs::remove_file(dir.join("regions.csv")).unwrap();

    let result = load_export(&dir);
    match result {
        Err(Error::NotFound(path)) => assert!(path.ends_with("regions.csv")),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn wrong_header_is_a_format_error() {
    let dir = create_temp_dir("bad-header");
    write_sample_export(&dir);
    fs::write(dir.join("regions.csv"), "country\nUS\n").unwrap();

    let result = load_export(&dir);
    match result {
        Err(Error::Format { file, reason }) => {
            assert!(file.ends_with("regions.csv"));
            assert!(reason.contains("region"));
        }
        other => panic!("expected Format, got {:?}", other.map(|_| ())),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn non_numeric_cell_is_a_format_error_naming_the_file() {
    let dir = create_temp_dir("bad-cell");
    write_sample_export(&dir);
    let path = dir.join("extensions").join("air_emissions.csv");
    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, content.replace("40,", "forty,")).unwrap();

    let result = load_export(&dir);
    match result {
        Err(Error::Format { file, reason }) => {
            assert!(file.contains("air_emissions"));
            assert!(reason.contains("forty"));
        }
        other => panic!("expected Format, got {:?}", other.map(|_| ())),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn column_count_mismatch_is_a_format_error() {
    let dir = create_temp_dir("bad-cols");
    write_sample_export(&dir);
    let path = dir.join("extensions").join("truncated.csv");
    let mut f = fs::File::create(&path).unwrap();
    writeln!(f, "stressor,US | A,US | B").unwrap();
    writeln!(f, "PM2.5,1.0,2.0").unwrap();
    drop(f);

    let result = load_export(&dir);
    match result {
        Err(Error::Format { file, .. }) => assert!(file.contains("truncated")),
        other => panic!("expected Format, got {:?}", other.map(|_| ())),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn ragged_data_row_is_a_format_error_naming_the_file() {
    let dir = create_temp_dir("ragged");
    write_sample_export(&dir);
    let path = dir.join("extensions").join("air_emissions.csv");
    let content = fs::read_to_string(&path).unwrap();
    // Drop the last cell of the first data row so it no longer matches
    // the header width.
    let ragged: String = content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 1 {
                line.rsplit_once(',').map(|(head, _)| head).unwrap_or(line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&path, ragged).unwrap();

    let result = load_export(&dir);
    match result {
        Err(Error::Format { file, .. }) => assert!(file.contains("air_emissions")),
        other => panic!("expected Format, got {:?}", other.map(|_| ())),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_region_list_surfaces_as_invalid_dataset() {
    let dir = create_temp_dir("empty-regions");
    write_sample_export(&dir);
    fs::write(dir.join("regions.csv"), "region\n").unwrap();
    // The extension table no longer matches a 0-column domain either, so
    // strip it down to labels only.
    write_empty_extension(&dir.join("extensions").join("air_emissions.csv"));

    let result = load_export(&dir);
    assert!(matches!(result, Err(Error::Core(_))));

    let _ = fs::remove_dir_all(&dir);
}

fn write_empty_extension(path: &Path) {
    let mut f = fs::File::create(path).unwrap();
    writeln!(f, "stressor").unwrap();
}
