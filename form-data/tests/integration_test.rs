//! Loads the shipped data files from disk.

use std::path::PathBuf;

use form_core::derive_location;
use form_data::{ColorLoader, DataLoadError, ZipLoader, default_zip_table};
use pretty_assertions::assert_eq;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_json_and_csv_tables_agree_on_shared_codes() {
    let json = ZipLoader::load_file(&data_path("zipcodes.json")).expect("load JSON");
    let csv = ZipLoader::load_file(&data_path("zipcodes.csv")).expect("load CSV");

    for record in csv.records() {
        assert_eq!(json.find(&record.zipcode), Some(record), "zip {}", record.zipcode);
    }
}

#[test]
fn test_springfield_resolves_from_the_bundled_table() {
    let table = default_zip_table().unwrap();

    let location = derive_location("62701", &table);

    assert_eq!(location.city, "Springfield");
    assert_eq!(location.state, "IL");
}

#[test]
fn test_color_file_loads_in_order() {
    let table = ColorLoader::load_file(&data_path("colors.json")).expect("load colors");

    let names: Vec<_> = table.names().take(3).collect();
    assert_eq!(names, vec!["Red", "Orange", "Yellow"]);
}

#[test]
fn test_colors_cannot_come_from_csv() {
    let err = ColorLoader::load_file(&data_path("zipcodes.csv")).unwrap_err();

    assert!(matches!(err, DataLoadError::UnsupportedFormat(_)), "got {err:?}");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = ZipLoader::load_file(&data_path("nope.json")).unwrap_err();

    assert!(matches!(err, DataLoadError::Io(_)), "got {err:?}");
}
