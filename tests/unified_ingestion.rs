use std::io::Write;

use swapi_entities::ingestion::{load_records_from_path, LoadOptions, RecordFormat};
use swapi_entities::CatalogError;

#[test]
fn unified_load_csv_auto_by_extension() {
    let records = load_records_from_path("tests/fixtures/planets.csv", &LoadOptions::default()).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[3].name(), Some("Bespin"));
}

#[test]
fn unified_load_json_and_ndjson_auto_by_extension() {
    let opts = LoadOptions::default();
    let people = load_records_from_path("tests/fixtures/people.json", &opts).unwrap();
    assert_eq!(people.len(), 3);

    let extra = load_records_from_path("tests/fixtures/planets_extra.ndjson", &opts).unwrap();
    assert_eq!(extra.len(), 3);
    assert_eq!(extra[0].text("sector").as_deref(), Some("Arkanis"));
}

#[test]
fn unified_load_explicit_format_overrides_extension() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "url,name\nplanets/4,Hoth").unwrap();

    let opts = LoadOptions {
        format: Some(RecordFormat::Csv),
        ..Default::default()
    };
    let records = load_records_from_path(file.path(), &opts).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), Some("Hoth"));
}

#[test]
fn unified_load_unknown_extension_errors() {
    let err = load_records_from_path("tests/fixtures/planets.parquet", &LoadOptions::default()).unwrap_err();
    assert!(err.to_string().contains("cannot infer format from extension 'parquet'"));
}

#[test]
fn unified_load_csv_as_json_errors() {
    let opts = LoadOptions {
        format: Some(RecordFormat::Json),
        ..Default::default()
    };
    let err = load_records_from_path("tests/fixtures/starships.csv", &opts).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)), "{err}");
}
