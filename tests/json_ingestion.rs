use serde_json::json;
use swapi_entities::ingestion::json::{ingest_json_from_path, ingest_json_from_str};
use swapi_entities::CatalogError;

#[test]
fn ingest_json_array_from_path_happy_path() {
    let records = ingest_json_from_path("tests/fixtures/droids.json").unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), Some("R2-D2"));
    assert_eq!(records[1].name(), Some("C-3PO"));
}

#[test]
fn ingest_json_unwraps_search_envelope() {
    let records = ingest_json_from_path("tests/fixtures/people.json").unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].name(), Some("Padmé Amidala"));
    assert_eq!(records[0].get("force_sensitive"), Some(&json!(true)));
}

#[test]
fn ingest_json_ndjson_happy_path() {
    let input = r#"
{"name":"Tatooine","suns":2}
{"name":"Naboo","suns":1}
"#;
    let records = ingest_json_from_str(input).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].text("suns").as_deref(), Some("1"));
}

#[test]
fn ingest_json_single_object_is_one_record() {
    let records = ingest_json_from_str(r#"{"name":"Hoth","results":"none"}"#).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text("results").as_deref(), Some("none"));
}

#[test]
fn ingest_json_errors_on_non_object_row() {
    let err = ingest_json_from_str(r#"[{"name":"Hoth"}, 42]"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("row 2 is not a json object"));
}

#[test]
fn ingest_json_errors_on_bad_ndjson_line() {
    let err = ingest_json_from_str("{\"name\":\"Hoth\"}\n{oops}\n").unwrap_err();
    assert!(err.to_string().contains("invalid ndjson at line 2"));
}

#[test]
fn ingest_json_errors_on_empty_input() {
    let err = ingest_json_from_str("  \n").unwrap_err();
    assert!(err.to_string().contains("json input is empty"));
}

#[test]
fn ingest_json_malformed_document_is_a_json_error() {
    let err = ingest_json_from_str(r#"{"name": "Hoth", "climate": }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)), "{err}");
    assert!(err.to_string().starts_with("json error"));

    let pretty = "[\n  {\"name\": \"Hoth\"},\n  {\"name\": \"Endor\"\n]\n";
    let err = ingest_json_from_str(pretty).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)), "{err}");
}
