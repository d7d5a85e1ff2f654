//! JSON record loading.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"name":"Hoth"}, {"name":"Endor"}]`
//! - A single object: `{"name":"Hoth"}`
//! - A catalog search envelope: `{"count":1,"results":[{"name":"Hoth"}]}`
//! - Newline-delimited JSON (NDJSON): `{"name":"Hoth"}\n{"name":"Endor"}\n`

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::types::RawRecord;

/// Read a JSON file into raw records.
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> CatalogResult<Vec<RawRecord>> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Read JSON from an in-memory string into raw records.
pub fn ingest_json_from_str(input: &str) -> CatalogResult<Vec<RawRecord>> {
    let trimmed = input.trim().trim_start_matches('\u{feff}');
    if trimmed.is_empty() {
        return Err(CatalogError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    let document_err = match serde_json::from_str::<Value>(trimmed) {
        Ok(v) => return records_from_document(v),
        Err(e) => e,
    };

    // NDJSON only if the first line is a complete value on its own; otherwise the document
    // itself is malformed.
    let mut lines = trimmed.lines().map(str::trim).filter(|l| !l.is_empty());
    let first_is_value = lines
        .next()
        .is_some_and(|l| serde_json::from_str::<Value>(l).is_ok());
    if !first_is_value || lines.next().is_none() {
        return Err(document_err.into());
    }

    let mut values = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<Value>(line).map_err(|e| CatalogError::SchemaMismatch {
            message: format!("invalid ndjson at line {}: {}", i + 1, e),
        })?;
        values.push(v);
    }
    records_from_values(values)
}

fn records_from_document(v: Value) -> CatalogResult<Vec<RawRecord>> {
    match v {
        Value::Array(items) => records_from_values(items),
        Value::Object(obj) => match obj.get("results") {
            Some(Value::Array(items)) => records_from_values(items.clone()),
            _ => Ok(vec![RawRecord::from_map(obj)]),
        },
        _ => Err(CatalogError::SchemaMismatch {
            message: "json must be an object, an array of objects, or NDJSON".to_string(),
        }),
    }
}

fn records_from_values(values: Vec<Value>) -> CatalogResult<Vec<RawRecord>> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx0, v)| match v {
            Value::Object(obj) => Ok(RawRecord::from_map(obj)),
            _ => Err(CatalogError::SchemaMismatch {
                message: format!("row {} is not a json object", idx0 + 1),
            }),
        })
        .collect()
}
