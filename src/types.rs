//! Raw record type shared by ingestion, catalog lookup, and the entity factories.
//!
//! A [`RawRecord`] is a field-keyed record exactly as it arrives from a CSV row or a catalog JSON
//! object, before any type coercion. Field order is preserved so a record can be written back
//! out in the order it was read.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CatalogError, CatalogResult};

/// A single field-keyed source record.
///
/// Values are usually strings (CSV cells, SWAPI fields), but JSON inputs may carry numbers,
/// booleans, or arrays; [`RawRecord::text`] renders any scalar as text so factories can treat
/// both sources the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns `true` if `field` is present (even when its value is null or blank).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Raw JSON value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set (or overwrite) a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Text form of a field.
    ///
    /// Returns `None` for absent fields and explicit JSON `null`. Strings are borrowed as-is;
    /// numbers and booleans are rendered; arrays/objects fall back to their JSON text.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.fields.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Text of a required field, or [`CatalogError::MissingField`] naming `entity`.
    pub fn require(&self, entity: &'static str, field: &str) -> CatalogResult<String> {
        self.text(field)
            .map(Cow::into_owned)
            .ok_or_else(|| CatalogError::MissingField {
                entity,
                field: field.to_owned(),
            })
    }

    /// The record's `name` field, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Returns `true` if the record's name equals `name`, ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name()
            .is_some_and(|n| n.trim().to_lowercase() == name.trim().to_lowercase())
    }

    /// Copy every field of `other` into this record; fields already present are overwritten.
    pub fn merge_from(&mut self, other: &RawRecord) {
        for (k, v) in &other.fields {
            self.fields.insert(k.clone(), v.clone());
        }
    }

    /// Consume the record, returning the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}
