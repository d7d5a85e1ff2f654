//! Scalar converters for raw catalog fields.
//!
//! Catalog fields arrive as text. These functions coerce a single value to its declared type.
//! Blank handling is explicit: callers decide absence with [`is_blank`] / [`to_none`] before
//! invoking a numeric converter, so a malformed number is an error while an `"unknown"` one is
//! simply absent.

use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};

/// Sentinels the catalog uses for "no value".
const BLANK_SENTINELS: &[&str] = &["unknown", "n/a"];

/// Unit assumed when a gravity value carries only a magnitude.
pub const DEFAULT_GRAVITY_UNIT: &str = "standard";

/// Parsed gravity value, e.g. `"1 standard"` or `"0.9"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gravity {
    /// Magnitude relative to the unit.
    pub measure: f64,
    /// Unit name (defaults to [`DEFAULT_GRAVITY_UNIT`]).
    pub unit: String,
}

/// Returns `true` for empty, whitespace-only, `"unknown"` and `"n/a"` values (case-insensitive).
///
/// A literal `"0"` is not blank.
pub fn is_blank(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || BLANK_SENTINELS
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
}

/// Returns `None` for blank values, otherwise the trimmed value.
pub fn to_none(raw: &str) -> Option<&str> {
    if is_blank(raw) { None } else { Some(raw.trim()) }
}

/// Parse an integer. `,` thousands separators are accepted.
pub fn to_int(field: &str, raw: &str) -> CatalogResult<i64> {
    numeric_text(raw)
        .parse::<i64>()
        .map_err(|e| CatalogError::conversion(field, raw, e.to_string()))
}

/// Parse a float. `,` thousands separators are accepted.
///
/// `NaN` and infinities are rejected: JSON has no representation for them.
pub fn to_float(field: &str, raw: &str) -> CatalogResult<f64> {
    let value = numeric_text(raw)
        .parse::<f64>()
        .map_err(|e| CatalogError::conversion(field, raw, e.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CatalogError::conversion(field, raw, "expected a finite number"))
    }
}

/// Split on `separator`, trimming each piece and dropping empty ones.
pub fn to_list(raw: &str, separator: &str) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a whitespace-separated `"magnitude [unit]"` gravity string.
///
/// The unit is taken only when the value has exactly two tokens; anything else (a bare number,
/// or a longer description such as `"1.5 (surface), 1 standard"`) falls back to
/// [`DEFAULT_GRAVITY_UNIT`].
pub fn convert_gravity_value(field: &str, raw: &str) -> CatalogResult<Gravity> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let first = tokens
        .first()
        .ok_or_else(|| CatalogError::conversion(field, raw, "empty gravity value"))?;
    let measure = to_float(field, first)?;
    let unit = match tokens.as_slice() {
        [_, unit] => (*unit).to_owned(),
        _ => DEFAULT_GRAVITY_UNIT.to_owned(),
    };
    Ok(Gravity { measure, unit })
}

/// Parse a boolean flag (`true/false`, `t/f`, `yes/no`, `y/n`, `1/0`).
pub fn to_bool(field: &str, raw: &str) -> CatalogResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err(CatalogError::conversion(
            field,
            raw,
            "expected bool (true/false/1/0/yes/no)",
        )),
    }
}

fn numeric_text(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != ',').collect()
}
