//! JSON output.
//!
//! Files are UTF-8, pretty-printed with two-space indentation, and non-ASCII characters are
//! written as-is. Key order is whatever the value serializes with, which for entities is the
//! fixed projection order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::entity::Entity;
use crate::error::CatalogResult;

/// Pretty-printed JSON text for `value`.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> CatalogResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> CatalogResult<()> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// Write a JSON array of entity projections, returning how many were written.
pub fn write_entities<I>(path: impl AsRef<Path>, entities: I) -> CatalogResult<usize>
where
    I: IntoIterator,
    I::Item: Entity,
{
    let projections: Vec<Value> = entities.into_iter().map(|e| e.jsonable()).collect();
    write_json(path, &projections)?;
    Ok(projections.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Planet;

    #[test]
    fn pretty_output_uses_two_space_indent_and_raw_unicode() {
        let text = to_json_string(&Planet::new("u", "Padmé's world")).unwrap();
        assert!(text.starts_with("{\n  \"url\": \"u\",\n  \"name\": \"Padmé's world\","));
        assert!(text.contains("\"population\": null"));
    }
}
