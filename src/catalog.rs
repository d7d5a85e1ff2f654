//! Catalog lookup.
//!
//! The entity layer never talks to a remote API directly. Lookups go through [`CatalogSource`],
//! which mirrors a SWAPI-style search endpoint: a resource kind plus a free-text query, answered
//! with zero or more raw records. [`InMemoryCatalog`] implements it over records loaded from
//! files.

use std::fmt;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::ingestion::{LoadOptions, load_records_from_path};
use crate::types::RawRecord;

/// Catalog resource collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    People,
    Planets,
    Starships,
}

impl ResourceKind {
    /// Resource path segment, e.g. `"planets"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
            Self::Starships => "starships",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of raw catalog records.
pub trait CatalogSource {
    /// Search `kind` for records matching `query`.
    ///
    /// Implementations should follow catalog search semantics: a case-insensitive substring
    /// match on `name`. An empty result is `Ok(vec![])`, not an error.
    fn fetch_by_query(&self, kind: ResourceKind, query: &str) -> CatalogResult<Vec<RawRecord>>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn fetch_by_query(&self, kind: ResourceKind, query: &str) -> CatalogResult<Vec<RawRecord>> {
        (**self).fetch_by_query(kind, query)
    }
}

/// Catalog backed by records held in memory.
///
/// Besides name search, a query equal to a record's `url` also matches, so person records whose
/// `homeworld` is a resource URL resolve too.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    people: Vec<RawRecord>,
    planets: Vec<RawRecord>,
    starships: Vec<RawRecord>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record to a collection.
    pub fn insert(&mut self, kind: ResourceKind, record: RawRecord) {
        self.collection_mut(kind).push(record);
    }

    /// Add many records to a collection.
    pub fn extend(&mut self, kind: ResourceKind, records: impl IntoIterator<Item = RawRecord>) {
        self.collection_mut(kind).extend(records);
    }

    /// Load a CSV/JSON file into a collection, returning the number of records added.
    pub fn load_path(
        &mut self,
        kind: ResourceKind,
        path: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> CatalogResult<usize> {
        let options = LoadOptions {
            resource: Some(kind),
            ..options.clone()
        };
        let records = load_records_from_path(path, &options)?;
        let n = records.len();
        self.extend(kind, records);
        Ok(n)
    }

    /// All records of a collection, in insertion order.
    pub fn records(&self, kind: ResourceKind) -> &[RawRecord] {
        match kind {
            ResourceKind::People => &self.people,
            ResourceKind::Planets => &self.planets,
            ResourceKind::Starships => &self.starships,
        }
    }

    fn collection_mut(&mut self, kind: ResourceKind) -> &mut Vec<RawRecord> {
        match kind {
            ResourceKind::People => &mut self.people,
            ResourceKind::Planets => &mut self.planets,
            ResourceKind::Starships => &mut self.starships,
        }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn fetch_by_query(&self, kind: ResourceKind, query: &str) -> CatalogResult<Vec<RawRecord>> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .records(kind)
            .iter()
            .filter(|r| {
                r.name().is_some_and(|n| n.to_lowercase().contains(&needle))
                    || r.text("url").is_some_and(|u| u.trim() == query.trim())
            })
            .cloned()
            .collect())
    }
}

/// Look up a single record by name and merge supplemental data into it.
///
/// Among the search hits, the first whose name (or url) equals `name` exactly, ignoring case, is
/// preferred; otherwise the first hit is used. Every record in `supplemental` whose name matches
/// is then merged over it in order, later fields overwriting earlier ones.
pub fn resolve_record<S>(
    source: &S,
    kind: ResourceKind,
    name: &str,
    supplemental: &[RawRecord],
) -> CatalogResult<RawRecord>
where
    S: CatalogSource + ?Sized,
{
    let hits = source.fetch_by_query(kind, name)?;
    let exact = hits
        .iter()
        .position(|r| r.name_matches(name) || r.text("url").is_some_and(|u| u.trim() == name.trim()));

    let mut record = match exact {
        Some(idx) => hits[idx].clone(),
        None => hits.into_iter().next().ok_or_else(|| CatalogError::NotFound {
            resource: kind.as_str(),
            query: name.to_owned(),
        })?,
    };

    let canonical = record.name().unwrap_or(name).to_owned();
    for extra in supplemental.iter().filter(|r| r.name_matches(&canonical)) {
        record.merge_from(extra);
    }
    Ok(record)
}
