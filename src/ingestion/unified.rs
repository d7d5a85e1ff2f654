//! Unified record loading entrypoint.
//!
//! Most callers should use [`load_records_from_path`], which reads a CSV or JSON file into raw
//! records.
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file extension.
//! - If a [`CatalogObserver`] is provided, success/failure/alerts are reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::ResourceKind;
use crate::error::{CatalogError, CatalogResult};
use crate::types::RawRecord;

use super::observability::{CatalogObserver, LoadContext, LoadStats, Severity};
use super::{csv, json};

/// Supported record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array/object/envelope or NDJSON.
    Json,
}

impl RecordFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

/// Options controlling record loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, detect format from the file extension.
    pub format: Option<RecordFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn CatalogObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
    /// Collection the file holds, reported to the observer. Set by
    /// [`crate::catalog::InMemoryCatalog::load_path`].
    pub resource: Option<ResourceKind>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("resource", &self.resource)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: Severity::Critical,
            resource: None,
        }
    }
}

/// Load raw records from a CSV or JSON file.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the record count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use swapi_entities::factory::create_planet;
/// use swapi_entities::ingestion::{load_records_from_path, LoadOptions};
///
/// # fn main() -> Result<(), swapi_entities::CatalogError> {
/// let records = load_records_from_path("wookieepedia_planets.csv", &LoadOptions::default())?;
/// let planets = records.iter().map(create_planet).collect::<Result<Vec<_>, _>>()?;
/// println!("planets={}", planets.len());
/// # Ok(())
/// # }
/// ```
///
/// Forcing a format and logging to stderr:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use swapi_entities::ingestion::{
///     load_records_from_path, LoadOptions, RecordFormat, Severity, StdErrObserver,
/// };
///
/// let opts = LoadOptions {
///     format: Some(RecordFormat::Json),
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: Severity::Error,
///     ..Default::default()
/// };
/// let _ = load_records_from_path("droids_without_extension", &opts);
/// ```
pub fn load_records_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> CatalogResult<Vec<RawRecord>> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = LoadContext {
        path: path.to_path_buf(),
        format: fmt,
        resource: options.resource,
    };

    let result = match fmt {
        RecordFormat::Csv => csv::ingest_csv_from_path(path),
        RecordFormat::Json => json::ingest_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(records) => obs.on_success(&ctx, LoadStats { records: records.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &CatalogError) -> Severity {
    match e {
        CatalogError::Io(_) => Severity::Critical,
        CatalogError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        CatalogError::Json(err) if err.is_io() => Severity::Critical,
        CatalogError::Json(_) => Severity::Error,
        CatalogError::SchemaMismatch { .. }
        | CatalogError::MissingField { .. }
        | CatalogError::Conversion { .. }
        | CatalogError::NotFound { .. } => Severity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> CatalogResult<RecordFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CatalogError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    RecordFormat::from_extension(ext).ok_or_else(|| CatalogError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}
