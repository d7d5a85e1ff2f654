//! Raw record loading.
//!
//! Most callers should use [`load_records_from_path`] (from [`unified`]) which:
//!
//! - auto-detects CSV vs JSON by file extension (or you can override via [`LoadOptions`])
//! - returns every row/object as a [`crate::types::RawRecord`], unconverted
//! - optionally reports success/failure/alerts to a [`CatalogObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    AttachmentCleared, CatalogObserver, CompositeObserver, FileObserver, LoadContext, LoadStats, Severity,
    StdErrObserver,
};
pub use unified::{load_records_from_path, LoadOptions, RecordFormat};
