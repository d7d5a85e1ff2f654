use thiserror::Error;

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type returned by record loading, conversion, and entity construction.
///
/// One enum is shared by every layer so callers can propagate with `?` from file read all the
/// way to a finished [`crate::entity::Starship`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding or encoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input file does not have the expected shape (not an object, no header row, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A required field is absent from a raw record.
    #[error("{entity} record missing required field '{field}'")]
    MissingField { entity: &'static str, field: String },

    /// A field value could not be coerced to its declared type.
    #[error("failed to convert field '{field}': {message} (raw='{raw}')")]
    Conversion {
        field: String,
        raw: String,
        message: String,
    },

    /// A catalog lookup returned no record for the query.
    #[error("no {resource} record matches '{query}'")]
    NotFound { resource: &'static str, query: String },
}

impl CatalogError {
    pub(crate) fn conversion(field: &str, raw: &str, message: impl Into<String>) -> Self {
        Self::Conversion {
            field: field.to_owned(),
            raw: raw.to_owned(),
            message: message.into(),
        }
    }
}
