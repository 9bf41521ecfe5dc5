//! Error types for the directory-core crate.
//!
//! Catalog loading and parsing the string form of the enums can fail here;
//! filter state and ranking inputs are repaired by clamping instead of rejected.

use thiserror::Error;

/// Errors that can occur while loading a listing catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents were not valid JSON for the expected shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A listing field had an invalid value
    #[error("Invalid value for {field} on listing {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Two listings share the same id
    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),
}

/// Error returned when parsing a directory, service type or sort order
/// from its string form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
