//! Error types for the medalert-core library.

use thiserror::Error;

/// Main error type for the medalert library.
#[derive(Error, Debug)]
pub enum MedAlertError {
    /// Label interpretation error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a label could not be interpreted.
///
/// Optional fields never produce an error; only the mandatory drug name does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The text had no non-blank lines.
    #[error("no label text found")]
    NoData,

    /// Required field is missing.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Required field was found but cleaned down to nothing.
    #[error("required field is empty after cleaning: {0}")]
    EmptyField(String),
}

/// Result type for the medalert library.
pub type Result<T> = std::result::Result<T, MedAlertError>;
