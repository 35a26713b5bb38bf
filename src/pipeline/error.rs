//! Error types for loading and serializing tab-delimited documents.

use thiserror::Error;

/// Errors that can occur while converting a document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The XML writer failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// A header field cannot be used as an XML element name.
    #[error("Header field '{name}' is not a valid XML element name")]
    InvalidElementName {
        /// The offending header field
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
