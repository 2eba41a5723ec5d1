//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while decoding a heap snapshot
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid snapshot schema: {0}")]
    Schema(String),

    #[error("Runtime schema is not loaded, call load() first")]
    InvalidState,
}

impl ParseError {
    /// Shorthand for a missing required field in one of the flat arrays
    pub(crate) fn missing_field(section: &str, field: &str) -> Self {
        Self::Schema(format!("missing required {} field '{}'", section, field))
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema(err.to_string())
    }
}

/// Errors that can occur while reading a performance-reporter capture
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during file input and output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
