//! Error types for reply extraction

use thiserror::Error;

/// Errors that can occur while configuring the reply parser.
///
/// Parsing a message body never fails; only options can be rejected.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Options were well-formed but out of range
    #[error("Invalid parser options: {0}")]
    InvalidOptions(String),

    /// Options could not be deserialized
    #[error("Failed to read parser options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Result type for reply parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
