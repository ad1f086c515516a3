//! Error types for pathlight-core

use thiserror::Error;

/// Main error type for the pathlight-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON interchange error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed journal entry rejected before insertion.
    ///
    /// The only operation in the engine that surfaces an explicit error;
    /// the host UI uses it to prompt the user to fix the entry.
    #[error("invalid journal entry ({field}): {message}")]
    InvalidEntry { field: String, message: String },
}

/// Result type alias for pathlight-core
pub type Result<T> = std::result::Result<T, Error>;
