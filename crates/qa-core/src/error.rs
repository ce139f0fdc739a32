//! Error types for qa-core

use thiserror::Error;

/// Result type alias using qa-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or preparing QA edits
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Attachment payload could not be decoded
    #[error("Attachment decode error: {0}")]
    AttachmentDecode(#[from] base64::DecodeError),
}
