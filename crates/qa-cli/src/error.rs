use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] qa_core::Error),
    #[error(transparent)]
    Form(#[from] qa_core::form::FormError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Record ID cannot be empty")]
    EmptyRecordId,
    #[error("No record id found in page URL: {0}")]
    MissingRecordId(String),
    #[error("Attachment path has no file name: {0}")]
    InvalidAttachmentPath(String),
    #[error("Record has no image preview to save")]
    NoPreview,
}
