//! Backend API for QA records.
//!
//! [`QaApi`] is the seam the form controller talks through; [`HttpQaApi`]
//! is the production implementation over `reqwest`.

use std::future::Future;

use thiserror::Error;

use crate::models::{AttachmentIntent, QaRecord, SelectedFile};

mod http;

pub use http::HttpQaApi;

/// Failures talking to the QA backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("request failed with HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Compacted response body
        body: String,
    },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not a valid QA record
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Longest response body excerpt kept in a [`ApiError::Status`].
pub const MAX_ERROR_BODY_CHARS: usize = 180;

impl ApiError {
    /// Status failure carrying a trimmed excerpt of the response body.
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
        }
    }

    /// Whether the server responded with an error status.
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Multipart update sent with `PATCH /api/qas/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaUpdate {
    pub writer: String,
    pub email: String,
    pub title: String,
    pub password: String,
    pub hidden: bool,
    /// Editor HTML, overriding any plain `content` input
    pub content: String,
    pub redirect_url: String,
    pub attachment_intent: AttachmentIntent,
    /// Newly picked file, sent as the `attachment` part
    pub attachment: Option<SelectedFile>,
}

impl QaUpdate {
    /// Text parts of the form in submission order.
    ///
    /// `hidden` behaves like an HTML checkbox: present as `"true"` when
    /// checked, omitted otherwise.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("writer", self.writer.clone()),
            ("email", self.email.clone()),
            ("title", self.title.clone()),
            ("password", self.password.clone()),
        ];
        if self.hidden {
            fields.push(("hidden", "true".to_string()));
        }
        fields.push(("redirect_url", self.redirect_url.clone()));
        fields.push((
            "keepAttachment",
            self.attachment_intent.as_form_value().to_string(),
        ));
        fields.push(("content", self.content.clone()));
        fields
    }
}

/// Operations the form controller needs from the backend.
pub trait QaApi {
    /// `GET /api/qas/{id}`
    fn fetch_qa(&self, id: &str) -> impl Future<Output = Result<QaRecord, ApiError>> + Send;

    /// `PATCH /api/qas/{id}` with a multipart body
    fn update_qa(
        &self,
        id: &str,
        update: &QaUpdate,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
