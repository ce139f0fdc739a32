//! `reqwest` implementation of [`QaApi`].

use reqwest::multipart::{Form, Part};

use super::{ApiError, QaApi, QaUpdate};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::QaRecord;

const RECORDS_ROUTE: &str = "/api/qas";

/// HTTP client for the QA backend.
#[derive(Debug, Clone)]
pub struct HttpQaApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpQaApi {
    /// Builds a client from connection settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: config.api_base_url().to_string(),
            client: builder.build()?,
        })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for a single record; the id is encoded as one path segment.
    pub fn record_url(&self, id: &str) -> String {
        format!(
            "{}{RECORDS_ROUTE}/{}",
            self.base_url,
            urlencoding::encode(id)
        )
    }
}

impl QaApi for HttpQaApi {
    async fn fetch_qa(&self, id: &str) -> std::result::Result<QaRecord, ApiError> {
        let response = self
            .client
            .get(self.record_url(id))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        let response = ensure_success(response).await?;
        let body = response
            .text()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;
        serde_json::from_str(&body).map_err(|error| ApiError::Decode(error.to_string()))
    }

    async fn update_qa(&self, id: &str, update: &QaUpdate) -> std::result::Result<(), ApiError> {
        let form = build_multipart(update)?;
        let response = self
            .client
            .patch(self.record_url(id))
            .multipart(form)
            .send()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(
    response: reqwest::Response,
) -> std::result::Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::status(status, &body))
}

fn build_multipart(update: &QaUpdate) -> std::result::Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in update.form_fields() {
        form = form.text(name, value);
    }

    if let Some(file) = &update.attachment {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type())
            .map_err(|error| ApiError::Transport(format!("invalid attachment type: {error}")))?;
        form = form.part("attachment", part);
    }

    Ok(form)
}
