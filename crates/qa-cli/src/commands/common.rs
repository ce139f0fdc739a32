use std::path::Path;

use qa_core::api::HttpQaApi;
use qa_core::config::ClientConfig;
use qa_core::attachment::ImagePreview;
use qa_core::form::{record_id_from_url, FormController, LoadOutcome, MemoryFormView, TextField};
use qa_core::SelectedFile;
use serde::Serialize;

use crate::cli::RecordTarget;
use crate::error::CliError;

/// Path of the edit page that hosts the form on the site.
pub const EDIT_PAGE_PATH: &str = "/qa-update";

pub type CliFormController = FormController<HttpQaApi, MemoryFormView>;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FormSummary {
    pub writer: String,
    pub email: String,
    pub title: String,
    pub hidden: bool,
    pub content: String,
    pub redirect_url: String,
    pub attachment: Option<String>,
    pub keep_attachment: Option<&'static str>,
    /// CSS the page applies to the inline preview, when one is shown
    pub preview_style: Option<String>,
}

pub fn build_client_config(base_url_override: Option<&str>) -> Result<ClientConfig, CliError> {
    let config = ClientConfig::from_env()?;
    match base_url_override {
        Some(base_url) => Ok(config.with_base_url(base_url)?),
        None => Ok(config),
    }
}

/// Page URL the form is "hosted" at, so the controller can read `id` from it.
pub fn resolve_page_url(target: &RecordTarget, api_base_url: &str) -> Result<String, CliError> {
    if let Some(url) = target.url.as_deref() {
        let url = url.trim();
        if record_id_from_url(url).is_none() {
            return Err(CliError::MissingRecordId(url.to_string()));
        }
        return Ok(url.to_string());
    }

    let id = target
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(CliError::EmptyRecordId)?;
    Ok(format!(
        "{api_base_url}{EDIT_PAGE_PATH}?id={}",
        urlencoding::encode(id)
    ))
}

/// Build a controller for `target` and run the initial load.
pub async fn open_form(
    target: &RecordTarget,
    base_url_override: Option<&str>,
) -> Result<CliFormController, CliError> {
    let config = build_client_config(base_url_override)?;
    let page_url = resolve_page_url(target, config.api_base_url())?;
    let api = HttpQaApi::new(&config)?;
    tracing::info!(base_url = api.base_url(), page_url = %page_url, "Opening QA edit form");

    let mut controller = FormController::new(api, MemoryFormView::new(page_url.clone()));
    let outcome = controller.load().await;
    print_alerts(controller.view_mut());

    match outcome? {
        LoadOutcome::Loaded => Ok(controller),
        LoadOutcome::NoRecordId => Err(CliError::MissingRecordId(page_url)),
    }
}

pub fn print_alerts(view: &mut MemoryFormView) {
    for alert in view.take_alerts() {
        eprintln!("[alert] {alert}");
    }
}

pub async fn read_selected_file(path: &Path) -> Result<SelectedFile, CliError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidAttachmentPath(path.display().to_string()))?;
    let bytes = tokio::fs::read(path).await?;
    Ok(SelectedFile::new(name, bytes))
}

pub fn summarize_form(view: &MemoryFormView) -> FormSummary {
    FormSummary {
        writer: view.writer.clone(),
        email: view.email.clone(),
        title: view.title.clone(),
        hidden: view.hidden,
        content: view.editor_html.clone(),
        redirect_url: view.redirect_url.clone(),
        attachment: Some(view.attachment_label.trim())
            .filter(|label| !label.is_empty())
            .map(str::to_string),
        keep_attachment: view.keep_attachment_value(),
        preview_style: view.preview.as_ref().map(|_| ImagePreview::inline_style()),
    }
}

/// Form state as `name: value` lines keyed by the page's control names,
/// followed by the editor HTML.
pub fn format_form_lines(summary: &FormSummary) -> Vec<String> {
    let mut lines = vec![
        field_line(TextField::Writer.element_id(), &summary.writer),
        field_line(TextField::Email.element_id(), &summary.email),
        field_line(TextField::Title.element_id(), &summary.title),
        field_line("hidden", summary.hidden),
        field_line(TextField::RedirectUrl.element_id(), &summary.redirect_url),
    ];
    if let Some(attachment) = &summary.attachment {
        let preview = if summary.preview_style.is_some() {
            " (preview)"
        } else {
            ""
        };
        lines.push(field_line("attachment", format!("{attachment}{preview}")));
    }
    lines.push(String::new());
    lines.push(summary.content.clone());
    lines
}

fn field_line(name: &str, value: impl std::fmt::Display) -> String {
    format!("{:<13} {value}", format!("{name}:"))
}
