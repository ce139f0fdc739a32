//! Headless form view backed by plain fields.

use super::{FormView, TextField};
use crate::attachment::ImagePreview;
use crate::models::{AttachmentIntent, SelectedFile};

/// In-memory [`FormView`] used by the CLI and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFormView {
    pub page_url: String,
    pub writer: String,
    pub email: String,
    pub title: String,
    pub password: String,
    pub redirect_url: String,
    pub hidden: bool,
    pub editor_html: String,
    /// Number of times an editor was bound to the container
    pub editor_mounts: usize,
    pub selected_file: Option<SelectedFile>,
    pub attachment_label: String,
    /// `None` until the controller writes the hidden input
    pub keep_attachment: Option<AttachmentIntent>,
    pub remove_control_visible: bool,
    pub preview: Option<ImagePreview>,
    pub alerts: Vec<String>,
    pub navigated_to: Option<String>,
}

impl MemoryFormView {
    /// Empty form hosted at `page_url`.
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            ..Self::default()
        }
    }

    /// Current `keepAttachment` input value.
    pub fn keep_attachment_value(&self) -> Option<&'static str> {
        self.keep_attachment.map(AttachmentIntent::as_form_value)
    }

    /// Drain alerts shown so far.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Writer => &mut self.writer,
            TextField::Email => &mut self.email,
            TextField::Title => &mut self.title,
            TextField::Password => &mut self.password,
            TextField::RedirectUrl => &mut self.redirect_url,
        }
    }
}

impl FormView for MemoryFormView {
    fn page_url(&self) -> String {
        self.page_url.clone()
    }

    fn text(&self, field: TextField) -> String {
        match field {
            TextField::Writer => self.writer.clone(),
            TextField::Email => self.email.clone(),
            TextField::Title => self.title.clone(),
            TextField::Password => self.password.clone(),
            TextField::RedirectUrl => self.redirect_url.clone(),
        }
    }

    fn set_text(&mut self, field: TextField, value: &str) {
        *self.field_mut(field) = value.to_string();
    }

    fn hidden_checked(&self) -> bool {
        self.hidden
    }

    fn set_hidden_checked(&mut self, checked: bool) {
        self.hidden = checked;
    }

    fn mount_editor(&mut self) {
        self.editor_mounts += 1;
        self.editor_html.clear();
    }

    fn editor_html(&self) -> String {
        self.editor_html.clone()
    }

    fn set_editor_html(&mut self, html: &str) {
        self.editor_html = html.to_string();
    }

    fn selected_file(&self) -> Option<SelectedFile> {
        self.selected_file.clone()
    }

    fn clear_file_picker(&mut self) {
        self.selected_file = None;
    }

    fn set_attachment_label(&mut self, label: &str) {
        self.attachment_label = label.to_string();
    }

    fn set_attachment_intent(&mut self, intent: AttachmentIntent) {
        self.keep_attachment = Some(intent);
    }

    fn set_remove_control_visible(&mut self, visible: bool) {
        self.remove_control_visible = visible;
    }

    fn show_preview(&mut self, preview: &ImagePreview) {
        self.preview = Some(preview.clone());
    }

    fn clear_preview(&mut self) {
        self.preview = None;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, url: &str) {
        self.navigated_to = Some(url.to_string());
    }
}
