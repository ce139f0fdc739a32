//! Form controller for editing a QA record.
//!
//! The controller never touches a document directly. Frontends implement
//! [`FormView`], which exposes one typed accessor per form control, and
//! [`MemoryFormView`] provides a headless implementation.

use thiserror::Error;

use crate::api::ApiError;
use crate::attachment::{build_image_preview, ImagePreview};
use crate::models::{AttachmentIntent, QaRecord, SelectedFile};

mod controller;
mod memory;
pub mod messages;

pub use controller::{FormController, LoadOutcome};
pub use memory::MemoryFormView;

/// Query parameter carrying the record id on the edit page.
pub const RECORD_ID_PARAM: &str = "id";

/// Plain text inputs of the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Writer,
    Email,
    Title,
    Password,
    /// Hidden input holding the post-edit redirect target
    RedirectUrl,
}

impl TextField {
    /// Element id / form field name of the control.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Writer => "writer",
            Self::Email => "email",
            Self::Title => "title",
            Self::Password => "password",
            Self::RedirectUrl => "redirect_url",
        }
    }
}

/// Everything the controller reads from or writes to the page.
pub trait FormView {
    /// Full URL of the page hosting the form.
    fn page_url(&self) -> String;

    fn text(&self, field: TextField) -> String;
    fn set_text(&mut self, field: TextField, value: &str);

    /// State of the `hidden` checkbox.
    fn hidden_checked(&self) -> bool;
    fn set_hidden_checked(&mut self, checked: bool);

    /// Bind a fresh rich-text editor to the editor container.
    fn mount_editor(&mut self);
    /// Current inner HTML of the editor.
    fn editor_html(&self) -> String;
    fn set_editor_html(&mut self, html: &str);

    /// File currently chosen in the attachment picker.
    fn selected_file(&self) -> Option<SelectedFile>;
    fn clear_file_picker(&mut self);

    fn set_attachment_label(&mut self, label: &str);
    /// Write the `keepAttachment` hidden input.
    fn set_attachment_intent(&mut self, intent: AttachmentIntent);
    fn set_remove_control_visible(&mut self, visible: bool);
    fn show_preview(&mut self, preview: &ImagePreview);
    fn clear_preview(&mut self);

    /// Blocking user notification.
    fn alert(&mut self, message: &str);
    /// Leave the page for `url`.
    fn navigate(&mut self, url: &str);
}

/// Outcome of a failed controller action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Failed to load QA record: {0}")]
    Load(ApiError),
    #[error("Failed to update QA record: {0}")]
    Submit(ApiError),
    #[error("Page URL does not carry a record id")]
    MissingRecordId,
}

/// Read the `id` query parameter from a page URL.
///
/// The id is trimmed; unparseable URLs and blank ids yield `None`.
pub fn record_id_from_url(page_url: &str) -> Option<String> {
    let url = url::Url::parse(page_url).ok()?;
    let (_, value) = url
        .query_pairs()
        .find(|(name, _)| name == RECORD_ID_PARAM)?;
    let id = value.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// Project a record onto the form.
///
/// Mounts a fresh editor on every call. Attachment controls are only touched
/// when the record has an existing attachment.
pub fn populate_form<V: FormView + ?Sized>(view: &mut V, record: &QaRecord) {
    view.mount_editor();

    view.set_text(TextField::Writer, &record.writer);
    view.set_text(TextField::Email, record.email.as_deref().unwrap_or_default());
    view.set_text(TextField::Title, &record.title);
    view.set_text(TextField::Password, &record.password);
    view.set_editor_html(&record.content);

    if let Some(file_name) = record.existing_attachment() {
        view.set_attachment_label(&messages::existing_attachment_label(file_name));
        view.set_attachment_intent(AttachmentIntent::Keep);
        view.set_remove_control_visible(true);

        match build_image_preview(file_name, record.attachment_payload()) {
            Some(preview) => view.show_preview(&preview),
            None => tracing::debug!(file_name, "Attachment has no inline preview"),
        }
    }

    view.set_hidden_checked(record.hidden);
}
