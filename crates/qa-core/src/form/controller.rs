//! Load / populate / attachment tracking / submit.

use super::{messages, populate_form, record_id_from_url, FormError, FormView, TextField};
use crate::api::{ApiError, QaApi, QaUpdate};
use crate::models::{AttachmentIntent, QaRecord};

/// Result of [`FormController::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page URL has no `id`; nothing was requested
    NoRecordId,
    /// The record was fetched and the form populated
    Loaded,
}

/// Drives one edit page: owns the fetched record and the attachment intent.
///
/// Every operation takes `&mut self`, so a load and a submit can never be in
/// flight at the same time.
pub struct FormController<A, V> {
    api: A,
    view: V,
    record: Option<QaRecord>,
    intent: AttachmentIntent,
}

impl<A: QaApi, V: FormView> FormController<A, V> {
    pub const fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            record: None,
            intent: AttachmentIntent::Keep,
        }
    }

    /// Record fetched by the last successful load.
    pub const fn record(&self) -> Option<&QaRecord> {
        self.record.as_ref()
    }

    pub const fn attachment_intent(&self) -> AttachmentIntent {
        self.intent
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Fetch the record named by the page URL and populate the form.
    ///
    /// A missing id is not an error: the form simply stays empty.
    pub async fn load(&mut self) -> Result<LoadOutcome, FormError> {
        let Some(id) = record_id_from_url(&self.view.page_url()) else {
            tracing::debug!("No record id in page URL, leaving form empty");
            return Ok(LoadOutcome::NoRecordId);
        };

        tracing::info!(id = %id, "Loading QA record");
        match self.api.fetch_qa(&id).await {
            Ok(record) => {
                let redirect_target = record.redirect_target();
                self.record = Some(record);
                self.populate();
                self.view.set_text(TextField::RedirectUrl, redirect_target);
                Ok(LoadOutcome::Loaded)
            }
            Err(error) => {
                tracing::error!(id = %id, "Failed to load QA record: {}", error);
                let message = if error.is_status() {
                    messages::LOAD_FAILED
                } else {
                    messages::LOAD_COMMUNICATION_FAILED
                };
                self.view.alert(message);
                Err(FormError::Load(error))
            }
        }
    }

    /// Re-project the cached record onto the form. No-op before a load.
    ///
    /// The attachment intent is only reset when the record has an existing
    /// attachment, since that is the only case where the form writes it.
    pub fn populate(&mut self) {
        let Some(record) = self.record.as_ref() else {
            return;
        };
        let has_attachment = record.existing_attachment().is_some();
        populate_form(&mut self.view, record);
        if has_attachment {
            self.set_intent(AttachmentIntent::Keep);
        }
    }

    /// The attachment picker changed: a new file supersedes the existing
    /// one, clearing the picker falls back to keeping it.
    pub fn file_selection_changed(&mut self) {
        let (label, intent) = match self.view.selected_file() {
            Some(file) => (
                messages::selected_attachment_label(&file.name),
                AttachmentIntent::Replace,
            ),
            None => (messages::NO_FILE_SELECTED.to_string(), AttachmentIntent::Keep),
        };

        self.view.set_attachment_label(&label);
        self.set_intent(intent);
        self.view.set_remove_control_visible(false);
    }

    /// The user asked to delete the existing attachment.
    pub fn remove_attachment_clicked(&mut self) {
        self.view.clear_file_picker();
        self.view.set_attachment_label(messages::NO_FILE_SELECTED);
        self.set_intent(AttachmentIntent::Remove);
        self.view.set_remove_control_visible(false);
        self.view.clear_preview();
    }

    /// Snapshot the form into an update payload.
    pub fn build_update(&self) -> QaUpdate {
        QaUpdate {
            writer: self.view.text(TextField::Writer),
            email: self.view.text(TextField::Email),
            title: self.view.text(TextField::Title),
            password: self.view.text(TextField::Password),
            hidden: self.view.hidden_checked(),
            content: self.view.editor_html(),
            redirect_url: self.view.text(TextField::RedirectUrl),
            attachment_intent: self.intent,
            attachment: self.view.selected_file(),
        }
    }

    /// Send the form and navigate to the submitted redirect target.
    ///
    /// Returns the navigation target. On failure the form is left as is so
    /// the user can retry.
    pub async fn submit(&mut self) -> Result<String, FormError> {
        let Some(id) = record_id_from_url(&self.view.page_url()) else {
            tracing::error!("Cannot submit QA update without a record id in the page URL");
            self.view.alert(messages::UPDATE_FAILED);
            return Err(FormError::MissingRecordId);
        };

        let update = self.build_update();
        tracing::info!(
            id = %id,
            attachment = %update.attachment_intent,
            "Submitting QA update"
        );

        match self.api.update_qa(&id, &update).await {
            Ok(()) => {
                self.view.alert(messages::UPDATE_SUCCEEDED);
                self.view.navigate(&update.redirect_url);
                Ok(update.redirect_url)
            }
            Err(error) => {
                tracing::error!(id = %id, "Failed to update QA record: {}", error);
                self.view.alert(submit_failure_message(&error));
                Err(FormError::Submit(error))
            }
        }
    }

    fn set_intent(&mut self, intent: AttachmentIntent) {
        self.intent = intent;
        self.view.set_attachment_intent(intent);
    }
}

const fn submit_failure_message(error: &ApiError) -> &'static str {
    if error.is_status() {
        messages::UPDATE_FAILED
    } else {
        messages::UPDATE_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::MemoryFormView;
    use crate::models::{QaType, SelectedFile};

    const PAGE_URL: &str = "http://localhost:8000/qa-update?id=42";

    /// Canned backend that records every call.
    #[derive(Default)]
    struct FakeApi {
        fetch_result: Option<Result<QaRecord, ApiError>>,
        update_result: Option<Result<(), ApiError>>,
        fetched_ids: Mutex<Vec<String>>,
        updates: Mutex<Vec<(String, QaUpdate)>>,
    }

    impl FakeApi {
        fn serving(record: QaRecord) -> Self {
            Self {
                fetch_result: Some(Ok(record)),
                update_result: Some(Ok(())),
                ..Self::default()
            }
        }

        fn failing_fetch(error: ApiError) -> Self {
            Self {
                fetch_result: Some(Err(error)),
                ..Self::default()
            }
        }

        fn with_update_result(mut self, result: Result<(), ApiError>) -> Self {
            self.update_result = Some(result);
            self
        }
    }

    impl QaApi for FakeApi {
        async fn fetch_qa(&self, id: &str) -> Result<QaRecord, ApiError> {
            self.fetched_ids.lock().unwrap().push(id.to_string());
            self.fetch_result
                .clone()
                .expect("unexpected fetch in this test")
        }

        async fn update_qa(&self, id: &str, update: &QaUpdate) -> Result<(), ApiError> {
            self.updates
                .lock()
                .unwrap()
                .push((id.to_string(), update.clone()));
            self.update_result
                .clone()
                .expect("unexpected update in this test")
        }
    }

    fn customer_record() -> QaRecord {
        QaRecord {
            qa_type: QaType::Customer,
            writer: "alice".to_string(),
            email: None,
            title: "t".to_string(),
            password: String::new(),
            content: "<p>hi</p>".to_string(),
            hidden: false,
            attachment_filename: None,
            attachment: None,
        }
    }

    fn record_with_image() -> QaRecord {
        QaRecord {
            attachment_filename: Some("photo.jpg".to_string()),
            attachment: Some("aGVsbG8=".to_string()),
            ..customer_record()
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        }
    }

    async fn loaded(api: FakeApi) -> FormController<FakeApi, MemoryFormView> {
        let mut controller = FormController::new(api, MemoryFormView::new(PAGE_URL));
        assert_eq!(controller.load().await, Ok(LoadOutcome::Loaded));
        controller
    }

    #[tokio::test]
    async fn load_populates_customer_record() {
        let controller = loaded(FakeApi::serving(customer_record())).await;
        let view = controller.view();

        assert_eq!(view.writer, "alice");
        assert_eq!(view.email, "");
        assert_eq!(view.title, "t");
        assert_eq!(view.editor_html, "<p>hi</p>");
        assert!(!view.hidden);
        assert_eq!(view.redirect_url, "/qa");
        assert!(view.alerts.is_empty());
        assert_eq!(controller.record(), Some(&customer_record()));
        assert_eq!(*controller.api.fetched_ids.lock().unwrap(), vec!["42"]);
    }

    #[tokio::test]
    async fn load_sets_lost_redirect_for_other_types() {
        let record = QaRecord {
            qa_type: QaType::Other("LOST".to_string()),
            ..customer_record()
        };
        let controller = loaded(FakeApi::serving(record)).await;
        assert_eq!(controller.view().redirect_url, "/lost");
    }

    #[tokio::test]
    async fn load_without_id_is_a_silent_no_op() {
        let mut controller = FormController::new(
            FakeApi::default(),
            MemoryFormView::new("http://localhost:8000/qa-update"),
        );

        assert_eq!(controller.load().await, Ok(LoadOutcome::NoRecordId));
        assert_eq!(controller.record(), None);
        assert_eq!(controller.view(), &MemoryFormView::new("http://localhost:8000/qa-update"));
        assert!(controller.api.fetched_ids.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_status_failure_alerts_and_leaves_form_empty() {
        let mut controller = FormController::new(
            FakeApi::failing_fetch(server_error()),
            MemoryFormView::new(PAGE_URL),
        );

        let error = controller.load().await.unwrap_err();
        assert_eq!(error, FormError::Load(server_error()));
        assert_eq!(controller.view().alerts, vec![messages::LOAD_FAILED]);
        assert_eq!(controller.view().writer, "");
        assert_eq!(controller.view().editor_mounts, 0);
        assert_eq!(controller.record(), None);
    }

    #[tokio::test]
    async fn load_transport_failure_uses_communication_message() {
        for error in [
            ApiError::Transport("connection refused".to_string()),
            ApiError::Decode("expected value".to_string()),
        ] {
            let mut controller =
                FormController::new(FakeApi::failing_fetch(error), MemoryFormView::new(PAGE_URL));
            assert!(controller.load().await.is_err());
            assert_eq!(
                controller.view().alerts,
                vec![messages::LOAD_COMMUNICATION_FAILED]
            );
        }
    }

    #[test]
    fn populate_before_load_is_a_no_op() {
        let mut controller =
            FormController::new(FakeApi::default(), MemoryFormView::new(PAGE_URL));
        controller.populate();
        controller.populate();
        assert_eq!(controller.view(), &MemoryFormView::new(PAGE_URL));
    }

    #[tokio::test]
    async fn existing_attachment_is_kept_until_removed() {
        let mut controller = loaded(FakeApi::serving(record_with_image())).await;

        assert_eq!(controller.view().keep_attachment_value(), Some("true"));
        assert!(controller.view().remove_control_visible);
        assert!(controller.view().preview.is_some());

        controller.remove_attachment_clicked();

        let view = controller.view();
        assert_eq!(controller.attachment_intent(), AttachmentIntent::Remove);
        assert_eq!(view.keep_attachment_value(), Some("false"));
        assert!(!view.remove_control_visible);
        assert_eq!(view.attachment_label, messages::NO_FILE_SELECTED);
        assert_eq!(view.preview, None);
    }

    #[tokio::test]
    async fn picking_and_clearing_a_file_toggles_keep() {
        let mut controller = loaded(FakeApi::serving(record_with_image())).await;

        controller.view_mut().selected_file = Some(SelectedFile::new("new.png", vec![1]));
        controller.file_selection_changed();
        assert_eq!(controller.attachment_intent(), AttachmentIntent::Replace);
        assert_eq!(controller.view().keep_attachment_value(), Some("false"));
        assert_eq!(controller.view().attachment_label, "첨부 파일: new.png");
        assert!(!controller.view().remove_control_visible);

        controller.view_mut().selected_file = None;
        controller.file_selection_changed();
        assert_eq!(controller.attachment_intent(), AttachmentIntent::Keep);
        assert_eq!(controller.view().keep_attachment_value(), Some("true"));
        assert_eq!(controller.view().attachment_label, messages::NO_FILE_SELECTED);
        assert!(!controller.view().remove_control_visible);
    }

    #[tokio::test]
    async fn repopulate_keeps_submitted_intent_in_step_with_view() {
        let mut controller = loaded(FakeApi::serving(customer_record())).await;
        controller.view_mut().selected_file = Some(SelectedFile::new("new.png", vec![1]));
        controller.file_selection_changed();

        controller.populate();

        let update = controller.build_update();
        assert_eq!(update.attachment_intent, AttachmentIntent::Replace);
        assert_eq!(
            controller.view().keep_attachment_value(),
            Some(update.attachment_intent.as_form_value())
        );
        assert!(update.attachment.is_some());
    }

    #[tokio::test]
    async fn repopulate_restores_keep_for_existing_attachment() {
        let mut controller = loaded(FakeApi::serving(record_with_image())).await;
        controller.remove_attachment_clicked();

        controller.populate();

        assert_eq!(controller.attachment_intent(), AttachmentIntent::Keep);
        assert_eq!(controller.view().keep_attachment_value(), Some("true"));
        assert!(controller.view().remove_control_visible);
        assert_eq!(
            controller.build_update().attachment_intent,
            AttachmentIntent::Keep
        );
    }

    #[tokio::test]
    async fn remove_clears_a_picked_file() {
        let mut controller = loaded(FakeApi::serving(record_with_image())).await;
        controller.view_mut().selected_file = Some(SelectedFile::new("new.png", vec![1]));
        controller.file_selection_changed();

        controller.remove_attachment_clicked();

        assert_eq!(controller.view().selected_file, None);
        let update = controller.build_update();
        assert_eq!(update.attachment_intent, AttachmentIntent::Remove);
        assert_eq!(update.attachment, None);
    }

    #[tokio::test]
    async fn submit_sends_editor_html_and_navigates() {
        let mut controller = loaded(FakeApi::serving(customer_record())).await;
        controller.view_mut().title = "edited".to_string();
        controller.view_mut().editor_html = "<p><em>rich</em></p>".to_string();
        controller.view_mut().hidden = true;

        let target = controller.submit().await.expect("submit should succeed");

        assert_eq!(target, "/qa");
        assert_eq!(controller.view().navigated_to.as_deref(), Some("/qa"));
        assert_eq!(controller.view().alerts, vec![messages::UPDATE_SUCCEEDED]);

        let updates = controller.api.updates.lock().unwrap();
        let (id, update) = &updates[0];
        assert_eq!(id, "42");
        assert_eq!(
            update,
            &QaUpdate {
                writer: "alice".to_string(),
                email: String::new(),
                title: "edited".to_string(),
                password: String::new(),
                hidden: true,
                content: "<p><em>rich</em></p>".to_string(),
                redirect_url: "/qa".to_string(),
                attachment_intent: AttachmentIntent::Keep,
                attachment: None,
            }
        );
    }

    #[tokio::test]
    async fn submit_uses_redirect_field_value() {
        let mut controller = loaded(FakeApi::serving(customer_record())).await;
        controller.view_mut().redirect_url = "/lost".to_string();

        assert_eq!(controller.submit().await, Ok("/lost".to_string()));
        assert_eq!(controller.view().navigated_to.as_deref(), Some("/lost"));
    }

    #[tokio::test]
    async fn submit_failure_alerts_without_navigation() {
        let api = FakeApi::serving(customer_record()).with_update_result(Err(server_error()));
        let mut controller = loaded(api).await;
        let before = controller.view().clone();

        let error = controller.submit().await.unwrap_err();

        assert_eq!(error, FormError::Submit(server_error()));
        assert_eq!(controller.view().navigated_to, None);
        assert_eq!(controller.view().alerts, vec![messages::UPDATE_FAILED]);
        assert_eq!(controller.view().title, before.title);
        assert_eq!(controller.record(), Some(&customer_record()));
    }

    #[tokio::test]
    async fn submit_transport_failure_asks_for_retry() {
        let api = FakeApi::serving(customer_record())
            .with_update_result(Err(ApiError::Transport("reset".to_string())));
        let mut controller = loaded(api).await;

        assert!(controller.submit().await.is_err());
        assert_eq!(controller.view().alerts, vec![messages::UPDATE_SERVER_ERROR]);

        controller.api.update_result = Some(Ok(()));
        controller.view_mut().take_alerts();
        assert_eq!(controller.submit().await, Ok("/qa".to_string()));
        assert_eq!(controller.api.updates.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn submit_without_id_sends_nothing() {
        let mut controller = FormController::new(
            FakeApi::default(),
            MemoryFormView::new("http://localhost:8000/qa-update"),
        );

        assert_eq!(controller.submit().await, Err(FormError::MissingRecordId));
        assert_eq!(controller.view().alerts, vec![messages::UPDATE_FAILED]);
        assert!(controller.api.updates.lock().unwrap().is_empty());
    }
}
