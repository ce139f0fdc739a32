//! Data models for QA Edit

mod intent;
mod qa;
mod selected_file;

pub use intent::AttachmentIntent;
pub use qa::{QaRecord, QaType, CUSTOMER_REDIRECT, OTHER_REDIRECT};
pub use selected_file::SelectedFile;
