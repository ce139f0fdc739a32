//! File picked by the user for upload

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A file chosen in the attachment picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as shown to the user and sent to the server
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Content type reported by the picker, if any
    pub content_type: Option<String>,
}

impl SelectedFile {
    /// Create a picked file without a reported content type.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: None,
        }
    }

    /// MIME type for the upload part.
    ///
    /// Prefers the reported content type unless it is empty or the generic
    /// octet-stream, then guesses from the file extension.
    pub fn mime_type(&self) -> String {
        if let Some(content_type) = self.content_type.as_deref() {
            let trimmed = content_type.trim();
            if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(FALLBACK_MIME_TYPE) {
                return trimmed.to_string();
            }
        }

        mime_guess::from_path(&self.name)
            .first_raw()
            .unwrap_or(FALLBACK_MIME_TYPE)
            .to_string()
    }
}
