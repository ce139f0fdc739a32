//! Inline image previews for existing attachments.
//!
//! The backend only ships attachment bytes for image files; a preview is
//! rendered when the file name carries an image extension and the payload is
//! present.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use regex::Regex;

use crate::error::Result;

const FALLBACK_IMAGE_MIME: &str = "image/png";

/// Inline image preview built from a base64 attachment payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    /// Attachment file name, used as the image alt text
    pub file_name: String,
    /// Image MIME type for the data URI
    pub mime_type: String,
    /// Base64 payload exactly as served by the backend
    pub payload: String,
}

impl ImagePreview {
    /// Maximum rendered width, relative to the preview container.
    pub const MAX_WIDTH: &'static str = "100%";
    /// Spacing above the rendered image.
    pub const MARGIN_TOP: &'static str = "10px";

    /// `data:` URI suitable for an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.payload)
    }

    /// CSS for the rendered `<img>` element.
    pub fn inline_style() -> String {
        format!(
            "max-width: {}; margin-top: {};",
            Self::MAX_WIDTH,
            Self::MARGIN_TOP
        )
    }

    /// Alt text for the rendered image.
    pub fn alt_text(&self) -> &str {
        &self.file_name
    }

    /// Decode the payload back into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(BASE64_STANDARD.decode(self.payload.trim())?)
    }
}

/// Whether a file name ends with `.jpg`, `.jpeg`, `.png` or `.gif`, ignoring case.
pub fn is_previewable_image(file_name: &str) -> bool {
    image_extension_pattern().is_match(file_name)
}

/// Build a preview when `file_name` is an image and `payload` is non-empty.
pub fn build_image_preview(file_name: &str, payload: Option<&str>) -> Option<ImagePreview> {
    let payload = payload.filter(|payload| !payload.is_empty())?;
    if !is_previewable_image(file_name) {
        return None;
    }

    Some(ImagePreview {
        file_name: file_name.to_string(),
        mime_type: image_mime_type(file_name),
        payload: payload.to_string(),
    })
}

fn image_mime_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_raw()
        .filter(|mime| mime.starts_with("image/"))
        .unwrap_or(FALLBACK_IMAGE_MIME)
        .to_string()
}

fn image_extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif)$").expect("Invalid regex"))
}
