//! Attachment intent model

use std::fmt;

/// What the server should do with the existing attachment on update.
///
/// Sent as the `keepAttachment` form field: only [`AttachmentIntent::Keep`]
/// maps to `"true"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachmentIntent {
    /// Retain the current attachment
    #[default]
    Keep,
    /// A newly picked file supersedes the current attachment
    Replace,
    /// Delete the current attachment
    Remove,
}

impl AttachmentIntent {
    /// Whether the existing attachment survives the update.
    pub const fn keeps_existing(self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Value of the `keepAttachment` form field.
    pub const fn as_form_value(self) -> &'static str {
        if self.keeps_existing() {
            "true"
        } else {
            "false"
        }
    }
}

impl fmt::Display for AttachmentIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Keep => "keep",
            Self::Replace => "replace",
            Self::Remove => "remove",
        };
        f.write_str(label)
    }
}
