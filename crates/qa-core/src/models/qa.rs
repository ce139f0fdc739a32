//! QA record model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Redirect target after editing a customer question.
pub const CUSTOMER_REDIRECT: &str = "/qa";

/// Redirect target after editing any other post (lost & found board).
pub const OTHER_REDIRECT: &str = "/lost";

const CUSTOMER_WIRE_VALUE: &str = "CUSTOMER";

/// Board category of a QA record.
///
/// Only `CUSTOMER` carries meaning on the client; every other value is kept
/// verbatim so it round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QaType {
    /// Customer question board
    Customer,
    /// Any other board
    Other(String),
}

impl QaType {
    /// Wire representation of this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Customer => CUSTOMER_WIRE_VALUE,
            Self::Other(value) => value,
        }
    }

    /// Page the browser returns to after a successful edit.
    pub const fn redirect_target(&self) -> &'static str {
        match self {
            Self::Customer => CUSTOMER_REDIRECT,
            Self::Other(_) => OTHER_REDIRECT,
        }
    }
}

impl From<String> for QaType {
    fn from(value: String) -> Self {
        if value == CUSTOMER_WIRE_VALUE {
            Self::Customer
        } else {
            Self::Other(value)
        }
    }
}

impl From<QaType> for String {
    fn from(value: QaType) -> Self {
        match value {
            QaType::Customer => CUSTOMER_WIRE_VALUE.to_string(),
            QaType::Other(value) => value,
        }
    }
}

impl fmt::Display for QaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question & answer post as served by `GET /api/qas/{id}`.
///
/// The id is not part of the payload; it comes from the page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    /// Board category
    pub qa_type: QaType,
    /// Author display name
    pub writer: String,
    /// Optional contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Post title
    pub title: String,
    /// Edit password
    #[serde(default)]
    pub password: String,
    /// Rich-text HTML body
    #[serde(default)]
    pub content: String,
    /// Whether the post is hidden from the public list
    #[serde(default)]
    pub hidden: bool,
    /// Name of the existing attachment, if any
    #[serde(default)]
    pub attachment_filename: Option<String>,
    /// Base64 attachment bytes, served for image attachments only
    #[serde(default)]
    pub attachment: Option<String>,
}

impl QaRecord {
    /// Page the browser returns to after a successful edit.
    pub const fn redirect_target(&self) -> &'static str {
        self.qa_type.redirect_target()
    }

    /// Name of the existing attachment, ignoring empty names.
    pub fn existing_attachment(&self) -> Option<&str> {
        self.attachment_filename
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Base64 attachment payload, ignoring empty payloads.
    pub fn attachment_payload(&self) -> Option<&str> {
        self.attachment
            .as_deref()
            .filter(|payload| !payload.is_empty())
    }
}
