//! HTTP Request body types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPart {
    /// Form field name.
    pub name: String,
    /// File name sent with the part, if it is a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Explicit MIME type; adapters guess from `file_name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Raw content.
    pub bytes: Vec<u8>,
}

impl FormPart {
    /// Creates a file part.
    #[must_use]
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: None,
            bytes,
        }
    }

    /// Sets an explicit MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// HTTP request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(Value),
    /// `multipart/form-data`
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// Returns whether there is nothing to send.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the content type this body is sent with.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Multipart(_) => Some("multipart/form-data"),
        }
    }
}
