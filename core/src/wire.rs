//! Serde mirrors of the Guardian search envelope.
//!
//! Only the fields the client reads are declared. Result entries and tags are
//! kept as raw `Value`s at the envelope level so one malformed entry can be
//! skipped without failing the whole page.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub response: SearchBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultEntry {
    pub web_title: String,
    pub section_name: String,
    pub web_publication_date: String,
    pub web_url: String,
    #[serde(default)]
    pub tags: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tag {
    #[serde(rename = "type", default)]
    pub tag_type: Option<String>,
    #[serde(default)]
    pub web_title: Option<String>,
}

/// Error bodies come in two shapes: a bare `{"message": ..}` for auth
/// failures and the usual envelope with `status: "error"` otherwise.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response: Option<ErrorResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or_else(|| self.response.and_then(|r| r.message))
            .filter(|m| !m.trim().is_empty())
    }
}
