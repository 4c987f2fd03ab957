use serde::{Deserialize, Serialize};
use serde_json::json;

use super::chat::Extra;

/// One result of `answerInlineQuery`.
///
/// The result kinds differ only in their fields, so they share a single shape:
/// `type`, `id`, and whatever the kind needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(flatten)]
    pub fields: Extra,
}

impl InlineQueryResult {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            fields: Extra::new(),
        }
    }

    /// An article that sends `text` when chosen.
    pub fn article(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new("article", id)
            .field("title", title.into())
            .field("input_message_content", json!({ "message_text": text.into() }))
    }

    /// A photo result pointing at a remote JPEG.
    pub fn photo(id: impl Into<String>, photo_url: impl Into<String>, thumb_url: impl Into<String>) -> Self {
        Self::new("photo", id)
            .field("photo_url", photo_url.into())
            .field("thumb_url", thumb_url.into())
    }

    pub fn field(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }
}
