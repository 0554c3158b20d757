//! Gateway request/content types.
//!
//! The gateway sends a fixed system prompt plus one piece of user content
//! per call. There is no conversation history across calls: each request is
//! stateless from the gateway's perspective.

use serde::{Deserialize, Serialize};

/// User-supplied content for a single gateway call.
#[derive(Debug, Clone)]
pub enum UserContent {
    /// A chat message.
    Text(String),
    /// Raw image bytes with their MIME type, as received from the upload.
    Image { data: Vec<u8>, mime_type: String },
}

impl UserContent {
    pub fn text(s: impl Into<String>) -> Self {
        UserContent::Text(s.into())
    }

    pub fn image(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        UserContent::Image {
            data,
            mime_type: mime_type.into(),
        }
    }
}

/// Body of `POST /converse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverseRequest {
    #[serde(default)]
    pub message: String,
}

/// Reply returned by `POST /converse`.
///
/// The role is always `"assistant"`; the shape mirrors a chat turn so the
/// widget can append it directly to its transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub role: String,
    pub content: String,
}

impl AssistantReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}
