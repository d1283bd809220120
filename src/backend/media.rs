use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::{debug, trace};

use crate::backend::chat::ChatMessage;
use crate::error::{Result, SketchCodeError};

/// An image attachment for a chat message, held as base64 text.
///
/// The raw bytes are encoded once at construction; the value is immutable
/// afterwards and rendered into the request body as a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Base64-encoded content (standard alphabet)
    pub data: String,
    /// Media type declared for the content, e.g. `image/png`
    pub mime_type: String,
}

impl MediaFile {
    /// Create a media file from raw bytes, encoding them as base64.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        let data = STANDARD.encode(bytes);
        trace!(encoded_len = data.len(), "Encoded media bytes as base64");
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Read a media file from disk and encode it as base64.
    ///
    /// The media type is declared by the caller, never inferred from the
    /// file name. A read failure is reported with the offending path.
    pub async fn from_file(path: impl AsRef<Path>, mime_type: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading media file");
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| SketchCodeError::ImageRead {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            "Read media file from disk"
        );
        Ok(Self::from_bytes(&bytes, mime_type))
    }

    /// Render the content as a `data:<media-type>;base64,<payload>` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum MessageContent {
    Text(String),
    Parts(Vec<MessagePart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum MessagePart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageUrl {
    pub(crate) url: String,
}

/// Build the wire-level content for a message: plain text when it carries no
/// media, otherwise an ordered part list (text first, then one image part
/// per attachment).
pub(crate) fn build_message_content(msg: &ChatMessage) -> MessageContent {
    if msg.media.is_empty() {
        return MessageContent::Text(msg.content.clone());
    }

    let mut parts = Vec::new();
    if !msg.content.is_empty() {
        parts.push(MessagePart::Text {
            text: msg.content.clone(),
        });
    }

    for media in &msg.media {
        parts.push(MessagePart::ImageUrl {
            image_url: ImageUrl {
                url: media.to_data_url(),
            },
        });
    }

    MessageContent::Parts(parts)
}
