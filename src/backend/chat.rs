use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::backend::media::{MediaFile, MessageContent, build_message_content};
use crate::error::{Result, SketchCodeError};

/// Conversational role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// One conversational turn, before conversion to the wire format.
///
/// Message order in the request list defines turn order; media attachments
/// are rendered after the text, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub media: Vec<MediaFile>,
}

impl ChatMessage {
    /// A plain-text system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            media: Vec::new(),
        }
    }

    /// A plain-text user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            media: Vec::new(),
        }
    }

    /// A user message carrying text plus image attachments.
    pub fn user_with_media(content: impl Into<String>, media: Vec<MediaFile>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            media,
        }
    }
}

// Chat-completions wire structures

#[derive(Debug, Serialize)]
pub(crate) struct WireChatMessage {
    pub role: String,
    pub content: MessageContent,
}

pub(crate) fn convert_chat_messages(messages: &[ChatMessage]) -> Vec<WireChatMessage> {
    messages
        .iter()
        .map(|msg| WireChatMessage {
            role: msg.role.as_str().to_string(),
            content: build_message_content(msg),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct ChatCompletionChoice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
}

/// Pull the displayable text out of a parsed success response.
pub(crate) fn extract_completion(completion: ChatCompletionResponse) -> Result<String> {
    if completion.choices.is_empty() {
        error!("Inference service returned empty choices array");
        return Err(SketchCodeError::ApiError(
            "No completion choices returned".to_string(),
        ));
    }

    let choice = &completion.choices[0];
    if let Some(reason) = &choice.finish_reason {
        trace!(finish_reason = %reason, "Completion finish reason");
    }

    match &choice.message.content {
        Some(content) => {
            debug!(
                content_len = content.len(),
                "Successfully extracted content from response"
            );
            Ok(content.clone())
        }
        None => {
            error!("No content in completion response");
            Err(SketchCodeError::ApiError(
                "No content in response".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_chat_messages_text_only() {
        let messages = vec![ChatMessage::user("hello")];
        let converted = convert_chat_messages(&messages);

        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].role, "user");
        let json = serde_json::to_value(&converted[0]).expect("serialization should succeed");
        assert_eq!(json["content"], json!("hello"));
    }

    #[test]
    fn test_request_body_message_and_part_order() {
        let image_bytes = b"\x89PNG\r\n";
        let messages = vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user_with_media(
                "Write HTML for this sketch.",
                vec![MediaFile::from_bytes(image_bytes, "image/png")],
            ),
        ];
        let request = ChatCompletionRequest {
            model: "meta/Llama-3.2-90B-Vision-Instruct".to_string(),
            messages: convert_chat_messages(&messages),
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: None,
        };

        let body = serde_json::to_value(&request).expect("request should serialize");
        let wire_messages = body["messages"].as_array().expect("messages array");
        assert_eq!(wire_messages.len(), 2);
        assert_eq!(wire_messages[0]["role"], "system");
        assert_eq!(wire_messages[0]["content"], "You are a helpful assistant.");
        assert_eq!(wire_messages[1]["role"], "user");

        let parts = wire_messages[1]["content"].as_array().expect("parts array");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[0]["text"], "Write HTML for this sketch.");
        assert_eq!(parts[1]["type"], "image_url");
        let url = parts[1]["image_url"]["url"].as_str().expect("data url");
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(url, "data:image/png;base64,iVBORw0K");

        // max_tokens is omitted, not serialized as null
        assert!(body.get("max_tokens").is_none());
        // f32 fields round-trip through f64 in serde_json
        let temperature = body["temperature"].as_f64().expect("temperature number");
        assert!((temperature - 0.7).abs() < 1e-6);
        assert_eq!(body["top_p"], json!(1.0));
    }

    #[test]
    fn test_extract_completion_success() {
        let completion: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {
                    "message": { "role": "assistant", "content": "hello world" },
                    "finish_reason": "stop"
                }
            ]
        }))
        .expect("response should parse");

        let text = extract_completion(completion).expect("extraction should succeed");
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_extract_completion_uses_first_choice() {
        let completion: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "content": "first" } },
                { "message": { "content": "second" } }
            ]
        }))
        .expect("response should parse");

        assert_eq!(extract_completion(completion).unwrap(), "first");
    }

    #[test]
    fn test_extract_completion_empty_choices() {
        let completion: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).expect("response should parse");

        let err = extract_completion(completion).expect_err("empty choices should error");
        assert_eq!(
            err,
            SketchCodeError::ApiError("No completion choices returned".to_string())
        );
    }

    #[test]
    fn test_extract_completion_missing_content() {
        let completion: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [ { "message": { "role": "assistant" } } ]
        }))
        .expect("response should parse");

        let err = extract_completion(completion).expect_err("missing content should error");
        assert_eq!(
            err,
            SketchCodeError::ApiError("No content in response".to_string())
        );
    }
}
