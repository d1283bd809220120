/// sketch2code: generate HTML/CSS from a hand-drawn layout sketch
///
/// # Overview
///
/// A small client for an OpenAI-compatible chat-completions endpoint
/// (GitHub Models) that sends one multimodal request: a system prompt plus
/// a user turn carrying text and a base64 data-URL image, and returns the
/// textual completion.
///
/// Key pieces:
/// - `InferenceClient`: builder-configured HTTP client bound to the
///   endpoint and credential
/// - `ChatMessage` / `MediaFile`: the two-message, two-part request shape
/// - A single error type covering configuration, image I/O, and service
///   failures
///
/// # Quick Start
///
/// ```no_run
/// use sketch2code::{ChatMessage, InferenceClient, MediaFile};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Reads the credential from GITHUB_TOKEN
///     let client = InferenceClient::from_env()?.temperature(0.7).build();
///
///     let sketch = MediaFile::from_file("./sketch.jpg", "image/png").await?;
///     let messages = vec![
///         ChatMessage::system("You are a helpful assistant."),
///         ChatMessage::user_with_media("Write HTML for this sketch.", vec![sketch]),
///     ];
///
///     let completion = client.chat(&messages).await?;
///     println!("{}", completion);
///     Ok(())
/// }
/// ```
mod backend;
mod error;
pub mod logging;

// Re-exports for convenience
pub use backend::{
    ChatMessage, DEFAULT_MODEL, GITHUB_MODELS_ENDPOINT, InferenceClient, MediaFile, Role,
};
pub use error::{Result, SketchCodeError};
