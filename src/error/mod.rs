use std::path::PathBuf;

use thiserror::Error;

/// Error types for sketch2code.
///
/// Each variant represents a different category of failure on the single
/// request path: configuration problems caught before any network activity,
/// local image I/O, and error-shaped responses from the inference service.
///
/// # Examples
///
/// Creating and handling errors:
///
/// ```
/// use sketch2code::{Result, SketchCodeError};
///
/// fn require_token(token: &str) -> Result<()> {
///     if token.is_empty() {
///         return Err(SketchCodeError::ConfigError(
///             "GITHUB_TOKEN environment variable not set".into(),
///         ));
///     }
///     Ok(())
/// }
///
/// match require_token("") {
///     Ok(()) => println!("token present"),
///     Err(SketchCodeError::ConfigError(msg)) => println!("config: {}", msg),
///     Err(e) => println!("unexpected error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum SketchCodeError {
    /// Required configuration (the credential) is absent or empty
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The local image file could not be read
    #[error("Could not read image at {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inference service returned an error-shaped response; the payload
    /// is the server-provided message, or a generic fallback when absent
    #[error("API error: {0}")]
    ApiError(String),

    /// Operation timed out
    #[error("Timeout error")]
    Timeout,

    /// HTTP client error (from reqwest)
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error (from serde_json)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

// Manual implementation of PartialEq for SketchCodeError.
// Note: ImageRead, HttpError and JsonError variants are considered unequal
// because their wrapped error types don't implement PartialEq.
impl PartialEq for SketchCodeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ConfigError(a), Self::ConfigError(b)) => a == b,
            (Self::ApiError(a), Self::ApiError(b)) => a == b,
            (Self::Timeout, Self::Timeout) => true,
            (Self::ImageRead { .. }, Self::ImageRead { .. }) => false,
            (Self::HttpError(_), Self::HttpError(_)) => false,
            (Self::JsonError(_), Self::JsonError(_)) => false,
            _ => false,
        }
    }
}

/// A specialized Result type for sketch2code operations.
///
/// # Examples
///
/// Using the `?` operator:
///
/// ```
/// use sketch2code::{Result, SketchCodeError};
///
/// fn parse_body(data: &str) -> Result<serde_json::Value> {
///     let value = serde_json::from_str(data)?;
///     Ok(value)
/// }
/// # fn main() { assert!(parse_body("{}").is_ok()); }
/// ```
pub type Result<T> = std::result::Result<T, SketchCodeError>;
