use std::time::Duration;

use tracing::{debug, error, info, instrument, trace, warn};

use crate::backend::chat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, convert_chat_messages,
    extract_completion,
};
use crate::backend::utils::{handle_http_error, service_error_message};
use crate::error::{Result, SketchCodeError};

/// Base URL of the GitHub Models inference endpoint.
pub const GITHUB_MODELS_ENDPOINT: &str = "https://models.github.ai/inference";

/// Default model identifier. Vision input requires a model that accepts
/// image parts.
pub const DEFAULT_MODEL: &str = "meta/Llama-3.2-90B-Vision-Instruct";

/// Configuration for the inference client
#[derive(Debug, Clone)]
struct InferenceConfig {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Configure with the builder methods, then send one request with
/// [`chat`](InferenceClient::chat).
#[derive(Debug)]
pub struct InferenceClient {
    config: InferenceConfig,
    client: reqwest::Client,
}

impl InferenceClient {
    /// Create a new client with default configuration.
    ///
    /// Fails with a configuration error when the credential is empty.
    #[instrument(name = "inference_client_new", skip(api_key))]
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SketchCodeError::ConfigError(
                "credential must not be empty".to_string(),
            ));
        }
        info!("Creating new inference client");
        trace!("API key length: {}", api_key.len());

        let config = InferenceConfig {
            api_key,
            base_url: GITHUB_MODELS_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: None,
            timeout: None, // Default: no timeout (uses reqwest's default)
        };

        debug!("Inference client created with default configuration");
        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    /// Create a client by reading the credential from the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GITHUB_TOKEN` is not set or empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sketch2code::InferenceClient;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = InferenceClient::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "inference_client_from_env")]
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GITHUB_TOKEN").map_err(|_| {
            SketchCodeError::ConfigError("GITHUB_TOKEN environment variable not set".to_string())
        })?;

        info!("Creating new inference client from environment variable");
        Self::new(api_key)
    }

    /// Set the model identifier to use.
    #[instrument(skip(self, model))]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(previous_model = %self.config.model, new_model = %model, "Setting model");
        self.config.model = model;
        self
    }

    /// Set the sampling temperature (lower = more deterministic).
    #[instrument(skip(self))]
    pub fn temperature(mut self, temp: f32) -> Self {
        debug!(
            previous_temp = self.config.temperature,
            new_temp = temp,
            "Setting temperature"
        );
        self.config.temperature = temp;
        self
    }

    /// Set the nucleus-sampling top_p.
    #[instrument(skip(self))]
    pub fn top_p(mut self, top_p: f32) -> Self {
        debug!(
            previous_top_p = self.config.top_p,
            new_top_p = top_p,
            "Setting top_p"
        );
        self.config.top_p = top_p;
        self
    }

    /// Set the maximum tokens to generate.
    #[instrument(skip(self))]
    pub fn max_tokens(mut self, max: u32) -> Self {
        debug!(previous_max = ?self.config.max_tokens, new_max = max, "Setting max_tokens");
        self.config.max_tokens = Some(max);
        self
    }

    /// Set the timeout applied to the HTTP request.
    #[instrument(skip(self))]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        debug!(
            previous_timeout = ?self.config.timeout,
            new_timeout = ?timeout,
            "Setting timeout"
        );
        self.config.timeout = Some(timeout);
        self
    }

    /// Override the endpoint base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL without trailing slash (e.g., `http://localhost:1234/v1`)
    #[instrument(skip(self, base_url))]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(
            previous_base_url = %self.config.base_url,
            new_base_url = %base_url,
            "Setting base URL"
        );
        self.config.base_url = base_url;
        self
    }

    /// Build the client (chainable after configuration)
    #[instrument(skip(self))]
    pub fn build(mut self) -> Self {
        info!(
            model = %self.config.model,
            temperature = self.config.temperature,
            top_p = self.config.top_p,
            max_tokens = ?self.config.max_tokens,
            timeout = ?self.config.timeout,
            "Inference client configuration complete"
        );

        // Configure reqwest client with timeout if specified
        let mut client_builder = reqwest::Client::builder();
        if let Some(timeout) = self.config.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        self.client = client_builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build reqwest client with timeout, using default");
            reqwest::Client::new()
        });

        self
    }

    /// Send one chat-completions request and return the completion text.
    ///
    /// Issues a single POST to `{base_url}/chat/completions`. An
    /// error-shaped response surfaces the server-provided message (or a
    /// generic fallback); a success response yields the first choice's
    /// message content.
    #[instrument(
        name = "inference_chat",
        skip(self, messages),
        fields(
            model = %self.config.model,
            message_count = messages.len()
        )
    )]
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!("Building chat-completions request");
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: convert_chat_messages(messages),
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        debug!(url = %url, "Sending request to inference endpoint");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(handle_http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            error!(
                status = %status,
                error = %error_text,
                "Inference endpoint returned error response"
            );
            return Err(SketchCodeError::ApiError(service_error_message(
                &error_text,
            )));
        }

        debug!("Successfully received response from inference endpoint");
        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse JSON response from inference endpoint");
            e
        })?;

        extract_completion(completion)
    }
}
