// Gemini Assistant Driver
//
// Implementation of AssistantDriver for Google's Gemini generateContent API.
// One request per call, bounded by the client timeout, never retried.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::Instrument;

use marquee_core::assistant::{AssistantDriver, AssistantError};
use marquee_core::telemetry::gen_ai;

use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini assistant driver
///
/// # Example
///
/// ```ignore
/// use marquee_gemini::GeminiDriver;
///
/// let driver = GeminiDriver::new("your-api-key").with_model("gemini-2.0-flash");
/// // or with custom endpoint
/// let driver = GeminiDriver::with_base_url("your-api-key", "https://proxy.example.com");
/// ```
#[derive(Clone)]
pub struct GeminiDriver {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiDriver {
    /// Create a new driver with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a new driver with a custom API base URL
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: build_client(DEFAULT_TIMEOUT),
            api_key: api_key.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound the whole upstream call; elapsed requests fail with `AssistantError::Request`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self.timeout = timeout;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }

    async fn generate_inner(&self, prompt: &str) -> Result<String, AssistantError> {
        let request = GenerateContentRequest::user_text(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::request(format!("invalid response body: {e}")))?;

        if let Some(usage) = &parsed.usage_metadata {
            tracing::debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "Gemini token usage"
            );
        }

        parsed.text().ok_or(AssistantError::EmptyResponse)
    }
}

fn build_client(timeout: Duration) -> Client {
    match Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(
                error = %e,
                timeout_secs = timeout.as_secs(),
                "Failed to build HTTP client, requests will use reqwest defaults without a timeout"
            );
            Client::new()
        }
    }
}

#[async_trait]
impl AssistantDriver for GeminiDriver {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let span = tracing::info_span!(
            "gen_ai.generate_content",
            "otel.kind" = "client",
            "gen_ai.operation.name" = gen_ai::operation::GENERATE_CONTENT,
            "gen_ai.provider.name" = gen_ai::provider::GCP_GEMINI,
            "gen_ai.request.model" = %self.model,
        );

        self.generate_inner(prompt).instrument(span).await
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

impl std::fmt::Debug for GeminiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiDriver")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
