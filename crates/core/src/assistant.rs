// Conversational assistant abstraction
//
// The chat endpoint forwards a single user message to a generative model
// wrapped in a fixed prompt. Provider crates (marquee-gemini) implement
// `AssistantDriver`; the core has no knowledge of any particular API.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by assistant drivers
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No driver is configured (e.g. missing API key)
    #[error("Assistant not configured: {0}")]
    NotConfigured(String),

    /// Transport failure talking to the provider, including timeouts
    #[error("Assistant request failed: {0}")]
    Request(String),

    /// Provider answered with a non-success status
    #[error("Assistant API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider answered but produced no text
    #[error("Assistant returned an empty response")]
    EmptyResponse,
}

impl AssistantError {
    pub fn request(msg: impl Into<String>) -> Self {
        AssistantError::Request(msg.into())
    }

    pub fn not_configured(msg: impl Into<String>) -> Self {
        AssistantError::NotConfigured(msg.into())
    }
}

/// Generates free text for a fully rendered prompt.
///
/// Implementations make exactly one upstream call per invocation and never
/// retry.
#[async_trait]
pub trait AssistantDriver: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, AssistantError>;

    /// Provider name for logs (e.g. "gemini").
    fn provider_name(&self) -> &str;
}

/// Shared, type-erased assistant driver
pub type BoxedAssistantDriver = Arc<dyn AssistantDriver>;

const PROMPT_PREAMBLE: &str = "\
You are an AI assistant integrated into a movie ticket booking web application. \
Help users with questions related to movie listings, show timings, booking availability, \
theater details, and ticket pricing.

Keep responses conversational, polite, and helpful. Answer only based on the app's \
features and scope. If a user asks something out of scope (e.g., international bookings, \
reviews, etc.), politely redirect them.";

/// Wrap a raw user message in the storefront assistant prompt.
pub fn build_prompt(message: &str) -> String {
    format!("{PROMPT_PREAMBLE}\n\nHere is the latest user query:\n\"{message}\"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_message_after_preamble() {
        let prompt = build_prompt("When does IPL start?");
        assert!(prompt.starts_with("You are an AI assistant"));
        assert!(prompt.ends_with("Here is the latest user query:\n\"When does IPL start?\"\n"));
    }

    #[test]
    fn test_message_passed_through_unmodified() {
        let raw = "  \"quoted\"\nmultiline  ";
        assert!(build_prompt(raw).contains(raw));
    }

    #[test]
    fn test_status_error_display() {
        let err = AssistantError::Status {
            status: 429,
            body: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "Assistant API returned status 429: quota");
    }
}
