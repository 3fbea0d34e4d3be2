// Gemini Driver Implementation
//
// This crate provides the Google Gemini implementation of the
// AssistantDriver trait from marquee-core. The API server constructs it
// when GEMINI_API_KEY is configured.

mod driver;
mod types;


pub use driver::{GeminiDriver, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use types::{GenerateContentRequest, GenerateContentResponse};

// Re-export core types for convenience
pub use marquee_core::assistant::{AssistantDriver, AssistantError};
