// Assistant chat HTTP route
//
// POST /chat takes `{"message": "..."}` and answers `{"reply": "..."}`.
// The body is parsed by hand so that a missing body, malformed JSON, or a
// missing message all produce the same 400 response.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{ApiError, ErrorResponse};
use crate::services::ChatService;

pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Request to ask the assistant a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message, forwarded verbatim inside the assistant prompt.
    #[schema(example = "What concerts are on in Hyderabad?")]
    pub message: String,
}

/// Assistant answer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Free text generated by the assistant.
    pub reply: String,
}

/// App state for chat routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ChatService>,
}

impl AppState {
    pub fn new(service: Arc<ChatService>) -> Self {
        Self { service }
    }
}

/// Create chat routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(state)
}

/// Pull a non-empty string `message` out of a raw request body.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("message")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

/// POST /chat - Ask the storefront assistant
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Message is required", body = ErrorResponse),
        (status = 500, description = "Assistant unavailable", body = ErrorResponse)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = extract_message(&body).ok_or(ApiError::BadRequest(MESSAGE_REQUIRED))?;

    let reply = state.service.reply(&message).await?;

    Ok(Json(ChatResponse { reply }))
}
