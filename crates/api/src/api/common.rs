// Common types for the public API
//
// Every error leaves the service as `{"error": "..."}` with a status taken
// from the error taxonomy: NotFound -> 404, BadRequest -> 400,
// upstream/internal failures -> 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::{AssistantError, CatalogError, Category};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::CatalogService;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    #[schema(example = "Concert not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

/// Request-terminal API errors
#[derive(Debug)]
pub enum ApiError {
    /// Requested id has no record in the category
    NotFound(Category),
    /// Required input missing or malformed
    BadRequest(&'static str),
    /// External service failed; the detail is logged, never returned
    Upstream(&'static str),
    /// Anything else
    Internal,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(category) => ApiError::NotFound(category),
            CatalogError::Internal(e) => {
                tracing::error!(error = %e, "Catalog query failed");
                ApiError::Internal
            }
        }
    }
}

pub const CHAT_UPSTREAM_MESSAGE: &str = "Something went wrong with Gemini API";

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        match &err {
            AssistantError::NotConfigured(_) => {
                tracing::error!(error = %err, "Chat requested but assistant is not configured");
            }
            _ => {
                tracing::error!(error = %err, "Gemini API error");
            }
        }
        ApiError::Upstream(CHAT_UPSTREAM_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(category) => (StatusCode::NOT_FOUND, category.not_found_message()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Upstream(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        ErrorResponse::new(message).into_response(status).into_response()
    }
}

/// App state for catalog routes
#[derive(Clone)]
pub struct CatalogState {
    pub service: Arc<CatalogService>,
}

impl CatalogState {
    pub fn new(service: Arc<CatalogService>) -> Self {
        Self { service }
    }
}
