// Theatre and arts catalog HTTP routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use marquee_core::TheatreArtEvent;

use super::common::{ApiError, CatalogState, ErrorResponse};

/// Create theatre/arts routes
pub fn routes(state: CatalogState) -> Router {
    Router::new()
        .route("/api/theatres-arts", get(list_theatre_arts))
        .route("/api/theatres-arts/:id", get(get_theatre_art))
        .with_state(state)
}

/// GET /api/theatres-arts - List every theatre/art event in definition order
#[utoipa::path(
    get,
    path = "/api/theatres-arts",
    responses(
        (status = 200, description = "All theatre and art events", body = Vec<TheatreArtEvent>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "theatres-arts"
)]
pub async fn list_theatre_arts(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<TheatreArtEvent>>, ApiError> {
    let events = state.service.list_theatre_arts().await?;
    Ok(Json(events))
}

/// GET /api/theatres-arts/{id} - Get theatre/art event by ID
#[utoipa::path(
    get,
    path = "/api/theatres-arts/{id}",
    params(
        ("id" = String, Path, description = "Theatre/art event ID")
    ),
    responses(
        (status = 200, description = "Theatre/art event found", body = TheatreArtEvent),
        (status = 404, description = "Theatre/art event not found", body = ErrorResponse)
    ),
    tag = "theatres-arts"
)]
pub async fn get_theatre_art(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<TheatreArtEvent>, ApiError> {
    tracing::info!(id = %id, "Theatre/art event requested");
    let event = state.service.get_theatre_art(&id).await?;
    Ok(Json(event))
}
