// Sports catalog HTTP routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use marquee_core::SportsEvent;

use super::common::{ApiError, CatalogState, ErrorResponse};

/// Create sports routes
pub fn routes(state: CatalogState) -> Router {
    Router::new()
        .route("/api/sports", get(list_sports))
        .route("/api/sports/:id", get(get_sport))
        .with_state(state)
}

/// GET /api/sports - List every sports event in definition order
#[utoipa::path(
    get,
    path = "/api/sports",
    responses(
        (status = 200, description = "All sports events", body = Vec<SportsEvent>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "sports"
)]
pub async fn list_sports(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<SportsEvent>>, ApiError> {
    let events = state.service.list_sports().await?;
    Ok(Json(events))
}

/// GET /api/sports/{id} - Get sports event by ID
#[utoipa::path(
    get,
    path = "/api/sports/{id}",
    params(
        ("id" = String, Path, description = "Sports event ID")
    ),
    responses(
        (status = 200, description = "Sports event found", body = SportsEvent),
        (status = 404, description = "Sports event not found", body = ErrorResponse)
    ),
    tag = "sports"
)]
pub async fn get_sport(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<SportsEvent>, ApiError> {
    let event = state.service.get_sport(&id).await?;
    Ok(Json(event))
}
