// Concert catalog HTTP routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use marquee_core::ConcertEvent;

use super::common::{ApiError, CatalogState, ErrorResponse};

/// Create concert routes
pub fn routes(state: CatalogState) -> Router {
    Router::new()
        .route("/api/concerts", get(list_concerts))
        .route("/api/concerts/:id", get(get_concert))
        .with_state(state)
}

/// GET /api/concerts - List every concert in definition order
#[utoipa::path(
    get,
    path = "/api/concerts",
    responses(
        (status = 200, description = "All concerts", body = Vec<ConcertEvent>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "concerts"
)]
pub async fn list_concerts(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<ConcertEvent>>, ApiError> {
    let concerts = state.service.list_concerts().await?;
    Ok(Json(concerts))
}

/// GET /api/concerts/{id} - Get concert by ID
#[utoipa::path(
    get,
    path = "/api/concerts/{id}",
    params(
        ("id" = String, Path, description = "Concert ID")
    ),
    responses(
        (status = 200, description = "Concert found", body = ConcertEvent),
        (status = 404, description = "Concert not found", body = ErrorResponse)
    ),
    tag = "concerts"
)]
pub async fn get_concert(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<ConcertEvent>, ApiError> {
    let concert = state.service.get_concert(&id).await?;
    Ok(Json(concert))
}
