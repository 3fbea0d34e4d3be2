// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the Marquee API.
// It is used by both the API server (for Swagger UI)
// and the export-openapi binary (for static document generation).

use crate::api;
use marquee_core::{ConcertEvent, SportsEvent, TheatreArtEvent, TheatreArtKind};
use utoipa::OpenApi;

/// OpenAPI documentation for the Marquee API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::concerts::list_concerts,
        api::concerts::get_concert,
        api::sports::list_sports,
        api::sports::get_sport,
        api::theatre_arts::list_theatre_arts,
        api::theatre_arts::get_theatre_art,
        api::chat::chat,
    ),
    components(
        schemas(
            ConcertEvent,
            SportsEvent,
            TheatreArtEvent, TheatreArtKind,
            api::ErrorResponse,
            api::chat::ChatRequest,
            api::chat::ChatResponse,
        )
    ),
    tags(
        (name = "concerts", description = "Concert catalog"),
        (name = "sports", description = "Sports event catalog"),
        (name = "theatres-arts", description = "Theatre and art event catalog"),
        (name = "chat", description = "Storefront assistant")
    ),
    info(
        title = "Marquee API",
        version = "0.1.0",
        description = "Read-only event catalogs and assistant chat for the Marquee ticket storefront",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
