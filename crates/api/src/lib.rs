// Marquee API Library
// Decision: Router assembly lives in the library so tests and binaries share it
// Decision: Catalog data is injected as a CatalogRepository; the seed is only the default

use axum::http::{header, HeaderValue, Method};
use axum::{extract::State, routing::get, Json, Router};
use marquee_core::{BoxedAssistantDriver, CatalogRepository};
use marquee_gemini::GeminiDriver;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Environment configuration
pub mod config;

// Services layer
pub mod services;

// OpenAPI spec generation
pub mod openapi;

pub use config::ServerConfig;
use openapi::ApiDoc;
use services::{CatalogService, ChatService};

/// Services shared across routes
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<CatalogService>,
    pub chat: Arc<ChatService>,
}

impl AppContext {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        assistant: Option<BoxedAssistantDriver>,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(repository)),
            chat: Arc::new(ChatService::new(assistant)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    chat_enabled: bool,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    chat_enabled: bool,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        chat_enabled: state.chat_enabled,
    })
}

/// Build the Gemini driver when an API key is configured
pub fn build_assistant_driver(config: &ServerConfig) -> Option<BoxedAssistantDriver> {
    let api_key = config.gemini_api_key.as_ref()?;

    let driver = match &config.gemini_api_url {
        Some(url) => GeminiDriver::with_base_url(api_key.clone(), url.clone()),
        None => GeminiDriver::new(api_key.clone()),
    }
    .with_model(config.gemini_model.clone())
    .with_timeout(config.chat_timeout);

    tracing::info!(
        model = %driver.model(),
        api_url = %driver.api_url(),
        timeout_secs = driver.timeout().as_secs(),
        "Gemini assistant configured"
    );

    Some(Arc::new(driver))
}

/// Assemble the full application router
pub fn build_router(ctx: AppContext, config: &ServerConfig) -> Router {
    let catalog_state = api::CatalogState::new(ctx.catalog.clone());
    let chat_state = api::chat::AppState::new(ctx.chat.clone());
    let health_state = HealthState {
        chat_enabled: ctx.chat.is_enabled(),
    };

    let api_routes = Router::new()
        .merge(api::concerts::routes(catalog_state.clone()))
        .merge(api::sports::routes(catalog_state.clone()))
        .merge(api::theatre_arts::routes(catalog_state))
        .merge(api::chat::routes(chat_state));

    let api_prefix = config::normalize_prefix(&config.api_prefix);
    if !api_prefix.is_empty() {
        tracing::info!(prefix = %api_prefix, "API prefix configured");
    }

    // Health stays unprefixed
    let app = Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(build_router_with_prefix(api_routes, &api_prefix));

    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    app.layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Build router with optional API prefix (extracted for testing)
///
/// `api_prefix` must already be normalized; see `config::normalize_prefix`.
fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}

/// Any origin unless an explicit allow-list is configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    if allowed.is_empty() {
        tracing::info!("CORS allows any origin");
        base.allow_origin(Any)
    } else {
        tracing::info!(origins = ?allowed, "CORS origins configured");
        base.allow_origin(AllowOrigin::list(allowed))
    }
}
