// Marquee API server
// Decision: Catalogs are served from the in-memory seed; no database
// Decision: Chat is optional and reports 500 until GEMINI_API_KEY is configured

use anyhow::{Context, Result};
use marquee_api::{build_assistant_driver, build_router, AppContext, ServerConfig};
use marquee_core::telemetry::{init_telemetry, TelemetryConfig};
use marquee_core::InMemoryCatalog;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    // Initialize telemetry with OpenTelemetry support
    // Configure via environment variables:
    // - OTEL_SERVICE_NAME: Service name (default: "marquee-api")
    // - OTEL_EXPORTER_OTLP_ENDPOINT: OTLP endpoint (e.g., "http://localhost:4317")
    // - RUST_LOG: Log filter (default: "marquee_api=debug,tower_http=debug")
    let mut telemetry_config =
        TelemetryConfig::from_env().with_default_filter("marquee_api=debug,tower_http=debug");
    if telemetry_config.service_name == "marquee" {
        telemetry_config.service_name = "marquee-api".to_string();
    }
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());

    // Keep the guard alive for the lifetime of the application
    let _telemetry_guard = init_telemetry(telemetry_config);

    tracing::info!("marquee-api starting...");

    let config = ServerConfig::from_env();

    let catalog = InMemoryCatalog::seeded();
    let (concerts, sports, theatre_arts) = catalog.sizes();
    tracing::info!(concerts, sports, theatre_arts, "Catalog loaded");

    let assistant = build_assistant_driver(&config);
    if assistant.is_none() {
        tracing::warn!("GEMINI_API_KEY not set. Chat requests will fail until it is configured.");
    }

    let ctx = AppContext::new(Arc::new(catalog), assistant);
    let app = build_router(ctx, &config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
