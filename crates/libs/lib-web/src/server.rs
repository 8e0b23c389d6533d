//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module provides the main server setup function that creates the Axum
//! router, registers the form routes, applies middleware, and starts the
//! HTTP server.

// region: --- Imports
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use lib_core::Config;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::middleware::{log_requests, stamp_req};
// endregion: --- Imports

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Allowed CORS origins. Empty by default: the form posts back to the
    /// page that served it, so cross-origin access is opt-in.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading or validation fails
/// - The tracing subscriber is already installed
/// - Binding the listen address fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let app_config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    app_config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let filter = match app_config.log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(&app_config.log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("EMAIL VALIDATION FORM STARTING");
    info!("Log level: {}", app_config.log_level);

    let app = create_router(config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&app_config.bind_address).await?;

    info!("SERVER READY: http://{}", app_config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes
fn create_router(allowed_origins: Vec<String>) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .route(
            "/",
            get(handlers::index::show_form).post(handlers::index::submit),
        )
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            (StatusCode::NOT_FOUND, "Route not found")
        })
        // Request/response logging
        .layer(axum::middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans
        .layer(TraceLayer::new_for_http())
        // Request stamping is the outermost layer so every log line below it
        // carries the request ID
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!("FORM:");
    info!("   • GET  /           - render the validation form");
    info!("   • POST /           - validate the submitted email field");
    info!("HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
