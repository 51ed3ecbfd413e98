//! Predictive Maintenance Dashboard Server
//!
//! Serves the three-tab dashboard and the JSON API behind it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  MAINTENANCE DASHBOARD                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────────────────────────────────┐ │
//! │  │  HTML     │  │  JSON API (Axum)                        │ │
//! │  │  Page     │─▶│  predict / compare / schema / model     │ │
//! │  └───────────┘  └────────────────────┬────────────────────┘ │
//! │                                      ▼ spawn_blocking       │
//! │                     ┌──────────────────────────────────┐    │
//! │                     │ Engine (ONNX classifier + CSV)   │    │
//! │                     └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;
mod extract;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maintenance_core::constants::APP_NAME;
use maintenance_core::Engine;

pub use error::{AppError, AppResult};

const DEFAULT_LOG_FILTER: &str = "maintenance_dashboard=debug,maintenance_core=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("{} starting...", APP_NAME);
    tracing::info!("Model: {}", config.model_path.display());
    tracing::info!("Dataset: {}", config.dataset_path.display());

    // Load artifacts; no fallback model
    let engine_config = config.engine();
    let engine = tokio::task::spawn_blocking(move || Engine::load(&engine_config))
        .await
        .context("artifact loader panicked")?
        .context("failed to load artifacts")?;

    tracing::info!("Engine ready: {:?}", engine);

    // Build application state
    let state = AppState {
        engine: Arc::new(engine),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/inputs/schema", get(handlers::inputs::schema))
        .route("/api/v1/predict", post(handlers::evaluate::predict))
        .route("/api/v1/compare", post(handlers::evaluate::compare))
        .route("/api/v1/fields", get(handlers::catalog::fields))
        .route("/api/v1/model", get(handlers::catalog::model))
        .route("/api/v1/about", get(handlers::catalog::about));

    Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
