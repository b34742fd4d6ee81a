//! Harvest Schedule - Backend Server
//!
//! Serves the harvest dashboard's derived views: harvest windows on the
//! growing-season timeline, month apportioned yields, summary cards and the
//! text table export.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;
use services::DatasetService;
use shared::Crop;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Validated crop dataset, read once at startup
    pub dataset: Arc<Vec<Crop>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hs_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Harvest Schedule Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        "Reference year {}, wrap policy {}",
        config.dataset.reference_year(),
        config.dataset.wrap_policy
    );

    // Load the dataset; an invalid record stops startup
    let dataset = DatasetService::load(&config.dataset)?;

    // Create application state
    let state = AppState {
        dataset: Arc::new(dataset),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Harvest Schedule API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
