//! Fishing Forecast Georgia - Backend Server
//!
//! Serves simulated weather forecasts and fishing scores for anglers
//! across Georgia's rivers and lakes.

use axum::{http::HeaderValue, routing::get, Router};
use std::{sync::Arc, time::Instant};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ffg_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Fishing Forecast Georgia Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        "Moon phase bonus: {}",
        if config.scoring.include_moon_phase_bonus {
            "enabled"
        } else {
            "disabled"
        }
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(AppState::new(config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(&state.config.cors.allowed_origin))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn allowed_origin(origin: &str) -> AllowOrigin {
    if origin == "*" {
        return AllowOrigin::any();
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid CORS origin: {}", origin);
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    }
}

/// Root endpoint
async fn root() -> &'static str {
    "Fishing Forecast Georgia API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
