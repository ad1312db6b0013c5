//! Route definitions for Fishing Forecast Georgia

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
        .fallback(handlers::not_found)
}

/// Forecast and scoring routes (public)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_weather_forecast))
        .route("/fishing-score", post(handlers::calculate_fishing_score))
}
