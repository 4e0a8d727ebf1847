//! Route registration

pub mod analytics;
pub mod export;
pub mod feedback;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::warn;

use feedback_hub_config::ServiceConfig;

use crate::error::ErrorResponse;
use crate::middleware::logging;
use crate::state::AppState;

/// Maximum accepted request body size
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router
pub fn router(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/feedback", post(feedback::submit))
        .route("/api/feedback/all", get(feedback::list_all))
        .route("/api/analytics", get(analytics::analytics))
        .route("/api/export/csv", get(export::export_csv))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(&config.cors_origins))
        .layer(from_fn(logging::logging_middleware))
        .layer(from_fn(logging::request_id_middleware))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Unknown-route handler
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Endpoint not found")),
    )
}
