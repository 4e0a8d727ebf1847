//! HTTP API surface for Feedback Hub
//!
//! Thin axum layer over the feedback service: routing, request-id and
//! logging middleware, CORS, and error-to-response mapping. All domain
//! behavior lives in `feedback-hub-service`.

pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
