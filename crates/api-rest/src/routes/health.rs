//! Liveness probe

use axum::{extract::State, Json};

use crate::models::HealthResponse;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service_name.clone()))
}
