//! Analytics snapshot route

use axum::{extract::State, Json};

use feedback_hub_types::AnalyticsSnapshot;

use crate::error::ApiError;
use crate::models::DataResponse;
use crate::state::AppState;

pub async fn analytics(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<AnalyticsSnapshot>>, ApiError> {
    let snapshot = state.service.analytics().await?;
    Ok(Json(DataResponse::new(snapshot)))
}
