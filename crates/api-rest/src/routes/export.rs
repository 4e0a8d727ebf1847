//! CSV export route

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
};

use crate::error::ApiError;
use crate::routes::feedback::authorization_header;
use crate::state::AppState;

pub async fn export_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let csv = state
        .service
        .export_csv(authorization_header(&headers))
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=feedback-export.csv",
            ),
        ],
        csv,
    ))
}
