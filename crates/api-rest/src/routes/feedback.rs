//! Feedback submission and retrieval routes

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap},
    Json,
};
use std::net::SocketAddr;

use feedback_hub_types::{ClientMeta, FeedbackSubmission};

use crate::error::ApiError;
use crate::models::{DataResponse, FeedbackListData, SubmitResponse};
use crate::state::AppState;

pub async fn submit(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(submission): Json<FeedbackSubmission>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let meta = client_meta(connect_info, &headers);
    let id = state.service.submit(submission, meta).await?;
    Ok(Json(SubmitResponse::accepted(id)))
}

pub async fn list_all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DataResponse<FeedbackListData>>, ApiError> {
    let records = state
        .service
        .list_all(authorization_header(&headers))
        .await?;
    Ok(Json(DataResponse::new(FeedbackListData::new(records))))
}

/// Best-effort client metadata; never fails a request
fn client_meta(connect_info: Option<ConnectInfo<SocketAddr>>, headers: &HeaderMap) -> ClientMeta {
    let ip = connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    ClientMeta::new(ip, user_agent)
}

pub(crate) fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}
