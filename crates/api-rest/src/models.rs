//! Response models

use chrono::{DateTime, Utc};
use serde::Serialize;

use feedback_hub_types::FeedbackRecord;

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
            service: service.into(),
        }
    }
}

/// Successful submission response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub feedback_id: String,
}

impl SubmitResponse {
    pub fn accepted(feedback_id: String) -> Self {
        Self {
            success: true,
            message: "Feedback submitted successfully".to_string(),
            feedback_id,
        }
    }
}

/// Generic success envelope for data-carrying responses
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload for the list-all endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackListData {
    pub total: usize,
    pub feedback: Vec<FeedbackRecord>,
}

impl FeedbackListData {
    pub fn new(feedback: Vec<FeedbackRecord>) -> Self {
        Self {
            total: feedback.len(),
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_shape() {
        let json = serde_json::to_value(SubmitResponse::accepted("abc".into())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["feedbackId"], "abc");
    }

    #[test]
    fn test_health_response_shape() {
        let json = serde_json::to_value(HealthResponse::healthy("feedback-hub")).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "feedback-hub");
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_list_data_counts_records() {
        let data = FeedbackListData::new(Vec::new());
        assert_eq!(data.total, 0);
    }
}
