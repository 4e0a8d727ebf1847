//! Shared application state

use std::sync::Arc;

use feedback_hub_service::FeedbackService;

/// State handed to every route handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FeedbackService>,
    /// Name reported by the health endpoint
    pub service_name: String,
}

impl AppState {
    pub fn new(service: Arc<FeedbackService>, service_name: impl Into<String>) -> Self {
        Self {
            service,
            service_name: service_name.into(),
        }
    }
}
