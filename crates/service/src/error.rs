//! Error types for the feedback service

use feedback_hub_store::StoreError;
use thiserror::Error;

/// Feedback service errors
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Submission failed validation; the message is safe to surface
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Document storage failure
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
