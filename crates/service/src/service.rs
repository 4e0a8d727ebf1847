//! Feedback service orchestration
//!
//! The accept path is validate, append, persist, re-aggregate, respond. The
//! log write decides the caller-visible outcome; the analytics tail never
//! fails a submission that already landed in the log.

use std::sync::Arc;
use tracing::{error, info};

use feedback_hub_store::{DocumentKind, DocumentStore};
use feedback_hub_types::{
    AnalyticsSnapshot, ClientMeta, FeedbackLog, FeedbackRecord, FeedbackSubmission,
};

use crate::aggregator;
use crate::auth::{self, TokenVerifier};
use crate::error::{ServiceError, ServiceResult};
use crate::export;
use crate::validator;

/// Orchestrates feedback acceptance and retrieval
///
/// Constructed once at process start with an injected store and credential
/// verifier; holds no long-lived document cache, so the store is the single
/// source of truth for every request.
pub struct FeedbackService {
    store: Arc<dyn DocumentStore>,
    verifier: Arc<dyn TokenVerifier>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn DocumentStore>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { store, verifier }
    }

    /// Accept a feedback submission, returning the new record's id
    pub async fn submit(
        &self,
        submission: FeedbackSubmission,
        meta: ClientMeta,
    ) -> ServiceResult<String> {
        let validated = validator::validate(&submission).map_err(|violations| {
            let reason = violations
                .first()
                .map(ToString::to_string)
                .unwrap_or_else(|| "Invalid submission".to_string());
            ServiceError::Validation(reason)
        })?;

        let mut record = FeedbackRecord::new(validated.experience, validated.feedback)
            .with_name(validated.name)
            .with_improvements(validated.improvements)
            .with_client_meta(meta);
        record.email = validated.email;
        record.resilience_score = validated.resilience_score;

        // Exclusive scope for the whole log read-modify-write; a concurrent
        // submission cannot discard this append.
        let updated_log = {
            let _guard = self.store.lock(DocumentKind::FeedbackLog).await;
            let mut log = self.store.load_feedback_log().await?;
            log.feedback.push(record.clone());
            self.store.save_feedback_log(&log).await?;
            log
        };

        info!(
            id = %record.id,
            name = %record.name,
            score = ?record.resilience_score,
            "Accepted feedback submission"
        );

        // The submission outcome is already decided by the log write;
        // aggregation failures are logged and swallowed.
        if let Err(e) = self.update_analytics(&updated_log, &record).await {
            error!(id = %record.id, error = %e, "Analytics update failed, submission kept");
        }

        Ok(record.id)
    }

    async fn update_analytics(
        &self,
        log: &FeedbackLog,
        record: &FeedbackRecord,
    ) -> ServiceResult<()> {
        let _guard = self.store.lock(DocumentKind::AnalyticsSnapshot).await;
        let prior = self.store.load_analytics().await?;
        let snapshot = aggregator::recompute(log, record, &prior);
        self.store.save_analytics(&snapshot).await?;
        Ok(())
    }

    /// All accepted records, newest first; requires a valid bearer token
    pub async fn list_all(&self, auth_header: Option<&str>) -> ServiceResult<Vec<FeedbackRecord>> {
        self.authorize(auth_header)?;

        let log = self.store.load_feedback_log().await?;
        let mut records = log.feedback;
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(records)
    }

    /// Current analytics snapshot
    pub async fn analytics(&self) -> ServiceResult<AnalyticsSnapshot> {
        Ok(self.store.load_analytics().await?)
    }

    /// CSV rendering of the full log; requires a valid bearer token
    pub async fn export_csv(&self, auth_header: Option<&str>) -> ServiceResult<String> {
        self.authorize(auth_header)?;

        let log = self.store.load_feedback_log().await?;
        Ok(export::to_csv(&log.feedback))
    }

    fn authorize(&self, header: Option<&str>) -> ServiceResult<()> {
        match auth::bearer_token(header) {
            Some(token) if self.verifier.verify(token) => Ok(()),
            _ => Err(ServiceError::Unauthorized),
        }
    }
}
