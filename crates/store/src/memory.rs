//! In-memory document store
//!
//! Holds both documents behind RwLocks. Used by tests and useful for
//! ephemeral deployments where nothing needs to survive a restart.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use feedback_hub_types::{AnalyticsSnapshot, FeedbackLog};

use crate::backend::DocumentStore;
use crate::document::DocumentKind;
use crate::error::StoreResult;

/// In-memory document store
#[derive(Default)]
pub struct MemoryStore {
    feedback: RwLock<FeedbackLog>,
    analytics: RwLock<AnalyticsSnapshot>,
    feedback_lock: Arc<Mutex<()>>,
    analytics_lock: Arc<Mutex<()>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load_feedback_log(&self) -> StoreResult<FeedbackLog> {
        Ok(self.feedback.read().await.clone())
    }

    async fn save_feedback_log(&self, log: &FeedbackLog) -> StoreResult<()> {
        *self.feedback.write().await = log.clone();
        Ok(())
    }

    async fn load_analytics(&self) -> StoreResult<AnalyticsSnapshot> {
        Ok(self.analytics.read().await.clone())
    }

    async fn save_analytics(&self, snapshot: &AnalyticsSnapshot) -> StoreResult<()> {
        *self.analytics.write().await = snapshot.clone();
        Ok(())
    }

    async fn lock(&self, kind: DocumentKind) -> OwnedMutexGuard<()> {
        let lock = match kind {
            DocumentKind::FeedbackLog => self.feedback_lock.clone(),
            DocumentKind::AnalyticsSnapshot => self.analytics_lock.clone(),
        };
        lock.lock_owned().await
    }
}
