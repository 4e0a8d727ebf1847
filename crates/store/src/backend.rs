//! Document store trait definition
//!
//! The `DocumentStore` trait is the seam between the feedback service and
//! whatever holds the two persisted documents. All reads return owned deep
//! copies; a write is visible only once the corresponding save completes.
//!
//! Every read-modify-write sequence against a document kind must run inside
//! that kind's exclusive lock (`lock`), which guarantees at most one
//! in-flight mutation per document at a time. Lock acquisition order is the
//! caller's responsibility; the service always takes the feedback-log lock
//! before the analytics lock.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use feedback_hub_types::{AnalyticsSnapshot, FeedbackLog};

use crate::document::DocumentKind;
use crate::error::StoreResult;

/// Storage for the two persisted JSON documents
///
/// Implementations must be safe for concurrent use from multiple tasks and
/// must initialize a missing document with its type-specific empty default
/// on first access, persisting it before returning.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the feedback log, creating the empty default if absent
    async fn load_feedback_log(&self) -> StoreResult<FeedbackLog>;

    /// Persist the full feedback log, replacing previous contents
    async fn save_feedback_log(&self, log: &FeedbackLog) -> StoreResult<()>;

    /// Load the analytics snapshot, creating the zeroed default if absent
    async fn load_analytics(&self) -> StoreResult<AnalyticsSnapshot>;

    /// Persist the full analytics snapshot, replacing previous contents
    async fn save_analytics(&self, snapshot: &AnalyticsSnapshot) -> StoreResult<()>;

    /// Acquire the exclusive mutation scope for a document kind
    ///
    /// The guard must be held for the whole load-mutate-save sequence.
    async fn lock(&self, kind: DocumentKind) -> OwnedMutexGuard<()>;
}
