//! File-backed document store
//!
//! Each document lives in its own JSON file under a configurable data
//! directory. Every save rewrites the whole file by writing a temporary
//! sibling and renaming it over the target, so a same-process reader never
//! observes a partial write. There is no cross-process file locking;
//! concurrent external writers are unsupported and may corrupt state.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use feedback_hub_types::{AnalyticsSnapshot, FeedbackLog};

use crate::backend::DocumentStore;
use crate::document::DocumentKind;
use crate::error::{StoreError, StoreResult};

/// JSON-file document store
pub struct JsonFileStore {
    data_dir: PathBuf,
    feedback_lock: Arc<Mutex<()>>,
    analytics_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`; call `initialize` before use
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            feedback_lock: Arc::new(Mutex::new(())),
            analytics_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the data directory and persist defaults for missing documents
    pub async fn initialize(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StoreError::io("data-directory", e))?;

        if !self.path_for(DocumentKind::FeedbackLog).exists() {
            self.write_document(DocumentKind::FeedbackLog, &FeedbackLog::default())
                .await?;
            info!(document = %DocumentKind::FeedbackLog, "Initialized empty document");
        }

        if !self.path_for(DocumentKind::AnalyticsSnapshot).exists() {
            self.write_document(DocumentKind::AnalyticsSnapshot, &AnalyticsSnapshot::empty())
                .await?;
            info!(document = %DocumentKind::AnalyticsSnapshot, "Initialized empty document");
        }

        Ok(())
    }

    /// Absolute path of a document's file
    pub fn path_for(&self, kind: DocumentKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    async fn read_document<T>(&self, kind: DocumentKind, default: impl FnOnce() -> T) -> StoreResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = self.path_for(kind);

        let contents = match fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First access: create the type-specific default and persist
                // it before returning.
                let document = default();
                self.write_document(kind, &document).await?;
                debug!(document = %kind, "Created missing document with defaults");
                return Ok(document);
            }
            Err(e) => return Err(StoreError::io(kind.name(), e)),
        };

        serde_json::from_slice(&contents).map_err(|e| StoreError::serialization(kind.name(), e))
    }

    async fn write_document<T: Serialize>(&self, kind: DocumentKind, document: &T) -> StoreResult<()> {
        let path = self.path_for(kind);
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| StoreError::serialization(kind.name(), e))?;

        // Write a temporary sibling and rename it into place. The rename is
        // what makes the rewrite atomic for same-process readers; the
        // document lock keeps the fixed temp name from being contended.
        let tmp = path.with_extension("json.tmp");
        write_and_sync(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(kind.name(), e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(kind.name(), e))?;

        debug!(document = %kind, bytes = bytes.len(), "Persisted document");
        Ok(())
    }
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    Ok(())
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load_feedback_log(&self) -> StoreResult<FeedbackLog> {
        self.read_document(DocumentKind::FeedbackLog, FeedbackLog::default)
            .await
    }

    async fn save_feedback_log(&self, log: &FeedbackLog) -> StoreResult<()> {
        self.write_document(DocumentKind::FeedbackLog, log).await
    }

    async fn load_analytics(&self) -> StoreResult<AnalyticsSnapshot> {
        self.read_document(DocumentKind::AnalyticsSnapshot, AnalyticsSnapshot::empty)
            .await
    }

    async fn save_analytics(&self, snapshot: &AnalyticsSnapshot) -> StoreResult<()> {
        self.write_document(DocumentKind::AnalyticsSnapshot, snapshot)
            .await
    }

    async fn lock(&self, kind: DocumentKind) -> OwnedMutexGuard<()> {
        let lock = match kind {
            DocumentKind::FeedbackLog => self.feedback_lock.clone(),
            DocumentKind::AnalyticsSnapshot => self.analytics_lock.clone(),
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::tests as backend_tests;
    use feedback_hub_types::{Experience, FeedbackRecord};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path())
    }

    #[tokio::test]
    async fn test_initialize_creates_both_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.initialize().await.unwrap();

        assert!(dir.path().join("feedback.json").exists());
        assert!(dir.path().join("analytics.json").exists());

        // Persisted defaults must parse back to the empty documents.
        let log = store.load_feedback_log().await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_initialize_preserves_existing_documents() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.initialize().await.unwrap();

        let mut log = store.load_feedback_log().await.unwrap();
        log.feedback
            .push(FeedbackRecord::new(Experience::Good, "keep me around please"));
        store.save_feedback_log(&log).await.unwrap();

        // A second initialize (e.g. process restart) must not reset state.
        store.initialize().await.unwrap();
        assert_eq!(store.load_feedback_log().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_creates_missing_document() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        // No initialize: the first load must create and persist the default.
        let snapshot = store.load_analytics().await.unwrap();
        assert_eq!(snapshot.total_submissions, 0);
        assert!(dir.path().join("analytics.json").exists());
    }

    #[tokio::test]
    async fn test_defaults() {
        let dir = TempDir::new().unwrap();
        backend_tests::test_store_defaults(store(&dir)).await;
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        backend_tests::test_store_round_trip(store(&dir)).await;
    }

    #[tokio::test]
    async fn test_reads_are_copies() {
        let dir = TempDir::new().unwrap();
        backend_tests::test_store_reads_are_copies(store(&dir)).await;
    }

    #[tokio::test]
    async fn test_lock_serializes_mutations() {
        let dir = TempDir::new().unwrap();
        backend_tests::test_store_lock_serializes_mutations(store(&dir)).await;
    }

    #[tokio::test]
    async fn test_save_leaves_valid_json_on_disk() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut log = FeedbackLog::default();
        for i in 0..5 {
            log.feedback.push(
                FeedbackRecord::new(Experience::Average, "a complete valid document")
                    .with_name(format!("writer-{i}")),
            );
            store.save_feedback_log(&log).await.unwrap();

            // Every rewrite must leave a complete, parseable document.
            let raw = std::fs::read(dir.path().join("feedback.json")).unwrap();
            let parsed: FeedbackLog = serde_json::from_slice(&raw).unwrap();
            assert_eq!(parsed.len(), i + 1);
        }

        // No temp file left behind after a successful rename.
        assert!(!dir.path().join("feedback.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_document_surfaces_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(dir.path().join("feedback.json"), b"{not json").unwrap();

        let err = store.load_feedback_log().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }
}
