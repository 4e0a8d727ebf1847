//! Error types for document storage

use thiserror::Error;

/// Storage operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O failure while reading or writing a document
    #[error("I/O error on {document}: {source}")]
    Io {
        document: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Document contents could not be serialized or parsed
    #[error("serialization error on {document}: {reason}")]
    Serialization {
        document: &'static str,
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn io(document: &'static str, source: std::io::Error) -> Self {
        StoreError::Io { document, source }
    }

    pub(crate) fn serialization(document: &'static str, err: serde_json::Error) -> Self {
        StoreError::Serialization {
            document,
            reason: err.to_string(),
        }
    }
}

/// Result type alias for storage operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_document() {
        let err = StoreError::io(
            "feedback-log",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("feedback-log"));
    }
}
