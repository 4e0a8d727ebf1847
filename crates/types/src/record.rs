//! Feedback record and the append-only feedback log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema version written into both persisted documents.
///
/// Documents persisted before versioning was introduced carry no field and
/// deserialize as version 1.
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// User-reported experience rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Experience {
    /// All accepted values, in rating order
    pub const ALL: [Experience; 4] = [
        Experience::Excellent,
        Experience::Good,
        Experience::Average,
        Experience::Poor,
    ];

    /// Get the wire/document representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Excellent => "excellent",
            Experience::Good => "good",
            Experience::Average => "average",
            Experience::Poor => "poor",
        }
    }

    /// Parse a raw submission value; `None` for anything outside the enum
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "excellent" => Some(Experience::Excellent),
            "good" => Some(Experience::Good),
            "average" => Some(Experience::Average),
            "poor" => Some(Experience::Poor),
            _ => None,
        }
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort client metadata captured at acceptance, never validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMeta {
    /// Origin address as reported by the connection or proxy headers
    pub ip_address: String,
    /// Client agent string
    pub user_agent: String,
}

impl ClientMeta {
    pub fn new(ip_address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for ClientMeta {
    fn default() -> Self {
        Self::new("unknown", "unknown")
    }
}

/// A single accepted feedback submission
///
/// Records are immutable once created and are never deleted; the log they
/// live in is an append-only ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Collision-resistant identifier generated at acceptance
    pub id: String,
    /// Submitter name, `"Anonymous"` when not provided
    pub name: String,
    /// Optional contact address, no format validation
    #[serde(default)]
    pub email: Option<String>,
    /// Required experience rating
    pub experience: Experience,
    /// Required feedback text, 10..=2000 characters
    pub feedback: String,
    /// Optional free-text improvement suggestions
    #[serde(default)]
    pub improvements: String,
    /// Optional resilience score; absent when not provided or unparsable
    #[serde(default)]
    pub resilience_score: Option<i64>,
    /// Server-side acceptance timestamp
    pub submitted_at: DateTime<Utc>,
    /// Best-effort client metadata
    #[serde(default)]
    pub client_meta: ClientMeta,
}

impl FeedbackRecord {
    /// Create a new record with a fresh id and acceptance timestamp
    pub fn new(experience: Experience, feedback: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Anonymous".to_string(),
            email: None,
            experience,
            feedback: feedback.into(),
            improvements: String::new(),
            resilience_score: None,
            submitted_at: Utc::now(),
            client_meta: ClientMeta::default(),
        }
    }

    /// Set submitter name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set contact address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set improvement suggestions
    pub fn with_improvements(mut self, improvements: impl Into<String>) -> Self {
        self.improvements = improvements.into();
        self
    }

    /// Set resilience score
    pub fn with_score(mut self, score: i64) -> Self {
        self.resilience_score = Some(score);
        self
    }

    /// Set client metadata
    pub fn with_client_meta(mut self, meta: ClientMeta) -> Self {
        self.client_meta = meta;
        self
    }
}

/// The append-only feedback log, the system's source of truth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackLog {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Accepted records in acceptance order
    pub feedback: Vec<FeedbackRecord>,
}

impl FeedbackLog {
    /// Number of accepted records
    pub fn len(&self) -> usize {
        self.feedback.len()
    }

    /// Check whether any records have been accepted
    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            feedback: Vec::new(),
        }
    }
}
