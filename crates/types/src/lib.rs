//! Core types and data models for Feedback Hub
//!
//! This crate provides the fundamental data structures shared across the
//! feedback service: the feedback record and its append-only log, the
//! derived analytics snapshot, and the raw submission shape accepted on
//! the wire.

pub mod analytics;
pub mod record;
pub mod submission;

pub use analytics::AnalyticsSnapshot;
pub use record::{ClientMeta, Experience, FeedbackLog, FeedbackRecord, SCHEMA_VERSION};
pub use submission::FeedbackSubmission;
