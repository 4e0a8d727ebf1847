//! Feedback record validation and normalization
//!
//! Structural fields are normalized first (name defaulting, score coercion),
//! then the acceptance rules run in a fixed order. All violations are
//! collected; callers surface the first one as the rejection reason.

use thiserror::Error;

use feedback_hub_types::{Experience, FeedbackSubmission};

/// Minimum accepted feedback text length, in characters
pub const FEEDBACK_MIN_CHARS: usize = 10;
/// Maximum accepted feedback text length, in characters
pub const FEEDBACK_MAX_CHARS: usize = 2000;

/// A single validation rule failure
///
/// Display strings are the user-facing rejection messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Experience rating and feedback are required")]
    MissingExperience,

    #[error("Invalid experience rating")]
    InvalidExperience,

    #[error("Experience rating and feedback are required")]
    MissingFeedback,

    #[error("Feedback must be between 10 and 2000 characters")]
    FeedbackLength,
}

/// A normalized submission that passed every rule
///
/// This is the record-in-progress: the service still synthesizes the id,
/// acceptance timestamp, and client metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFeedback {
    pub name: String,
    pub email: Option<String>,
    pub experience: Experience,
    pub feedback: String,
    pub improvements: String,
    pub resilience_score: Option<i64>,
}

/// Validate and normalize a raw submission
pub fn validate(submission: &FeedbackSubmission) -> Result<ValidatedFeedback, Vec<Violation>> {
    let mut violations = Vec::new();

    let experience = match submission.experience.as_deref() {
        None | Some("") => {
            violations.push(Violation::MissingExperience);
            None
        }
        Some(raw) => {
            let parsed = Experience::parse(raw);
            if parsed.is_none() {
                violations.push(Violation::InvalidExperience);
            }
            parsed
        }
    };

    let feedback = match submission.feedback.as_deref() {
        None | Some("") => {
            violations.push(Violation::MissingFeedback);
            None
        }
        Some(text) => {
            let len = text.chars().count();
            if (FEEDBACK_MIN_CHARS..=FEEDBACK_MAX_CHARS).contains(&len) {
                Some(text.to_string())
            } else {
                violations.push(Violation::FeedbackLength);
                None
            }
        }
    };

    match (experience, feedback) {
        (Some(experience), Some(feedback)) if violations.is_empty() => Ok(ValidatedFeedback {
            name: match submission.name.as_deref() {
                None | Some("") => "Anonymous".to_string(),
                Some(name) => name.to_string(),
            },
            email: submission.email.clone().filter(|e| !e.is_empty()),
            experience,
            feedback,
            improvements: submission.improvements.clone().unwrap_or_default(),
            // Unparsable scores are silently treated as absent, never rejected.
            resilience_score: submission.parsed_score(),
        }),
        _ => Err(violations),
    }
}
