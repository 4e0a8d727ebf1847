//! Raw feedback submission as accepted on the wire

use serde::Deserialize;

/// Unvalidated fields from a feedback submission request
///
/// Every field is optional at this layer; the validator decides what is
/// required. `resilience_score` is kept as a raw JSON value because clients
/// send it as either a number or a string, and unparsable input is treated
/// as absent rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub improvements: Option<String>,
    #[serde(default)]
    pub resilience_score: Option<serde_json::Value>,
}

impl FeedbackSubmission {
    /// Coerce the raw score value to an integer; `None` when absent or
    /// unparsable
    pub fn parsed_score(&self) -> Option<i64> {
        match self.resilience_score.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission_with_score(score: serde_json::Value) -> FeedbackSubmission {
        FeedbackSubmission {
            resilience_score: Some(score),
            ..Default::default()
        }
    }

    #[test]
    fn test_score_from_number() {
        let s = submission_with_score(serde_json::json!(85));
        assert_eq!(s.parsed_score(), Some(85));
    }

    #[test]
    fn test_score_from_string() {
        let s = submission_with_score(serde_json::json!("72"));
        assert_eq!(s.parsed_score(), Some(72));
    }

    #[test]
    fn test_score_unparsable_is_absent() {
        assert_eq!(
            submission_with_score(serde_json::json!("not a number")).parsed_score(),
            None
        );
        assert_eq!(
            submission_with_score(serde_json::json!(12.5)).parsed_score(),
            None
        );
        assert_eq!(
            submission_with_score(serde_json::json!([1, 2])).parsed_score(),
            None
        );
        assert_eq!(FeedbackSubmission::default().parsed_score(), None);
    }

    #[test]
    fn test_deserialize_camel_case_body() {
        let body = r#"{
            "name": "Sam",
            "experience": "good",
            "feedback": "went well enough",
            "resilienceScore": "90"
        }"#;

        let s: FeedbackSubmission = serde_json::from_str(body).unwrap();
        assert_eq!(s.name.as_deref(), Some("Sam"));
        assert_eq!(s.experience.as_deref(), Some("good"));
        assert_eq!(s.parsed_score(), Some(90));
        assert_eq!(s.email, None);
    }
}
