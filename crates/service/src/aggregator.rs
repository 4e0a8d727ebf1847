//! Analytics aggregation
//!
//! Recomputes the derived snapshot after each accepted record. Submission
//! and per-rating counts advance incrementally; the average score is a full
//! recomputation over every present score in the log, a deliberate
//! simplicity/cost tradeoff at this scale.

use chrono::Utc;

use feedback_hub_types::{AnalyticsSnapshot, FeedbackLog, FeedbackRecord};

/// Cap on distinct improvement words retained in the snapshot
pub const MAX_TOP_WORDS: usize = 50;

/// Tokens at or below this character count are ignored
const MIN_WORD_CHARS: usize = 4;

/// Common words excluded from improvement keyword aggregation
const STOPWORDS: &[&str] = &[
    "the", "and", "but", "for", "are", "this", "that", "with", "have", "will", "been", "from",
    "they", "know", "want", "good", "much", "some", "time", "very", "when", "come", "here",
    "just", "like", "long", "make", "many", "over", "such", "take", "than", "them", "well",
    "were",
];

/// Derive the next snapshot from the updated log and the record that was
/// just appended
pub fn recompute(
    log: &FeedbackLog,
    new_record: &FeedbackRecord,
    prior: &AnalyticsSnapshot,
) -> AnalyticsSnapshot {
    let mut snapshot = prior.clone();

    snapshot.total_submissions = prior.total_submissions + 1;
    *snapshot
        .experience_counts
        .entry(new_record.experience)
        .or_insert(0) += 1;
    snapshot.average_score = average_score(log);

    if !new_record.improvements.is_empty() {
        merge_improvement_words(&mut snapshot.top_improvement_words, &new_record.improvements);
    }

    snapshot.last_updated = Utc::now();
    snapshot
}

/// Mean of every present score in the log, rounded half away from zero;
/// 0 when no scored records exist
pub fn average_score(log: &FeedbackLog) -> i64 {
    let mut sum = 0i64;
    let mut count = 0u64;
    for score in log.feedback.iter().filter_map(|r| r.resilience_score) {
        sum += score;
        count += 1;
    }

    if count == 0 {
        0
    } else {
        (sum as f64 / count as f64).round() as i64
    }
}

/// Lowercased tokens from `text` that qualify for the improvement word set
pub fn qualifying_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
        .filter(|word| !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Union new qualifying tokens into the ordered set, keeping first-seen
/// order, then truncate to the cap
fn merge_improvement_words(words: &mut Vec<String>, text: &str) {
    for token in qualifying_words(text) {
        if !words.iter().any(|existing| *existing == token) {
            words.push(token);
        }
    }
    words.truncate(MAX_TOP_WORDS);
}
