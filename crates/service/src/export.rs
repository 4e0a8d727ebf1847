//! CSV export of the feedback log

use chrono::SecondsFormat;

use feedback_hub_types::FeedbackRecord;

const CSV_HEADER: &str = "id,name,email,experience,resilienceScore,feedbackText,improvements,submittedAt";

/// Render records as CSV, one row per record in log order
///
/// Free-text columns are always quoted with embedded quotes doubled; absent
/// optionals render as empty strings.
pub fn to_csv(records: &[FeedbackRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    let rows: Vec<String> = records.iter().map(csv_row).collect();
    out.push_str(&rows.join("\n"));
    out
}

fn csv_row(record: &FeedbackRecord) -> String {
    [
        record.id.clone(),
        quote(&record.name),
        quote(record.email.as_deref().unwrap_or("")),
        record.experience.as_str().to_string(),
        record
            .resilience_score
            .map(|s| s.to_string())
            .unwrap_or_default(),
        quote(&record.feedback),
        quote(&record.improvements),
        record
            .submitted_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    ]
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
