//! Time-of-day safety classification.
//!
//! The rule ladder uses overlapping hour ranges on purpose: hour 6 belongs to
//! the CAUTION band because rule 2 is checked before rule 3. Keep the rule
//! order exactly as written; the bands are not disjoint.

use chrono::{DateTime, Local, Timelike};

use crate::models::SafetyStatusResponse;

/// Display format for user-facing timestamps, e.g. "09:41 PM, August 06, 2026".
pub const TIMESTAMP_FORMAT: &str = "%I:%M %p, %B %d, %Y";

pub fn format_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Classifies an hour of day (0-23) into a safety band.
/// Returns (status label, color tag, advisory text). First matching rule wins.
pub fn classify_hour(hour: u32) -> (&'static str, &'static str, &'static str) {
    if hour >= 22 || hour <= 5 {
        (
            "🔴 HIGH ALERT",
            "red",
            "Very late/early hours - Avoid travel if possible",
        )
    } else if hour >= 20 || hour <= 6 {
        (
            "🟠 CAUTION",
            "orange",
            "Night time - Use well-lit roads, inform someone",
        )
    } else if hour >= 18 {
        ("🟡 MODERATE", "yellow", "Evening - Stay on busy streets")
    } else {
        ("🟢 SAFE", "green", "Daytime - Generally safer, stay alert")
    }
}

/// Computes the safety status for the given instant. The clock is passed in
/// by the caller so the classifier stays a pure function.
pub fn safety_status_at(now: DateTime<Local>) -> SafetyStatusResponse {
    let (status, color, advice) = classify_hour(now.hour());
    SafetyStatusResponse {
        status: status.to_string(),
        color: color.to_string(),
        advice: advice.to_string(),
        timestamp: format_timestamp(now),
    }
}
