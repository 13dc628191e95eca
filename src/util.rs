//! Utility functions for hubfolio

use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp from the GitHub API.
///
/// # Arguments
///
/// * `timestamp`: Timestamp string like "2024-03-01T12:00:00Z"
///
/// # Returns
///
/// Parsed UTC time, or None for malformed input
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Formats an API timestamp as "Month Year" for repository cards.
///
/// Malformed timestamps yield an empty string rather than an error;
/// the card simply omits its updated line.
pub fn format_month_year(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|t| t.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// Formats an API timestamp as human readable relative time.
///
/// Produces strings like "5 min ago" or "2 weeks ago". Future or
/// malformed timestamps are treated as "just now".
///
/// # Arguments
///
/// * `timestamp`: RFC 3339 timestamp string
pub fn format_relative_time(timestamp: &str) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return "just now".to_string();
    };

    let secs = (Utc::now() - then).num_seconds().max(0) as u64;
    let minutes = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86400;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Formats byte count as human readable file size
///
/// Converts byte count to appropriate unit (bytes, KB, MB) with two
/// decimal places for KB and MB. Uses binary prefixes.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
