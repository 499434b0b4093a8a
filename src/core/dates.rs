use chrono::{DateTime, NaiveDateTime};

/// Parse an RFC 3339 timestamp or a naive `2023-05-20T15:45:00`.
pub fn parse(date: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").ok()
}

/// `May 20`, used in the message list.
pub fn short(date: &str) -> String {
    format_or_raw(date, "%b %-d")
}

/// `May 20, 2023 3:45 PM`, used in the reading pane.
pub fn long(date: &str) -> String {
    format_or_raw(date, "%b %-d, %Y %-I:%M %p")
}

fn format_or_raw(date: &str, fmt: &str) -> String {
    match parse(date) {
        Some(dt) => dt.format(fmt).to_string(),
        None => date.to_string(),
    }
}
