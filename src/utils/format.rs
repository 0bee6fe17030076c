use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a server timestamp. The backend emits RFC 3339 for most
/// endpoints and `YYYY-MM-DD HH:MM:SS` for older rows.
fn parse_time(time: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(time) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

/// Format a timestamp as an absolute date ("Mar 01, 2024").
/// Unparseable input falls back to its leading date portion, then to itself.
pub fn format_date(time: &str) -> String {
    if let Some(dt) = parse_time(time) {
        dt.format("%b %d, %Y").to_string()
    } else if time.len() >= 10 {
        time.chars().take(10).collect()
    } else {
        time.to_string()
    }
}

/// Format a timestamp relative to now ("3 hours ago").
pub fn format_relative_time(time: &str) -> String {
    match parse_time(time) {
        Some(dt) => relative_from(dt, Utc::now()),
        None => time.to_string(),
    }
}

/// Threshold in days after which dates show as "Mar 01" instead of
/// "N days ago".
const RELATIVE_DAYS_CUTOFF: i64 = 10;

/// Days treated as one month for the final bucket.
const DAYS_PER_MONTH: i64 = 30;

fn relative_from(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - target;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        // Covers clock skew too: anything in the future reads as fresh.
        "just now".to_string()
    } else if hours < 1 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days <= RELATIVE_DAYS_CUTOFF {
        plural(days, "day")
    } else if days < DAYS_PER_MONTH {
        target.format("%b %d").to_string()
    } else {
        target.format("%b %Y").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
