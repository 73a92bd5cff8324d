#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render the date portion of an ISO-8601 timestamp, or `"N/A"` when the
/// backend did not send one. Timestamps arrive as opaque strings like
/// `2024-03-01T12:34:56.000Z`; only the calendar date is shown.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        Some(ts) if ts.len() >= 10 => ts.get(..10).unwrap_or(ts).to_owned(),
        Some(ts) if !ts.is_empty() => ts.to_owned(),
        _ => "N/A".to_owned(),
    }
}

/// Render an optional string field, falling back to `"N/A"`.
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "N/A".to_owned(),
    }
}
