//! Human-readable formatting of elapsed durations.

/// Format a millisecond duration as a compact elapsed-time string,
/// e.g. `"1h 30m 5s"`.
///
/// Negative durations format as an empty string. Units decompose by
/// integer division and only nonzero units appear, so anything under a
/// second also formats as an empty string.
pub fn format_duration(ms: i64) -> String {
    if ms < 0 {
        return String::new();
    }

    let total_secs = ms / 1000;
    let days = total_secs / 86_400;
    let hours = total_secs / 3_600 % 24;
    let minutes = total_secs / 60 % 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Format an optional duration, rendering absent as an empty string.
pub fn format_duration_opt(ms: Option<i64>) -> String {
    ms.map(format_duration).unwrap_or_default()
}
