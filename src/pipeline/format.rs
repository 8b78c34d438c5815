use chrono::NaiveTime;

/// Renders a backend time as `HH:MM`, the format time inputs expect.
///
/// The backend stores `HH:MM:SS`; values in any other format are returned untouched.
pub fn format_time(raw: &str) -> String {
    let raw = raw.trim();

    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Table text for an optional attribute
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "N/A",
    }
}
