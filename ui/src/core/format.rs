//! Formatting helpers for presenting report values.

use api::model::parse_timestamp;
use time::macros::format_description;

pub const NOT_AVAILABLE: &str = "N/A";

/// Ratio in `[0, 1]` as a percentage with one decimal.
pub fn format_percent(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.1}%", ratio * 100.0)
    } else {
        "—".to_string()
    }
}

/// Already-scaled percentage value (e.g. a share of 37.5).
pub fn format_share(percent: f64) -> String {
    format!("{percent:.1}%")
}

pub fn format_confidence(confidence: Option<f64>) -> String {
    confidence
        .map(format_percent)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_fields(count: Option<u32>) -> String {
    count
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_kb(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// `2024-05-01 · 10:00 UTC`, or the raw string when it isn't a timestamp.
pub fn format_timestamp(raw: &str) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let date = ts.format(&format_description!("[year]-[month]-[day]"));
    let clock = ts.format(&format_description!("[hour]:[minute]"));
    match (date, clock) {
        (Ok(date), Ok(clock)) => format!("{date} · {clock} UTC"),
        _ => raw.to_string(),
    }
}

/// Date only, for compact tables.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|ts| ts.format(&format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| raw.to_string())
}
