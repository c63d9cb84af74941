//! Terminal rendering helpers for the report subcommands

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Round to a whole number and group thousands, e.g. `1234567.4` → `1,234,567`.
pub fn format_number(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

/// `YYYY-MM-DD` → `Feb 03`. Unparseable dates pass through unchanged.
pub fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Bar length as a percentage of the row maximum, floored at 6 so small
/// values stay visible. `max` is floored at 1 to avoid dividing by zero.
pub fn bar_percent(value: f64, max: f64) -> u32 {
    let max = max.max(1.0);
    ((value / max) * 100.0).round().max(6.0) as u32
}

/// Proportional text bar, `width` characters at 100%.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = (bar_percent(value, max) as usize * width / 100).max(1);
    "█".repeat(filled.min(width))
}
