//! Display date formatting.
//!
//! Dates are always shown day-first as `dd/mm/yyyy`, whatever the locale.
//! The formatting is lossy and is never parsed back.

use chrono::{Datelike, NaiveDate};

use crate::models::parse_calendar_date;

/// Shown wherever a date cannot be derived.
pub const DATE_PLACEHOLDER: &str = "--";

/// Formats a calendar day as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Formats a raw wire date as `dd/mm/yyyy`.
///
/// Accepts the same inputs as [`parse_calendar_date`]; anything else,
/// including `None`, yields the placeholder.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::format_display_date;
///
/// assert_eq!(format_display_date(Some("2024-03-05")), "05/03/2024");
/// assert_eq!(format_display_date(Some("garbage")), "--");
/// assert_eq!(format_display_date(None), "--");
/// ```
pub fn format_display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_calendar_date)
        .map(format_date)
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

/// Formats an optional typed date, falling back to `placeholder`.
pub fn format_optional_date(date: Option<NaiveDate>, placeholder: &str) -> String {
    date.map(format_date)
        .unwrap_or_else(|| placeholder.to_string())
}
