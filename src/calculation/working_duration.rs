//! Working duration derivation.
//!
//! Durations are plain wall-clock differences between two instants, split
//! into whole hours and remaining minutes by floor division.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown wherever a duration cannot be derived.
pub const DURATION_PLACEHOLDER: &str = "—";

/// An elapsed working time, split into hours and minutes.
///
/// Formats as `"<H>h <M>m"`.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::WorkingDuration;
///
/// let duration = WorkingDuration::from_minutes(510);
/// assert_eq!(duration.hours, 8);
/// assert_eq!(duration.minutes, 30);
/// assert_eq!(duration.to_string(), "8h 30m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDuration {
    /// Whole hours.
    pub hours: u64,
    /// Remaining minutes, always below 60.
    pub minutes: u64,
}

impl WorkingDuration {
    /// Splits a minute count into hours and minutes.
    pub fn from_minutes(total_minutes: u64) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }

    /// The total number of minutes represented.
    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for WorkingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Derives the working duration between a check-in and a check-out.
///
/// Partial minutes are dropped. Returns `None` when either instant is
/// missing or when the check-out precedes the check-in.
pub fn working_duration(
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
) -> Option<WorkingDuration> {
    let (check_in, check_out) = (check_in?, check_out?);
    if check_out < check_in {
        return None;
    }
    let elapsed = (check_out - check_in).num_minutes();
    u64::try_from(elapsed).ok().map(WorkingDuration::from_minutes)
}

/// Formats the working duration between two instants as `"<H>h <M>m"`.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::format_working_duration;
/// use chrono::{TimeZone, Utc};
///
/// let check_in = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
/// let check_out = Utc.with_ymd_and_hms(2024, 3, 5, 17, 45, 59).unwrap();
/// assert_eq!(format_working_duration(Some(check_in), Some(check_out)), "8h 45m");
/// assert_eq!(format_working_duration(Some(check_in), None), "—");
/// ```
pub fn format_working_duration(
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
) -> String {
    format_working_duration_or(check_in, check_out, DURATION_PLACEHOLDER)
}

/// Like [`format_working_duration`], with a caller-chosen placeholder.
pub fn format_working_duration_or(
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
    placeholder: &str,
) -> String {
    working_duration(check_in, check_out)
        .map(|duration| duration.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Formats a stored minute total, as kept on historical records.
///
/// Returns the placeholder for zero minutes.
pub fn format_working_duration_from_minutes(total_minutes: u32) -> String {
    format_minutes_or(total_minutes, DURATION_PLACEHOLDER)
}

/// Like [`format_working_duration_from_minutes`], with a caller-chosen
/// placeholder.
pub fn format_minutes_or(total_minutes: u32, placeholder: &str) -> String {
    if total_minutes == 0 {
        return placeholder.to_string();
    }
    WorkingDuration::from_minutes(u64::from(total_minutes)).to_string()
}
