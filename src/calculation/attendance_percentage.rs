//! Attendance percentage aggregation.

use crate::models::AttendanceRecord;

/// Shown in place of a percentage that cannot be derived.
pub const PERCENTAGE_PLACEHOLDER: &str = "--%";

/// The share of records with both a check-in and a check-out, as a whole
/// percentage rounded half up.
///
/// An empty history is 0%.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::attendance_percentage;
///
/// assert_eq!(attendance_percentage(&[]), 0);
/// ```
pub fn attendance_percentage(records: &[AttendanceRecord]) -> u8 {
    let total = records.len() as u64;
    if total == 0 {
        return 0;
    }

    let complete = records.iter().filter(|r| r.is_complete()).count() as u64;
    // round(100 * complete / total) in integer arithmetic, halves going up
    let percentage = (200 * complete + total) / (2 * total);
    percentage as u8
}
