//! Leave day counting and leave application validation.
//!
//! Leave ranges are inclusive on both ends, so a same-day request is one
//! day. A range that cannot be counted blocks submission; it is never
//! clamped to a default.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveType, parse_calendar_date};

/// Description sent when the employee leaves the reason blank.
pub const BLANK_DESCRIPTION: &str = "-";

/// Counts the days in an inclusive leave range.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::leave_days_between;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(leave_days_between(from, to).unwrap(), 3); // leap year
/// ```
pub fn leave_days_between(from: NaiveDate, to: NaiveDate) -> EngineResult<u32> {
    let days = (to - from).num_days() + 1;
    u32::try_from(days)
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| EngineError::InvalidDateRange {
            from: from.to_string(),
            to: to.to_string(),
            message: "end date is before start date".to_string(),
        })
}

/// Counts the days in an inclusive leave range given as raw form input.
///
/// Blank input is a missing field; unparseable or reversed input is an
/// invalid range.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::compute_leave_days;
///
/// assert_eq!(compute_leave_days("2024-03-05", "2024-03-05").unwrap(), 1);
/// assert_eq!(compute_leave_days("2024-03-05", "2024-03-07").unwrap(), 3);
/// assert!(compute_leave_days("2024-03-07", "2024-03-05").is_err());
/// ```
pub fn compute_leave_days(from: &str, to: &str) -> EngineResult<u32> {
    parse_range(from, to).map(|(_, _, days)| days)
}

/// Parses both ends of a raw range and counts its days.
fn parse_range(from: &str, to: &str) -> EngineResult<(NaiveDate, NaiveDate, u32)> {
    let from_date = require_date("from", from, to)?;
    let to_date = require_date("to", to, from)?;
    let days = leave_days_between(from_date, to_date).map_err(|_| EngineError::InvalidDateRange {
        from: from.to_string(),
        to: to.to_string(),
        message: "end date is before start date".to_string(),
    })?;
    Ok((from_date, to_date, days))
}

fn require_date(field: &str, raw: &str, other: &str) -> EngineResult<NaiveDate> {
    if raw.trim().is_empty() {
        return Err(EngineError::MissingRequiredField {
            field: field.to_string(),
        });
    }

    parse_calendar_date(raw).ok_or_else(|| {
        let (from, to) = if field == "from" { (raw, other) } else { (other, raw) };
        EngineError::InvalidDateRange {
            from: from.to_string(),
            to: to.to_string(),
            message: format!("'{}' is not a valid date", raw),
        }
    })
}

/// A leave request as typed into the application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// The leave category.
    #[serde(rename = "type", default)]
    pub leave_type: LeaveType,
    /// First day, as entered.
    #[serde(default)]
    pub from: String,
    /// Last day, as entered.
    #[serde(default)]
    pub to: String,
    /// Day count the form currently shows, if any.
    #[serde(default)]
    pub days: Option<u32>,
    /// Free-text reason.
    #[serde(default)]
    pub description: String,
}

/// A validated leave request, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSubmission {
    /// The leave category.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// First day (inclusive).
    pub from: NaiveDate,
    /// Last day (inclusive).
    pub to: NaiveDate,
    /// Inclusive day count.
    pub days: u32,
    /// Reason, `"-"` when left blank.
    pub description: String,
}

impl LeaveApplication {
    /// Validates the form and derives the day count.
    ///
    /// The day count is always recomputed from the range, so a stale value
    /// left in the form cannot be submitted.
    pub fn validate(&self) -> EngineResult<LeaveSubmission> {
        let (from, to, days) = parse_range(&self.from, &self.to)?;

        let description = match self.description.trim() {
            "" => BLANK_DESCRIPTION.to_string(),
            text => text.to_string(),
        };

        Ok(LeaveSubmission {
            leave_type: self.leave_type,
            from,
            to,
            days,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn application(from: &str, to: &str) -> LeaveApplication {
        LeaveApplication {
            leave_type: LeaveType::Annual,
            from: from.to_string(),
            to: to.to_string(),
            days: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_same_day_is_one_day() {
        assert_eq!(compute_leave_days("2024-03-05", "2024-03-05").unwrap(), 1);
    }

    #[test]
    fn test_range_is_inclusive() {
        assert_eq!(compute_leave_days("2024-03-05", "2024-03-11").unwrap(), 7);
    }

    #[test]
    fn test_range_across_month_end() {
        assert_eq!(compute_leave_days("2023-12-30", "2024-01-02").unwrap(), 4);
    }

    #[test]
    fn test_timestamps_count_by_calendar_day() {
        assert_eq!(
            compute_leave_days("2024-03-05T00:00:00.000Z", "2024-03-06T00:00:00.000Z").unwrap(),
            2
        );
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = compute_leave_days("2024-03-07", "2024-03-05").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDateRange {
                from: "2024-03-07".to_string(),
                to: "2024-03-05".to_string(),
                message: "end date is before start date".to_string(),
            }
        );
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let err = compute_leave_days("2024-03-05", "next week").unwrap_err();
        match err {
            EngineError::InvalidDateRange { from, to, message } => {
                assert_eq!(from, "2024-03-05");
                assert_eq!(to, "next week");
                assert!(message.contains("next week"));
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_date_is_missing_field() {
        assert_eq!(
            compute_leave_days("", "2024-03-05").unwrap_err(),
            EngineError::MissingRequiredField {
                field: "from".to_string()
            }
        );
        assert_eq!(
            compute_leave_days("2024-03-05", "  ").unwrap_err(),
            EngineError::MissingRequiredField {
                field: "to".to_string()
            }
        );
    }

    #[test]
    fn test_validate_recomputes_stale_days() {
        let mut form = application("2024-03-05", "2024-03-06");
        form.days = Some(10);

        let submission = form.validate().unwrap();
        assert_eq!(submission.days, 2);
        assert_eq!(submission.from, date("2024-03-05"));
        assert_eq!(submission.to, date("2024-03-06"));
    }

    #[test]
    fn test_validate_fills_blank_description() {
        let submission = application("2024-03-05", "2024-03-05").validate().unwrap();
        assert_eq!(submission.description, "-");

        let mut form = application("2024-03-05", "2024-03-05");
        form.description = "  Fever ".to_string();
        assert_eq!(form.validate().unwrap().description, "Fever");
    }

    #[test]
    fn test_validate_blocks_invalid_range() {
        assert!(application("2024-03-06", "2024-03-05").validate().is_err());
        assert!(application("", "").validate().is_err());
    }

    #[test]
    fn test_application_deserializes_from_form_json() {
        let json = r#"{ "type": "Sick Leave", "from": "2024-03-05", "to": "2024-03-05", "days": null }"#;
        let form: LeaveApplication = serde_json::from_str(json).unwrap();
        assert_eq!(form.leave_type, LeaveType::Sick);
        assert_eq!(form.days, None);
    }

    proptest! {
        #[test]
        fn prop_day_count_matches_offset(start in 0i64..20_000, span in 0i64..400) {
            let from = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(start);
            let to = from + chrono::Duration::days(span);
            prop_assert_eq!(leave_days_between(from, to).unwrap() as i64, span + 1);
        }

        #[test]
        fn prop_reversed_always_rejected(start in 0i64..20_000, back in 1i64..400) {
            let from = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(start);
            let to = from - chrono::Duration::days(back);
            prop_assert!(leave_days_between(from, to).is_err());
        }
    }
}
