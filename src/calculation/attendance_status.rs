//! Attendance status classification and the per-day check-in state machine.
//!
//! A working day moves `NoRecord -> CheckedIn -> CheckedOut` and never
//! leaves `CheckedOut`. Every other move is rejected with an error the
//! caller must surface.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

use super::working_duration::working_duration;

/// Classifies a record from its check-in/check-out pair.
///
/// A record without a check-in is `Absent` even if a check-out is present.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::classify_status;
/// use ess_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let mut record = AttendanceRecord::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// assert_eq!(classify_status(&record), AttendanceStatus::Absent);
///
/// record.check_in = Some(Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap());
/// assert_eq!(classify_status(&record), AttendanceStatus::Working);
/// ```
pub fn classify_status(record: &AttendanceRecord) -> AttendanceStatus {
    match (record.check_in, record.check_out) {
        (None, _) => AttendanceStatus::Absent,
        (Some(_), None) => AttendanceStatus::Working,
        (Some(_), Some(_)) => AttendanceStatus::Completed,
    }
}

/// An attendance action requested by the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceAction {
    /// Start the working day.
    CheckIn,
    /// End the working day.
    CheckOut,
}

impl AttendanceAction {
    fn describe(self) -> &'static str {
        match self {
            Self::CheckIn => "check in",
            Self::CheckOut => "check out",
        }
    }
}

/// The attendance state of one employee for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceDay {
    /// Nothing recorded yet.
    NoRecord,
    /// Checked in, not yet out.
    CheckedIn {
        /// When the employee checked in.
        check_in: DateTime<Utc>,
    },
    /// Checked in and out; terminal for the day.
    CheckedOut {
        /// When the employee checked in.
        check_in: DateTime<Utc>,
        /// When the employee checked out.
        check_out: DateTime<Utc>,
    },
}

impl AttendanceDay {
    /// Rebuilds the state from an existing record, if any.
    ///
    /// A record carrying a check-out but no check-in cannot be continued and
    /// is treated as `NoRecord`, matching [`classify_status`].
    pub fn from_record(record: Option<&AttendanceRecord>) -> Self {
        match record.map(|r| (r.check_in, r.check_out)) {
            Some((Some(check_in), None)) => Self::CheckedIn { check_in },
            Some((Some(check_in), Some(check_out))) => Self::CheckedOut {
                check_in,
                check_out,
            },
            _ => Self::NoRecord,
        }
    }

    /// Finds the record for `date` in a history and rebuilds its state.
    pub fn for_date(records: &[AttendanceRecord], date: NaiveDate) -> Self {
        Self::from_record(records.iter().find(|r| r.date == date))
    }

    /// The status shown for this state.
    pub fn status(&self) -> AttendanceStatus {
        match self {
            Self::NoRecord => AttendanceStatus::Absent,
            Self::CheckedIn { .. } => AttendanceStatus::Working,
            Self::CheckedOut { .. } => AttendanceStatus::Completed,
        }
    }

    /// Checks in at `now`. Only permitted from `NoRecord`.
    pub fn check_in(self, now: DateTime<Utc>) -> EngineResult<Self> {
        match self {
            Self::NoRecord => Ok(Self::CheckedIn { check_in: now }),
            other => Err(other.reject(AttendanceAction::CheckIn)),
        }
    }

    /// Checks out at `now`. Only permitted from `CheckedIn`, and `now` must
    /// not precede the check-in.
    pub fn check_out(self, now: DateTime<Utc>) -> EngineResult<Self> {
        match self {
            Self::NoRecord => Err(EngineError::MissingRequiredField {
                field: "checkIn".to_string(),
            }),
            Self::CheckedIn { check_in } if now < check_in => Err(EngineError::InvalidTimeRange {
                check_in: check_in.to_rfc3339(),
                check_out: now.to_rfc3339(),
            }),
            Self::CheckedIn { check_in } => Ok(Self::CheckedOut {
                check_in,
                check_out: now,
            }),
            other @ Self::CheckedOut { .. } => Err(other.reject(AttendanceAction::CheckOut)),
        }
    }

    /// Applies `action` at `now`.
    pub fn apply(self, action: AttendanceAction, now: DateTime<Utc>) -> EngineResult<Self> {
        match action {
            AttendanceAction::CheckIn => self.check_in(now),
            AttendanceAction::CheckOut => self.check_out(now),
        }
    }

    /// Materializes the state as a record for `date`.
    ///
    /// Returns `None` for `NoRecord`. `working_minutes` is the floored
    /// elapsed time once checked out.
    pub fn to_record(&self, date: NaiveDate) -> Option<AttendanceRecord> {
        let (check_in, check_out) = match *self {
            Self::NoRecord => return None,
            Self::CheckedIn { check_in } => (check_in, None),
            Self::CheckedOut {
                check_in,
                check_out,
            } => (check_in, Some(check_out)),
        };

        let working_minutes = working_duration(Some(check_in), check_out)
            .and_then(|d| u32::try_from(d.total_minutes()).ok())
            .unwrap_or(0);

        Some(AttendanceRecord {
            id: None,
            date,
            check_in: Some(check_in),
            check_out,
            working_minutes,
            status: Some(self.status().label().to_ascii_lowercase()),
        })
    }

    fn state_name(&self) -> &'static str {
        match self {
            Self::NoRecord => "no record exists",
            Self::CheckedIn { .. } => "checked in",
            Self::CheckedOut { .. } => "checked out",
        }
    }

    fn reject(&self, action: AttendanceAction) -> EngineError {
        EngineError::InvalidTransition {
            state: self.state_name(),
            action: action.describe(),
        }
    }
}

/// Puts an updated record at the head of a history, dropping any stale
/// entry for the same date. The order of the remaining entries is kept.
pub fn merge_record(history: &[AttendanceRecord], record: AttendanceRecord) -> Vec<AttendanceRecord> {
    let date = record.date;
    std::iter::once(record)
        .chain(history.iter().filter(|r| r.date != date).cloned())
        .collect()
}
