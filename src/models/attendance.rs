//! Attendance record model and the derived status enum.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Tone;
use super::calendar::{calendar_date, null_as_default};

/// The status of a working day, derived from its check-in/check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No check-in was recorded.
    Absent,
    /// Checked in but not yet out.
    Working,
    /// Both check-in and check-out recorded.
    Completed,
}

impl AttendanceStatus {
    /// Parses a backend status label (`"working"`, `"Completed"`, ...).
    ///
    /// Returns `None` for labels the engine does not know.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "absent" => Some(Self::Absent),
            "working" => Some(Self::Working),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The capitalized label shown to the employee.
    pub fn label(self) -> &'static str {
        match self {
            Self::Absent => "Absent",
            Self::Working => "Working",
            Self::Completed => "Completed",
        }
    }

    /// The badge tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            Self::Absent => Tone::Danger,
            Self::Working => Tone::Info,
            Self::Completed => Tone::Success,
        }
    }
}

/// One employee's attendance for one calendar day, as served by the backend.
///
/// Timestamps are optional because a record exists from the moment of
/// check-in and the check-out is only filled later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Backend identifier, if the record has been persisted.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The calendar day this record covers.
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    /// When the employee checked in.
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    /// When the employee checked out.
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    /// Minutes worked as aggregated by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub working_minutes: u32,
    /// The status label the backend attached, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AttendanceRecord {
    /// Creates a fresh record for `date` with no timestamps.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            check_in: None,
            check_out: None,
            working_minutes: 0,
            status: None,
        }
    }

    /// Returns true if both check-in and check-out are present.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// The status label the backend reported, if it is one the engine knows.
    pub fn reported_status(&self) -> Option<AttendanceStatus> {
        self.status.as_deref().and_then(AttendanceStatus::from_label)
    }
}
