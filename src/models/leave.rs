//! Leave request model and its enumerations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Tone;
use super::calendar::{lenient_date, null_as_default};

/// The category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveType {
    /// Sick leave.
    #[default]
    #[serde(rename = "Sick Leave")]
    Sick,
    /// Casual leave.
    #[serde(rename = "Casual Leave")]
    Casual,
    /// Annual leave.
    #[serde(rename = "Annual Leave")]
    Annual,
    /// Unpaid leave.
    #[serde(rename = "Unpaid Leave")]
    Unpaid,
    /// Any category the engine does not know.
    #[serde(other)]
    Other,
}

impl LeaveType {
    /// The label shown to the employee.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sick => "Sick Leave",
            Self::Casual => "Casual Leave",
            Self::Annual => "Annual Leave",
            Self::Unpaid => "Unpaid Leave",
            Self::Other => "Other",
        }
    }
}

/// Where a leave request is in its approval lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Submitted, awaiting a decision.
    #[default]
    Pending,
    /// Approved by the approver.
    Approved,
    /// Rejected by the approver.
    Rejected,
    /// A label the engine does not recognize.
    #[serde(other)]
    Unrecognized,
}

impl LeaveStatus {
    /// The label shown on the badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Unrecognized => "Unknown",
        }
    }

    /// The badge tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            Self::Pending => Tone::Warning,
            Self::Approved => Tone::Success,
            Self::Rejected => Tone::Danger,
            Self::Unrecognized => Tone::Neutral,
        }
    }
}

/// A leave request as listed by the backend.
///
/// The dates are lenient: a missing or malformed date is kept as `None` so
/// one bad row never prevents the rest of the list from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Backend identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The leave category.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    #[serde(default, with = "lenient_date")]
    pub from: Option<NaiveDate>,
    /// Last day of leave (inclusive).
    #[serde(default, with = "lenient_date")]
    pub to: Option<NaiveDate>,
    /// Number of days, as stored by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Free-text reason.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Approval status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: LeaveStatus,
}
