//! Request types for the derivation API.
//!
//! Each endpoint receives the records it derives from in the request body;
//! the API holds no records of its own.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::{AttendanceAction, ProjectFilter};
use crate::models::{AttendanceRecord, LeaveRequest, PayrollRecord, Project};

/// Request body for `POST /attendance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRequest {
    /// The attendance history.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// The current calendar day.
    pub today: NaiveDate,
}

/// Request body for `POST /attendance/transition`.
///
/// The day being changed is the calendar day of `at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceTransitionRequest {
    /// The attendance history.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// The action being taken.
    pub action: AttendanceAction,
    /// When the action was taken.
    pub at: DateTime<Utc>,
}

/// Request body for `POST /leaves/days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDaysRequest {
    /// First day, as entered.
    #[serde(default)]
    pub from: String,
    /// Last day, as entered.
    #[serde(default)]
    pub to: String,
}

/// Request body for `POST /payrolls/filter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollFilterRequest {
    /// The payrolls to filter.
    #[serde(default)]
    pub records: Vec<PayrollRecord>,
    /// Month-name search text; empty matches every month.
    #[serde(default)]
    pub month_query: String,
    /// `true` for the paid tab, `false` for the unpaid tab.
    #[serde(default)]
    pub paid_only: bool,
}

/// Request body for `POST /projects/filter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFilterRequest {
    /// The projects to filter.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// The selected tab.
    #[serde(default)]
    pub filter: ProjectFilter,
}

/// Request body for `POST /dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// The attendance history; `null` when it could not be loaded.
    #[serde(default)]
    pub attendance: Option<Vec<AttendanceRecord>>,
    /// The leave requests.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// The assigned projects.
    #[serde(default)]
    pub projects: Vec<Project>,
}
