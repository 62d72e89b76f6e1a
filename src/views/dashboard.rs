//! Dashboard summary.

use serde::{Deserialize, Serialize};

use crate::calculation::{ProjectFilter, attendance_percentage};
use crate::config::DisplayConfig;
use crate::models::{AttendanceRecord, LeaveRequest, Project};

use super::leave::{LeaveRow, leave_rows};
use super::project::{ProjectRow, project_rows};

/// The dashboard cards and tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Attendance percentage; `None` when the history could not be loaded.
    pub attendance_percentage: Option<u8>,
    /// The attendance card text, e.g. `"50%"` or `"--%"`.
    pub attendance_label: String,
    /// Number of leave requests on record.
    pub leaves_taken: usize,
    /// Number of assigned projects.
    pub projects_assigned: usize,
    /// Leave rows.
    pub leaves: Vec<LeaveRow>,
    /// Project rows.
    pub projects: Vec<ProjectRow>,
}

/// Builds the dashboard.
///
/// `attendance` is `None` when the history was unavailable, which is shown
/// differently from an empty history (0%).
pub fn dashboard_summary(
    attendance: Option<&[AttendanceRecord]>,
    leaves: &[LeaveRequest],
    projects: &[Project],
    config: &DisplayConfig,
) -> DashboardSummary {
    let percentage = attendance.map(attendance_percentage);
    let attendance_label = match percentage {
        Some(value) => format!("{}%", value),
        None => config.placeholders.percentage.clone(),
    };

    DashboardSummary {
        attendance_percentage: percentage,
        attendance_label,
        leaves_taken: leaves.len(),
        projects_assigned: projects.len(),
        leaves: leave_rows(leaves, config),
        projects: project_rows(projects, ProjectFilter::All, config),
    }
}
