//! Leave list view models.

use serde::{Deserialize, Serialize};

use crate::calculation::{format_optional_date, leave_days_between};
use crate::config::DisplayConfig;
use crate::models::{LeaveRequest, LeaveStatus, Tone};

/// One row of the leave table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRow {
    /// Leave category label.
    pub leave_type: String,
    /// First day, as `dd/mm/yyyy`.
    pub from: String,
    /// Last day, as `dd/mm/yyyy`.
    pub to: String,
    /// Day count: the stored value, or derived from the range when absent.
    pub days: Option<u32>,
    /// Reason.
    pub description: String,
    /// Approval status.
    pub status: LeaveStatus,
    /// Label for the status badge.
    pub status_label: String,
    /// Tone for the status badge.
    pub tone: Tone,
}

/// Builds one leave row.
///
/// When the backend did not store a day count, it is derived from the
/// range; an unusable range leaves it empty.
pub fn leave_row(leave: &LeaveRequest, config: &DisplayConfig) -> LeaveRow {
    let days = leave.days.or_else(|| match (leave.from, leave.to) {
        (Some(from), Some(to)) => leave_days_between(from, to).ok(),
        _ => None,
    });

    LeaveRow {
        leave_type: leave.leave_type.label().to_string(),
        from: format_optional_date(leave.from, &config.placeholders.date),
        to: format_optional_date(leave.to, &config.placeholders.date),
        days,
        description: leave.description.clone(),
        status: leave.status,
        status_label: leave.status.label().to_string(),
        tone: leave.status.tone(),
    }
}

/// Builds the leave table, keeping backend order.
pub fn leave_rows(leaves: &[LeaveRequest], config: &DisplayConfig) -> Vec<LeaveRow> {
    leaves.iter().map(|leave| leave_row(leave, config)).collect()
}
