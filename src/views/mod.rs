//! Display-ready view models for each dashboard page.
//!
//! Views combine the wire models with the derivations in
//! [`crate::calculation`] and the placeholders and currency from
//! [`crate::config::DisplayConfig`].

mod attendance;
mod dashboard;
mod leave;
mod payroll;
mod project;

pub use attendance::{
    AttendanceRow, AttendanceView, TodayCard, attendance_row, attendance_view, today_card,
};
pub use dashboard::{DashboardSummary, dashboard_summary};
pub use leave::{LeaveRow, leave_row, leave_rows};
pub use payroll::{PayrollRow, payroll_rows};
pub use project::{ProjectRow, project_row, project_rows};
