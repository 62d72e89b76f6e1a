//! Derivation logic for the self-service dashboard.
//!
//! This module contains the pure functions that turn backend records into
//! display values: attendance status classification and the check-in state
//! machine, working duration formatting, leave day counting and application
//! validation, payroll filtering and amount formatting, attendance
//! percentage, display dates, and project filtering.

mod attendance_percentage;
mod attendance_status;
mod date_format;
mod leave_days;
mod payroll_filter;
mod project_filter;
mod working_duration;

pub use attendance_percentage::{PERCENTAGE_PLACEHOLDER, attendance_percentage};
pub use attendance_status::{AttendanceAction, AttendanceDay, classify_status, merge_record};
pub use date_format::{DATE_PLACEHOLDER, format_date, format_display_date, format_optional_date};
pub use leave_days::{
    BLANK_DESCRIPTION, LeaveApplication, LeaveSubmission, compute_leave_days, leave_days_between,
};
pub use payroll_filter::{filter_payrolls, format_amount, month_name, payroll_period_label};
pub use project_filter::{ProjectFilter, filter_projects, team_names};
pub use working_duration::{
    DURATION_PLACEHOLDER, WorkingDuration, format_minutes_or, format_working_duration,
    format_working_duration_from_minutes, format_working_duration_or, working_duration,
};
