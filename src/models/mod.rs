//! Wire models for the records served by the HR backend.
//!
//! Every type here is a read-only snapshot. Field names follow the backend's
//! camelCase JSON, and optional fields tolerate being null or absent.

mod attendance;
mod calendar;
mod leave;
mod payroll;
mod project;
mod tone;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use calendar::parse_calendar_date;
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{PaymentStatus, PayrollRecord};
pub use project::{Project, ProjectStatus, TeamMember};
pub use tone::Tone;
