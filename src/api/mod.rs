//! HTTP API module for the derivation engine.
//!
//! This module exposes the statuses, durations, day counts and display rows
//! of [`crate::views`] as JSON endpoints. Callers post the records they hold
//! and receive the derived values back.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceSummaryRequest, AttendanceTransitionRequest, DashboardRequest, LeaveDaysRequest,
    PayrollFilterRequest, ProjectFilterRequest,
};
pub use response::{ApiError, ApiErrorResponse, AttendanceTransitionResponse, LeaveDaysResponse};
pub use state::AppState;
