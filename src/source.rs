//! Loading records from the HR backend.
//!
//! The engine never talks to the backend itself. Callers supply a
//! [`RecordSource`] and the [`Credentials`] of the request being served;
//! nothing is held in ambient state between calls.

use std::fmt;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::DisplayConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, LeaveRequest, PayrollRecord, Project};
use crate::views::{
    AttendanceView, DashboardSummary, PayrollRow, attendance_view, dashboard_summary, payroll_rows,
};

/// The bearer token of the employee a request is served for.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wraps a bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The raw token, for the transport layer.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("token", &"<redacted>").finish()
    }
}

/// Something that can list an employee's records.
///
/// Each call is made once per user action and is not retried.
pub trait RecordSource {
    /// The employee's attendance history.
    fn attendance(&self, credentials: &Credentials) -> EngineResult<Vec<AttendanceRecord>>;
    /// The employee's leave requests.
    fn leaves(&self, credentials: &Credentials) -> EngineResult<Vec<LeaveRequest>>;
    /// The employee's payrolls.
    fn payrolls(&self, credentials: &Credentials) -> EngineResult<Vec<PayrollRecord>>;
    /// The employee's projects.
    fn projects(&self, credentials: &Credentials) -> EngineResult<Vec<Project>>;
}

/// A [`RecordSource`] backed by fixed vectors.
///
/// When built with [`InMemorySource::requiring`], every call with a
/// different token fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    required_token: Option<String>,
    attendance: Vec<AttendanceRecord>,
    leaves: Vec<LeaveRequest>,
    payrolls: Vec<PayrollRecord>,
    projects: Vec<Project>,
}

impl InMemorySource {
    /// An empty source accepting any credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty source accepting only `token`.
    pub fn requiring(token: impl Into<String>) -> Self {
        Self {
            required_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Sets the attendance history.
    pub fn with_attendance(mut self, records: Vec<AttendanceRecord>) -> Self {
        self.attendance = records;
        self
    }

    /// Sets the leave requests.
    pub fn with_leaves(mut self, leaves: Vec<LeaveRequest>) -> Self {
        self.leaves = leaves;
        self
    }

    /// Sets the payrolls.
    pub fn with_payrolls(mut self, payrolls: Vec<PayrollRecord>) -> Self {
        self.payrolls = payrolls;
        self
    }

    /// Sets the projects.
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    fn authorize(&self, resource: &str, credentials: &Credentials) -> EngineResult<()> {
        match &self.required_token {
            Some(token) if token != credentials.token() => Err(EngineError::SourceUnavailable {
                resource: resource.to_string(),
                message: "credentials rejected".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl RecordSource for InMemorySource {
    fn attendance(&self, credentials: &Credentials) -> EngineResult<Vec<AttendanceRecord>> {
        self.authorize("attendance", credentials)?;
        Ok(self.attendance.clone())
    }

    fn leaves(&self, credentials: &Credentials) -> EngineResult<Vec<LeaveRequest>> {
        self.authorize("leaves", credentials)?;
        Ok(self.leaves.clone())
    }

    fn payrolls(&self, credentials: &Credentials) -> EngineResult<Vec<PayrollRecord>> {
        self.authorize("payrolls", credentials)?;
        Ok(self.payrolls.clone())
    }

    fn projects(&self, credentials: &Credentials) -> EngineResult<Vec<Project>> {
        self.authorize("projects", credentials)?;
        Ok(self.projects.clone())
    }
}

/// Loads and builds the dashboard.
///
/// Each section degrades on its own: an unavailable attendance history
/// shows as a placeholder percentage, and unavailable leaves or projects
/// show as empty tables.
pub fn load_dashboard<S: RecordSource + ?Sized>(
    source: &S,
    credentials: &Credentials,
    config: &DisplayConfig,
) -> DashboardSummary {
    let attendance = source
        .attendance(credentials)
        .inspect_err(|err| warn!(error = %err, "Attendance unavailable for dashboard"))
        .ok();
    let leaves = source
        .leaves(credentials)
        .inspect_err(|err| warn!(error = %err, "Leaves unavailable for dashboard"))
        .unwrap_or_default();
    let projects = source
        .projects(credentials)
        .inspect_err(|err| warn!(error = %err, "Projects unavailable for dashboard"))
        .unwrap_or_default();

    info!(
        attendance_loaded = attendance.is_some(),
        leaves = leaves.len(),
        projects = projects.len(),
        "Dashboard loaded"
    );

    dashboard_summary(attendance.as_deref(), &leaves, &projects, config)
}

/// Loads the attendance history and builds the attendance page.
pub fn load_attendance<S: RecordSource + ?Sized>(
    source: &S,
    credentials: &Credentials,
    today: NaiveDate,
    config: &DisplayConfig,
) -> EngineResult<AttendanceView> {
    let records = source.attendance(credentials)?;
    Ok(attendance_view(&records, today, config))
}

/// Loads the payrolls and builds the filtered salary table.
pub fn load_payrolls<S: RecordSource + ?Sized>(
    source: &S,
    credentials: &Credentials,
    month_query: &str,
    paid_only: bool,
    config: &DisplayConfig,
) -> EngineResult<Vec<PayrollRow>> {
    let records = source.payrolls(credentials)?;
    let rows = payroll_rows(&records, month_query, paid_only, config);

    info!(
        payrolls = records.len(),
        matching = rows.len(),
        paid_only,
        "Payrolls loaded"
    );

    Ok(rows)
}
