//! HTTP request handlers for the derivation API.
//!
//! Every handler parses its body, runs one derivation against the shared
//! display configuration and returns JSON.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{AttendanceDay, LeaveApplication, compute_leave_days, merge_record};
use crate::config::DisplayConfig;
use crate::error::{EngineError, EngineResult};
use crate::views::{attendance_view, dashboard_summary, payroll_rows, project_rows, today_card};

use super::request::{
    AttendanceSummaryRequest, AttendanceTransitionRequest, DashboardRequest, LeaveDaysRequest,
    PayrollFilterRequest, ProjectFilterRequest,
};
use super::response::{ApiError, ApiErrorResponse, AttendanceTransitionResponse, LeaveDaysResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/summary", post(attendance_summary_handler))
        .route("/attendance/transition", post(attendance_transition_handler))
        .route("/leaves/days", post(leave_days_handler))
        .route("/leaves/validate", post(leave_validate_handler))
        .route("/payrolls/filter", post(payroll_filter_handler))
        .route("/projects/filter", post(project_filter_handler))
        .route("/dashboard", post(dashboard_handler))
        .with_state(state)
}

/// Handler for `POST /attendance/summary`.
async fn attendance_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");
    let request = parse_body(correlation_id, payload)?;

    let start_time = Instant::now();
    let view = attendance_view(&request.records, request.today, state.display());
    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        attendance_percentage = view.attendance_percentage,
        duration_us = start_time.elapsed().as_micros(),
        "Attendance summary derived"
    );
    Ok(json_ok(view))
}

/// Handler for `POST /attendance/transition`.
///
/// Invalid moves of the check-in state machine are answered with `409`.
async fn attendance_transition_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceTransitionRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance transition request");
    let request = parse_body(correlation_id, payload)?;

    let response = apply_transition(&request, state.display())
        .map_err(|err| engine_failure(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        action = ?request.action,
        date = %response.record.date,
        status = %response.today.status_label,
        "Attendance transition applied"
    );
    Ok(json_ok(response))
}

/// Handler for `POST /leaves/days`.
async fn leave_days_handler(
    payload: Result<Json<LeaveDaysRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave days request");
    let request = parse_body(correlation_id, payload)?;

    let days = compute_leave_days(&request.from, &request.to)
        .map_err(|err| engine_failure(correlation_id, err))?;
    info!(correlation_id = %correlation_id, days, "Leave days computed");
    Ok(json_ok(LeaveDaysResponse { days }))
}

/// Handler for `POST /leaves/validate`.
async fn leave_validate_handler(
    payload: Result<Json<LeaveApplication>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave validation request");
    let application = parse_body(correlation_id, payload)?;

    let submission = application
        .validate()
        .map_err(|err| engine_failure(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        leave_type = submission.leave_type.label(),
        days = submission.days,
        "Leave application validated"
    );
    Ok(json_ok(submission))
}

/// Handler for `POST /payrolls/filter`.
async fn payroll_filter_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollFilterRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll filter request");
    let request = parse_body(correlation_id, payload)?;

    let rows = payroll_rows(
        &request.records,
        &request.month_query,
        request.paid_only,
        state.display(),
    );
    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        matched = rows.len(),
        paid_only = request.paid_only,
        "Payrolls filtered"
    );
    Ok(json_ok(rows))
}

/// Handler for `POST /projects/filter`.
async fn project_filter_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectFilterRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing project filter request");
    let request = parse_body(correlation_id, payload)?;

    let rows = project_rows(&request.projects, request.filter, state.display());
    info!(
        correlation_id = %correlation_id,
        projects = request.projects.len(),
        matched = rows.len(),
        "Projects filtered"
    );
    Ok(json_ok(rows))
}

/// Handler for `POST /dashboard`.
async fn dashboard_handler(
    State(state): State<AppState>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard request");
    let request = parse_body(correlation_id, payload)?;

    if request.attendance.is_none() {
        warn!(correlation_id = %correlation_id, "Dashboard requested without attendance");
    }

    let start_time = Instant::now();
    let summary = dashboard_summary(
        request.attendance.as_deref(),
        &request.leaves,
        &request.projects,
        state.display(),
    );
    info!(
        correlation_id = %correlation_id,
        leaves_taken = summary.leaves_taken,
        projects_assigned = summary.projects_assigned,
        duration_us = start_time.elapsed().as_micros(),
        "Dashboard derived"
    );
    Ok(json_ok(summary))
}

/// Runs one check-in/check-out against the history.
fn apply_transition(
    request: &AttendanceTransitionRequest,
    config: &DisplayConfig,
) -> EngineResult<AttendanceTransitionResponse> {
    let date = request.at.date_naive();
    let day = AttendanceDay::for_date(&request.records, date).apply(request.action, request.at)?;
    let record = day
        .to_record(date)
        .ok_or_else(|| EngineError::MissingRequiredField {
            field: "checkIn".to_string(),
        })?;

    let history = merge_record(&request.records, record.clone());
    let today = today_card(&history, date, config);

    Ok(AttendanceTransitionResponse {
        record,
        history,
        today,
    })
}

/// Unwraps a JSON body, turning extractor rejections into `400` responses.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn engine_failure(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Derivation rejected"
    );
    err.into()
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
