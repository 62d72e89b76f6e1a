//! Response types for the derivation API.
//!
//! This module defines the success bodies that are not view models, the
//! error body, and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AttendanceRecord, parse_calendar_date};
use crate::views::TodayCard;

/// Response body for `POST /leaves/days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDaysResponse {
    /// Inclusive day count.
    pub days: u32,
}

/// Response body for `POST /attendance/transition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTransitionResponse {
    /// The record for the changed day.
    pub record: AttendanceRecord,
    /// The history with `record` at its head.
    pub history: Vec<AttendanceRecord>,
    /// Today's card after the change.
    pub today: TodayCard,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::InvalidDateRange { from, to, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_DATE_RANGE", message, date_range_details(&from, &to)),
            ),
            EngineError::MissingRequiredField { field } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "MISSING_FIELD",
                    message,
                    format!("Required field '{}' was not provided", field),
                ),
            ),
            EngineError::InvalidTimeRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_TIME_RANGE", message),
            ),
            EngineError::InvalidTransition { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("INVALID_TRANSITION", message),
            ),
            EngineError::UnknownMonth { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("UNKNOWN_MONTH", message),
            ),
            EngineError::SourceUnavailable { resource, .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "SOURCE_UNAVAILABLE",
                    message,
                    format!("The {} records could not be loaded", resource),
                ),
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
        };

        Self { status, error }
    }
}

/// Names the unparseable bound if there is one, otherwise the ordering.
fn date_range_details(from: &str, to: &str) -> String {
    match [from, to].into_iter().find(|raw| parse_calendar_date(raw).is_none()) {
        Some(raw) => format!("Expected '{}' as YYYY-MM-DD", raw),
        None => format!("Expected '{}' on or before '{}'", from, to),
    }
}
