//! Response types for the shift reconciliation API.
//!
//! This module defines the success envelopes and the error response
//! structures returned by the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ReconciliationReport;

/// Response body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// Unique identifier for this reconciliation.
    pub reconciliation_id: Uuid,
    /// When the reconciliation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// Time spent reconciling, in microseconds.
    pub duration_us: u64,
    /// The reconciliation report.
    #[serde(flatten)]
    pub report: ReconciliationReport,
}

/// Response body for the `/delay-to-finish` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayToFinishResponse {
    /// Expected hours resolved from the shift name.
    pub expected_hours: Decimal,
    /// "All Clear" or the formatted shortfall.
    pub delay_to_finish: String,
    /// Shortfall in minutes.
    pub delay_to_finish_minutes: Decimal,
    /// Regular plus overtime hours minus delay, floored at zero.
    pub net_hours: Decimal,
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidShiftPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Shift policy configuration is invalid",
                    message,
                ),
            },
            EngineError::InvalidRecord { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    message,
                    "The attendance record contains invalid information",
                ),
            },
            EngineError::DuplicateRecord { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_RECORD",
                    message,
                    "Each employee may have at most one record per work date",
                ),
            },
            EngineError::InvalidFilter { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}
