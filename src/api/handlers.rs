//! HTTP request handlers for the shift reconciliation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_delay_to_finish, calculate_net_hours, reconcile};
use crate::models::AttendanceRecord;

use super::request::{DelayToFinishRequest, ReconcileRequest};
use super::response::{ApiError, ApiErrorResponse, DelayToFinishResponse, ReconcileResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .route("/delay-to-finish", post(delay_to_finish_handler))
        .with_state(state)
}

/// Handler for POST /reconcile.
///
/// Accepts attendance rows and an optional filter and returns the
/// reconciliation report.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let filter = request.filter;
    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match reconcile(&records, &filter, state.config().policy()) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                selected = report.rows.len(),
                offsetting_type = report.summary.offsetting_type.as_str(),
                duration_us = duration.as_micros(),
                "Reconciliation completed successfully"
            );
            let response = ReconcileResponse {
                reconciliation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
                report,
            };
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /delay-to-finish.
///
/// Computes the per-row delay-to-finish and net hours for one attendance row.
async fn delay_to_finish_handler(
    State(state): State<AppState>,
    payload: Result<Json<DelayToFinishRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing delay-to-finish request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if request.regular_hours < Decimal::ZERO || request.overtime_hours < Decimal::ZERO {
        warn!(correlation_id = %correlation_id, "Negative hours in delay-to-finish request");
        return json_response(
            StatusCode::BAD_REQUEST,
            &ApiError::validation_error("hours cannot be negative"),
        );
    }

    let Some(total_hours) = request.regular_hours.checked_add(request.overtime_hours) else {
        warn!(correlation_id = %correlation_id, "Hours overflow in delay-to-finish request");
        return json_response(
            StatusCode::BAD_REQUEST,
            &ApiError::validation_error("regular plus overtime hours overflow"),
        );
    };

    let result = calculate_delay_to_finish(
        request.break_minutes,
        request.delay_minutes,
        request.regular_hours,
        request.overtime_hours,
        request.shift_name.as_deref(),
        state.config().policy(),
    );

    let response = DelayToFinishResponse {
        expected_hours: result.expected_hours,
        delay_to_finish: result.delay_to_finish.to_string(),
        delay_to_finish_minutes: result.delay_to_finish.minutes(),
        net_hours: calculate_net_hours(total_hours, request.delay_minutes),
    };

    info!(
        correlation_id = %correlation_id,
        delay_to_finish = %response.delay_to_finish,
        "Delay to finish computed"
    );
    json_response(StatusCode::OK, &response)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, &error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::AttendanceRecordRequest;
    use crate::config::ConfigLoader;
    use crate::models::RecordFilter;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::builtin())
    }

    fn make_row(user_id: &str, date: &str, regular: i64) -> AttendanceRecordRequest {
        AttendanceRecordRequest {
            user_id: user_id.to_string(),
            work_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            shift_name: Some("Day Shift".to_string()),
            check_in_time: None,
            check_out_time: None,
            regular_hours: Some(Decimal::from(regular)),
            overtime_hours: None,
            delay_minutes: None,
            total_break_minutes: None,
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let request = ReconcileRequest {
            records: vec![make_row("emp_001", "2025-03-03", 6)],
            filter: RecordFilter::all(),
        };

        let (status, json) = post_json(
            router,
            "/reconcile",
            serde_json::to_string(&request).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: ReconcileResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.report.rows.len(), 1);
        assert_eq!(response.report.rows[0].delay_to_finish, "1h");
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = post_json(router, "/reconcile", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_records_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, json) = post_json(router, "/reconcile", "{}".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_duplicate_rows_return_400() {
        let router = create_router(create_test_state());
        let request = ReconcileRequest {
            records: vec![
                make_row("emp_001", "2025-03-03", 6),
                make_row("emp_001", "2025-03-03", 7),
            ],
            filter: RecordFilter::all(),
        };

        let (status, json) = post_json(
            router,
            "/reconcile",
            serde_json::to_string(&request).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "DUPLICATE_RECORD");
    }

    #[tokio::test]
    async fn test_delay_to_finish_endpoint() {
        let router = create_router(create_test_state());
        let body = r#"{
            "break_minutes": 30,
            "delay_minutes": 20,
            "regular_hours": 5,
            "overtime_hours": 0,
            "shift_name": "Day Shift"
        }"#;

        let (status, json) = post_json(router, "/delay-to-finish", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["delay_to_finish"], "2h");
        assert_eq!(json["expected_hours"], "7");
    }

    #[tokio::test]
    async fn test_delay_to_finish_rejects_overflowing_hours() {
        let router = create_router(create_test_state());
        let body = r#"{
            "regular_hours": "79228162514264337593543950335",
            "overtime_hours": "1"
        }"#;

        let (status, json) = post_json(router, "/delay-to-finish", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_delay_to_finish_rejects_negative_hours() {
        let router = create_router(create_test_state());
        let body = r#"{ "regular_hours": -2 }"#;

        let (status, json) = post_json(router, "/delay-to-finish", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
