//! HTTP request handlers for the Compensation Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! The handlers are thin: they parse requests, invoke the pure engine,
//! and stamp the response with request-scoped identifiers.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{amortization_schedule, compute_payroll};
use crate::models::{AttendanceDay, LoanTerms, SalaryStructure};

use super::request::{LoanScheduleRequest, PayrollCalculationRequest};
use super::response::{
    ApiError, ApiErrorResponse, LoanScheduleResponse, PayrollCalculationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(payroll_calculate_handler))
        .route("/loan/schedule", post(loan_schedule_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_to_api_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /payroll/calculate endpoint.
///
/// Accepts a payroll calculation request and returns the computed
/// payroll result for the employee and month.
async fn payroll_calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_api_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let structure: SalaryStructure = request.salary_structure.into();
    let attendance: Vec<AttendanceDay> =
        request.attendance.into_iter().map(Into::into).collect();

    // The organization policy and holiday list come from configuration;
    // the engine receives both explicitly.
    let config = state.config();
    let holidays = config.holidays_for_year(request.year);
    let policy = config.policy();

    let start_time = Instant::now();
    match compute_payroll(
        &request.employee_id,
        request.year,
        request.month,
        &structure,
        &attendance,
        holidays,
        policy,
    ) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                working_days = result.working_days.working_days,
                net_payable = %result.net_payable,
                duration_us = duration.as_micros(),
                "Payroll calculation completed successfully"
            );
            let response = PayrollCalculationResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                result,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /loan/schedule endpoint.
///
/// Accepts loan terms and returns the fixed installment together with
/// the full amortization schedule.
async fn loan_schedule_handler(
    payload: Result<Json<LoanScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing loan schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_api_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let terms: LoanTerms = request.into();

    match amortization_schedule(&terms) {
        Ok(schedule) => {
            info!(
                correlation_id = %correlation_id,
                tenure_months = terms.tenure_months,
                installment = %schedule.installment,
                "Loan schedule computed successfully"
            );
            let response = LoanScheduleResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                installment: schedule.installment,
                schedule: schedule.entries,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Loan schedule computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/organization").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> StatusCode {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_payroll_calculate_happy_path() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "employee_id": "emp_001",
            "year": 2025,
            "month": 1,
            "salary_structure": {
                "components": [
                    {"name": "basic", "monthly_amount": "30000", "kind": "earning"}
                ]
            },
            "attendance": [
                {"date": "2025-01-06", "status": "present"}
            ]
        });

        let status = post_json(router, "/payroll/calculate", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_payroll_calculate_rejects_invalid_month() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "employee_id": "emp_001",
            "year": 2025,
            "month": 13,
            "salary_structure": {
                "components": [
                    {"name": "basic", "monthly_amount": "30000", "kind": "earning"}
                ]
            },
            "attendance": [
                {"date": "2025-01-06", "status": "present"}
            ]
        });

        let status = post_json(router, "/payroll/calculate", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_loan_schedule_happy_path() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "principal": "100000",
            "tenure_months": 12,
            "annual_interest_rate_pct": "10"
        });

        let status = post_json(router, "/loan/schedule", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_loan_schedule_rejects_zero_principal() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "principal": "0",
            "tenure_months": 12,
            "annual_interest_rate_pct": "10"
        });

        let status = post_json(router, "/loan/schedule", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
