//! HTTP request handlers for the Payroll and Quotation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_month_stats, compute_payroll, compute_quote_items, format_document_id, quote_total,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayrollDetail, PayrollRecord, Project};

use super::request::{PayrollRequest, QuoteRequest};
use super::response::{
    ApiError, ApiErrorResponse, HistoryResponse, PayrollCalculationResponse, QuoteResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .route("/payroll/finalize", post(finalize_payroll_handler))
        .route("/payroll/history", get(payroll_history_handler))
        .route("/quote/price", post(price_quote_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /payroll/calculate endpoint.
///
/// Computes every employee's breakdown for the requested month without
/// touching the finalized history.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match run_payroll(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                month = %result.month,
                employee_count = result.employee_count,
                total_amount = %result.total_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
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

/// Handler for the POST /payroll/finalize endpoint.
///
/// Computes the month like `/payroll/calculate`, then appends an
/// immutable record to the history. A month can only be finalized once.
async fn finalize_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll finalize request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    let result = match run_payroll(&request, state.config()) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll finalization failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // The duplicate check and the append happen under one write lock so
    // concurrent finalize requests for the same month cannot both succeed.
    let mut history = state.history().write().await;
    if history.iter().any(|record| record.month == result.month) {
        let err = EngineError::PayrollAlreadyFinalized {
            month: result.month.clone(),
        };
        warn!(correlation_id = %correlation_id, error = %err, "Duplicate finalization rejected");
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let record = PayrollRecord {
        id: Uuid::new_v4(),
        month: result.month.clone(),
        finalized_date: Utc::now(),
        total_amount: result.total_amount,
        employee_count: result.employee_count,
        details: result.details,
    };
    history.push(record.clone());
    drop(history);

    info!(
        correlation_id = %correlation_id,
        month = %record.month,
        record_id = %record.id,
        total_amount = %record.total_amount,
        "Payroll month finalized"
    );
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        Json(record),
    )
        .into_response()
}

/// Handler for the GET /payroll/history endpoint.
async fn payroll_history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.history().read().await.clone();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(HistoryResponse { records }),
    )
        .into_response()
}

/// Handler for the POST /quote/price endpoint.
///
/// Builds or reprices a quotation from the parcel inputs and returns the
/// items with a freshly reserved document id.
async fn price_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote pricing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    match price_quote(request, &state) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                quote_id = %result.quote_id,
                total = %result.total,
                "Quote priced successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote pricing failed"
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

/// Computes the payroll breakdowns for every employee in the request.
fn run_payroll(
    request: &PayrollRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollCalculationResponse> {
    let ledger = request
        .attendance
        .build_ledger(&request.month, config.weekend())?;
    let policy = request.policy.unwrap_or(*config.payroll_policy());

    let projects: Vec<Project> = request.projects.iter().cloned().map(Into::into).collect();

    let details: Vec<PayrollDetail> = request
        .employees
        .iter()
        .cloned()
        .map(|req| {
            let employee: Employee = req.into();
            let stats = compute_month_stats(&ledger, &employee.id);
            compute_payroll(&employee, &stats, &policy, &projects)
        })
        .collect();

    let total_amount: Decimal = details.iter().map(|d| d.net_salary).sum();

    Ok(PayrollCalculationResponse {
        month: ledger.month_label(),
        employee_count: details.len() as u32,
        total_amount,
        details,
    })
}

/// Prices a quotation from the request, reserving a document id.
fn price_quote(request: QuoteRequest, state: &AppState) -> EngineResult<QuoteResponse> {
    let config = state.config();

    let items = match request.items {
        Some(items) => items,
        None => config.template(request.kind)?.to_vec(),
    };

    let items = compute_quote_items(
        &items,
        request.area,
        request.zone,
        request.location_unit_price,
        config.quote_rules(),
    );
    let total = quote_total(&items);

    let quote_id = format_document_id(
        config.quote_id(),
        state.next_quote_seq(),
        Utc::now().date_naive(),
    );

    Ok(QuoteResponse {
        quote_id,
        kind: request.kind,
        area: request.area,
        zone: request.zone,
        items,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{AttendanceRequest, DayRecordRequest, EmployeeRequest};
    use crate::config::ConfigLoader;
    use crate::models::{DayStatus, LineItemKind, QuoteKind, SalaryType};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/office").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn monthly_employee(id: &str, salary: &str) -> EmployeeRequest {
        EmployeeRequest {
            id: id.to_string(),
            name: "Tran Van A".to_string(),
            salary_type: SalaryType::Monthly,
            salary_monthly: Some(dec(salary)),
            salary_daily: None,
            allowances: vec![],
        }
    }

    fn payroll_request() -> PayrollRequest {
        PayrollRequest {
            month: "2026-01".to_string(),
            employees: vec![monthly_employee("emp_001", "13000000")],
            attendance: AttendanceRequest::default(),
            projects: vec![],
            policy: None,
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&payroll_request()).unwrap();

        let response = post_json(router, "/payroll/calculate", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: PayrollCalculationResponse = body_json(response).await;
        assert_eq!(result.month, "2026-01");
        assert_eq!(result.employee_count, 1);

        // January 2026 has 27 implicit work days under the default weekend
        // policy; daily rate 13,000,000 / 26 = 500,000.
        let detail = &result.details[0];
        assert_eq!(detail.actual_work_days, 27);
        assert_eq!(detail.base_salary, dec("13500000"));
    }

    #[tokio::test]
    async fn test_calculate_with_attendance_records() {
        let router = create_router(create_test_state());

        let mut request = payroll_request();
        request.attendance = AttendanceRequest {
            weekend: None,
            holidays: vec![1],
            records: vec![DayRecordRequest {
                employee_id: "emp_001".to_string(),
                day: 5,
                status: DayStatus::Leave,
                multiplier: 1,
            }],
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payroll/calculate", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: PayrollCalculationResponse = body_json(response).await;
        let detail = &result.details[0];
        // 27 implicit days minus the holiday and the leave day.
        assert_eq!(detail.actual_work_days, 25);
        assert_eq!(detail.leave_pay, dec("500000"));
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/payroll/calculate", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_missing_month_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(
            router,
            "/payroll/calculate",
            r#"{"employees": []}"#.to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("month"));
    }

    #[tokio::test]
    async fn test_calculate_invalid_month_returns_400() {
        let router = create_router(create_test_state());

        let mut request = payroll_request();
        request.month = "2026-13".to_string();
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payroll/calculate", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_calculate_out_of_range_day_returns_400() {
        let router = create_router(create_test_state());

        let mut request = payroll_request();
        request.attendance.records.push(DayRecordRequest {
            employee_id: "emp_001".to_string(),
            day: 32,
            status: DayStatus::Present,
            multiplier: 1,
        });
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payroll/calculate", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "DAY_OUT_OF_RANGE");
    }

    #[tokio::test]
    async fn test_finalize_then_duplicate_returns_409() {
        let state = create_test_state();
        let body = serde_json::to_string(&payroll_request()).unwrap();

        let response = post_json(
            create_router(state.clone()),
            "/payroll/finalize",
            body.clone(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let record: PayrollRecord = body_json(response).await;
        assert_eq!(record.month, "2026-01");
        assert_eq!(record.employee_count, 1);

        let response = post_json(create_router(state), "/payroll/finalize", body).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "PAYROLL_ALREADY_FINALIZED");
    }

    #[tokio::test]
    async fn test_history_lists_finalized_months() {
        let state = create_test_state();

        let response = create_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/payroll/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let history: HistoryResponse = body_json(response).await;
        assert!(history.records.is_empty());

        let body = serde_json::to_string(&payroll_request()).unwrap();
        post_json(create_router(state.clone()), "/payroll/finalize", body).await;

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/payroll/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let history: HistoryResponse = body_json(response).await;
        assert_eq!(history.records.len(), 1);
        assert_eq!(history.records[0].month, "2026-01");
    }

    #[tokio::test]
    async fn test_quote_from_template_returns_priced_items() {
        let router = create_router(create_test_state());

        let body = r#"{
            "kind": "drawing",
            "area": "150",
            "zone": "urban"
        }"#;

        let response = post_json(router, "/quote/price", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: QuoteResponse = body_json(response).await;
        assert!(result.quote_id.starts_with("BG-"));
        assert_eq!(result.kind, QuoteKind::Drawing);

        let survey = result
            .items
            .iter()
            .find(|i| i.kind == LineItemKind::AutoSurvey)
            .unwrap();
        assert_eq!(survey.price, dec("1224000"));

        let inspection = result
            .items
            .iter()
            .find(|i| i.kind == LineItemKind::AutoInspection)
            .unwrap();
        // (1,224,000 + 1,000,000) * 0.25.
        assert_eq!(inspection.price, dec("556000"));

        assert_eq!(result.total, quote_total(&result.items));
    }

    #[tokio::test]
    async fn test_quote_ids_are_sequential() {
        let state = create_test_state();
        let body = r#"{"kind": "drawing", "area": "150", "zone": "rural"}"#;

        let first = post_json(
            create_router(state.clone()),
            "/quote/price",
            body.to_string(),
        )
        .await;
        let second = post_json(create_router(state), "/quote/price", body.to_string()).await;

        let first: QuoteResponse = body_json(first).await;
        let second: QuoteResponse = body_json(second).await;
        assert!(first.quote_id.ends_with("-0001"));
        assert!(second.quote_id.ends_with("-0002"));
    }

    #[tokio::test]
    async fn test_quote_with_explicit_items_reprices_them() {
        let router = create_router(create_test_state());

        let body = r#"{
            "kind": "new_certificate",
            "area": "200",
            "zone": "rural",
            "location_unit_price": "1500000",
            "items": [
                {
                    "id": "transfer_tax",
                    "name": "Transfer income tax",
                    "kind": "auto_transfer_tax",
                    "price": "0",
                    "enabled": true
                },
                {
                    "id": "extract",
                    "name": "Map extract",
                    "kind": "flat",
                    "price": "120000",
                    "enabled": true,
                    "custom": true
                }
            ]
        }"#;

        let response = post_json(router, "/quote/price", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: QuoteResponse = body_json(response).await;
        // 200 * 2.5 * 1,500,000 + 120,000.
        assert_eq!(result.total, dec("750120000"));
        assert!(result.items.iter().any(|i| i.custom));
    }

    #[tokio::test]
    async fn test_quote_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/quote/price", "not json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
