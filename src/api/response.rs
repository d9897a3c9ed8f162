//! Response types for the Payroll and Quotation Engine API.
//!
//! This module defines the success response bodies, the error response
//! structures and the error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PayrollDetail, PayrollRecord, QuoteItem, QuoteKind, ZoneType};

/// Response body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCalculationResponse {
    /// The calculated month, as `YYYY-MM`.
    pub month: String,
    /// Number of employees in the run.
    pub employee_count: u32,
    /// Sum of net salaries over all breakdowns.
    pub total_amount: Decimal,
    /// Per-employee breakdowns.
    pub details: Vec<PayrollDetail>,
}

/// Response body for the `/payroll/history` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Finalized months, oldest first.
    pub records: Vec<PayrollRecord>,
}

/// Response body for the `/quote/price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Office-formatted quotation document id.
    pub quote_id: String,
    /// The fee template the quotation was built from.
    pub kind: QuoteKind,
    /// Parcel area in square meters.
    pub area: Decimal,
    /// Urban or rural parcel classification.
    pub zone: ZoneType,
    /// The repriced line items.
    pub items: Vec<QuoteItem>,
    /// Sum of enabled line items.
    pub total: Decimal,
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::OverlappingRules {
                table,
                first,
                second,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Rule table configuration error",
                    format!(
                        "Rule table '{}' has overlapping ranges '{}' and '{}'",
                        table, first, second
                    ),
                ),
            },
            EngineError::InvalidMonth { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month '{}'", month),
                    "The month must be formatted as YYYY-MM",
                ),
            },
            EngineError::DayOutOfRange {
                day,
                month,
                days_in_month,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DAY_OUT_OF_RANGE",
                    format!("Day {} is outside month {}", day, month),
                    format!("Month {} has days 1..={}", month, days_in_month),
                ),
            },
            EngineError::InvalidMultiplier { multiplier } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MULTIPLIER",
                    format!("Invalid work multiplier {}", multiplier),
                    "The work multiplier must be 1, 2 or 3",
                ),
            },
            EngineError::PayrollAlreadyFinalized { month } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "PAYROLL_ALREADY_FINALIZED",
                    format!("Payroll for month {} has already been finalized", month),
                    "Finalized months are immutable; the record is in /payroll/history",
                ),
            },
            EngineError::TemplateNotFound { kind } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TEMPLATE_NOT_FOUND",
                    format!("No quote item template configured for kind '{}'", kind),
                    "The office configuration has no template for the requested quote kind",
                ),
            },
        }
    }
}
