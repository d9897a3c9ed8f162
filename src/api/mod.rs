//! HTTP API module for the Payroll and Quotation Engine.
//!
//! This module provides the REST API endpoints for calculating and
//! finalizing monthly payroll and for pricing quotations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AllowanceRequest, AttendanceRequest, DayRecordRequest, EmployeeRequest, PayrollRequest,
    ProjectRequest, QuoteRequest,
};
pub use response::{ApiError, HistoryResponse, PayrollCalculationResponse, QuoteResponse};
pub use state::AppState;
