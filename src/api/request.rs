//! Request types for the Payroll and Quotation Engine API.
//!
//! This module defines the JSON request structures for the payroll and
//! quotation endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    Allowance, AllowanceFrequency, AttendanceLedger, DayRecord, DayStatus, Employee, PayrollPolicy,
    Project, ProjectStatus, QuoteItem, QuoteKind, SalaryType, WeekendPolicy, ZoneType,
};

/// Request body for the `/payroll/calculate` and `/payroll/finalize`
/// endpoints.
///
/// Contains the month, the roster, the attendance records and the case
/// list needed to compute every employee's pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The month to calculate, as `YYYY-MM`.
    pub month: String,
    /// The employees to include in the run.
    pub employees: Vec<EmployeeRequest>,
    /// Attendance data for the month.
    #[serde(default)]
    pub attendance: AttendanceRequest,
    /// Survey cases, used for commissions and per-case allowances.
    #[serde(default)]
    pub projects: Vec<ProjectRequest>,
    /// Optional override of the configured payroll policy.
    #[serde(default)]
    pub policy: Option<PayrollPolicy>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// How the employee is paid.
    pub salary_type: SalaryType,
    /// Contracted monthly salary, for monthly staff.
    #[serde(default)]
    pub salary_monthly: Option<Decimal>,
    /// Contracted daily rate, for daily staff.
    #[serde(default)]
    pub salary_daily: Option<Decimal>,
    /// Recurring allowances.
    #[serde(default)]
    pub allowances: Vec<AllowanceRequest>,
}

/// Allowance information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowanceRequest {
    /// Unique identifier for the allowance.
    pub id: String,
    /// Display name of the allowance.
    pub name: String,
    /// How often the allowance is paid.
    pub frequency: AllowanceFrequency,
    /// The allowance amount per application.
    pub amount: Decimal,
}

/// Attendance data in a payroll request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Override of the configured weekend working policy.
    #[serde(default)]
    pub weekend: Option<WeekendPolicy>,
    /// Declared holiday days of the month, affecting every employee.
    #[serde(default)]
    pub holidays: Vec<u32>,
    /// Explicit day records; unlisted days resolve to their implicit
    /// default.
    #[serde(default)]
    pub records: Vec<DayRecordRequest>,
}

/// One explicit day record in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecordRequest {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// Day of month, 1-based.
    pub day: u32,
    /// The day's classification.
    pub status: DayStatus,
    /// Work-day multiplier; meaningful for `present` records.
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
}

fn default_multiplier() -> u32 {
    1
}

/// Survey case information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    /// Unique identifier for the case.
    pub id: String,
    /// The technician assigned to the case, if any.
    #[serde(default)]
    pub technician_id: Option<String>,
    /// Parcel area in square meters, if surveyed.
    #[serde(default)]
    pub land_area: Option<Decimal>,
    /// Commission amount assigned to the case, if any.
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// The case's workflow status.
    pub status: ProjectStatus,
}

/// Request body for the `/quote/price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Which fee template the quotation is built from.
    pub kind: QuoteKind,
    /// Parcel area in square meters.
    pub area: Decimal,
    /// Urban or rural parcel classification.
    pub zone: ZoneType,
    /// Government location unit price for the parcel, used by the tax
    /// items.
    #[serde(default)]
    pub location_unit_price: Decimal,
    /// Current line items to reprice. When omitted, the configured
    /// template for `kind` is used.
    #[serde(default)]
    pub items: Option<Vec<QuoteItem>>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            salary_type: req.salary_type,
            salary_monthly: req.salary_monthly,
            salary_daily: req.salary_daily,
            allowances: req.allowances.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<AllowanceRequest> for Allowance {
    fn from(req: AllowanceRequest) -> Self {
        Allowance {
            id: req.id,
            name: req.name,
            frequency: req.frequency,
            amount: req.amount,
        }
    }
}

impl From<ProjectRequest> for Project {
    fn from(req: ProjectRequest) -> Self {
        Project {
            id: req.id,
            technician_id: req.technician_id,
            land_area: req.land_area,
            commission: req.commission,
            status: req.status,
        }
    }
}

impl AttendanceRequest {
    /// Builds the month's attendance ledger from the request.
    ///
    /// `default_weekend` is the configured policy, used when the request
    /// does not override it. Fails on an invalid month, an out-of-range
    /// day or an invalid multiplier.
    pub fn build_ledger(
        &self,
        month: &str,
        default_weekend: WeekendPolicy,
    ) -> EngineResult<AttendanceLedger> {
        let weekend = self.weekend.unwrap_or(default_weekend);
        let mut ledger = AttendanceLedger::from_month_str(month, weekend)?;

        for &day in &self.holidays {
            if !ledger.is_holiday(day) {
                ledger.toggle_holiday(day)?;
            }
        }

        for record in &self.records {
            ledger.set_day(
                &record.employee_id,
                record.day,
                DayRecord {
                    status: record.status,
                    multiplier: record.multiplier,
                },
            )?;
        }

        Ok(ledger)
    }
}
