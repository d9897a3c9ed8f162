//! Payroll policy, month statistics and payroll output models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which income the mandatory-insurance deduction is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceBase {
    /// Deduct on the contracted basic monthly salary.
    Basic,
    /// Deduct on the period's total gross income.
    Total,
}

/// Office-wide payroll policy, passed explicitly into every calculation.
///
/// The configuration store supplies the default; callers may override it
/// per request. The policy is never mutated in place by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Standard work-day count a full monthly salary is divided by (e.g. 26).
    pub standard_work_days: u32,
    /// Percent of the daily rate paid for a leave day (e.g. 100 or 50).
    pub leave_pay_percent: Decimal,
    /// Flat fine per unexcused absence day.
    pub absence_fine: Decimal,
    /// Combined social/health insurance percent deducted from pay.
    pub insurance_percent: Decimal,
    /// Which income the insurance percent applies to.
    pub insurance_base: InsuranceBase,
}

/// Attendance statistics for one employee over one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStats {
    /// Multiplier-weighted worked days.
    pub actual_work_days: u32,
    /// Paid leave days.
    pub paid_leave_days: u32,
    /// Unexcused absence days.
    pub absence_days: u32,
    /// Holiday days (declared or individually recorded).
    pub holiday_days: u32,
}

/// The itemized pay breakdown for one employee, immutable once finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDetail {
    /// The employee this breakdown is for.
    pub employee_id: String,
    /// The employee's display name at finalization time.
    pub employee_name: String,
    /// Multiplier-weighted worked days used for the base salary.
    pub actual_work_days: u32,
    /// Attendance-prorated or commission base salary.
    pub base_salary: Decimal,
    /// Sum of applied allowances.
    pub allowance_total: Decimal,
    /// Pay for leave days (monthly staff only).
    pub leave_pay: Decimal,
    /// Fines for unexcused absences (monthly staff only).
    pub absence_fine: Decimal,
    /// Mandatory insurance deduction (monthly staff only).
    pub insurance_deduction: Decimal,
    /// Income before the insurance deduction.
    pub gross_income: Decimal,
    /// Final take-home amount.
    pub net_salary: Decimal,
}

/// A finalized month of payroll, aggregated over the whole roster.
///
/// Records are append-only history: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The month that was finalized, as `YYYY-MM`.
    pub month: String,
    /// When the month was finalized.
    pub finalized_date: DateTime<Utc>,
    /// Sum of net salaries over all details.
    pub total_amount: Decimal,
    /// Number of employees in the record.
    pub employee_count: u32,
    /// Per-employee breakdowns.
    pub details: Vec<PayrollDetail>,
}
