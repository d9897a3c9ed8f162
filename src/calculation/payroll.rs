//! Payroll breakdown calculation.
//!
//! Computes the full itemized pay for one employee over one calendar
//! month: base salary by salary model, leave pay, absence fines,
//! allowances, insurance deduction and net salary.
//!
//! Malformed inputs (missing salary amounts, zero-day policies) degrade to
//! zero contributions instead of raising errors: payroll should produce an
//! auditable wrong number, never crash on bad configuration.

use rust_decimal::Decimal;

use crate::models::{
    AllowanceFrequency, Employee, InsuranceBase, MonthStats, PayrollDetail, PayrollPolicy, Project,
    SalaryType,
};

use super::commission::{commission_total, completed_case_count};

/// Computes the itemized pay breakdown for one employee.
///
/// Steps are performed in a fixed order, each depending on the prior:
/// base salary, leave pay and absence fine, allowances, gross income,
/// insurance deduction, net salary.
///
/// Leave pay, absence fines and the insurance deduction apply only to
/// monthly-salaried staff. Daily and product-paid staff have no paid-leave
/// or fine concept in this pay model; whether daily workers should accrue
/// leave is a policy decision owned by the office, deliberately not
/// changed here.
///
/// # Example
///
/// ```
/// use cadastral_engine::calculation::compute_payroll;
/// use cadastral_engine::models::{
///     Employee, InsuranceBase, MonthStats, PayrollPolicy, SalaryType,
/// };
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Tran Van A".to_string(),
///     salary_type: SalaryType::Monthly,
///     salary_monthly: Some(Decimal::from(10_000_000)),
///     salary_daily: None,
///     allowances: vec![],
/// };
/// let stats = MonthStats {
///     actual_work_days: 26,
///     paid_leave_days: 0,
///     absence_days: 0,
///     holiday_days: 0,
/// };
/// let policy = PayrollPolicy {
///     standard_work_days: 26,
///     leave_pay_percent: Decimal::from(100),
///     absence_fine: Decimal::from(200_000),
///     insurance_percent: Decimal::new(105, 1),
///     insurance_base: InsuranceBase::Basic,
/// };
///
/// let detail = compute_payroll(&employee, &stats, &policy, &[]);
/// assert_eq!(detail.base_salary, Decimal::from(10_000_000));
/// assert_eq!(detail.insurance_deduction, Decimal::from(1_050_000));
/// assert_eq!(detail.net_salary, Decimal::from(8_950_000));
/// ```
pub fn compute_payroll(
    employee: &Employee,
    stats: &MonthStats,
    policy: &PayrollPolicy,
    projects: &[Project],
) -> PayrollDetail {
    let worked_days = Decimal::from(stats.actual_work_days);

    // 1. Base salary and the daily rate later steps derive from.
    let (base_salary, daily_rate) = match employee.salary_type {
        SalaryType::Monthly => {
            let monthly = employee.salary_monthly.unwrap_or(Decimal::ZERO);
            let daily_rate = if policy.standard_work_days == 0 {
                Decimal::ZERO
            } else {
                monthly / Decimal::from(policy.standard_work_days)
            };
            (daily_rate * worked_days, daily_rate)
        }
        SalaryType::Daily => {
            let daily_rate = employee.salary_daily.unwrap_or(Decimal::ZERO);
            (daily_rate * worked_days, daily_rate)
        }
        SalaryType::Product => (commission_total(projects, &employee.id), Decimal::ZERO),
    };

    // 2. Leave pay and absence fine: monthly staff only.
    let (leave_pay, absence_fine) = if employee.salary_type == SalaryType::Monthly {
        (
            daily_rate * Decimal::from(stats.paid_leave_days) * policy.leave_pay_percent
                / Decimal::ONE_HUNDRED,
            Decimal::from(stats.absence_days) * policy.absence_fine,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    // 3. Allowances.
    let completed_cases = completed_case_count(projects, &employee.id);
    let allowance_total: Decimal = employee
        .allowances
        .iter()
        .map(|allowance| match allowance.frequency {
            AllowanceFrequency::Monthly => allowance.amount,
            AllowanceFrequency::Daily => allowance.amount * worked_days,
            AllowanceFrequency::PerCase => allowance.amount * Decimal::from(completed_cases),
        })
        .sum();

    // 4. Gross income.
    let gross_income = base_salary + leave_pay + allowance_total - absence_fine;

    // 5. Insurance deduction: monthly staff only.
    let insurance_deduction = if employee.salary_type == SalaryType::Monthly {
        let deduction_base = match policy.insurance_base {
            InsuranceBase::Basic => employee.salary_monthly.unwrap_or(Decimal::ZERO),
            InsuranceBase::Total => gross_income,
        };
        deduction_base * policy.insurance_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    // 6. Net salary.
    let net_salary = gross_income - insurance_deduction;

    PayrollDetail {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        actual_work_days: stats.actual_work_days,
        base_salary,
        allowance_total,
        leave_pay,
        absence_fine,
        insurance_deduction,
        gross_income,
        net_salary,
    }
}
