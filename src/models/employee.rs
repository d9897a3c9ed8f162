//! Employee model and related types.
//!
//! This module defines the Employee struct, the salary model variants and
//! the allowance configuration attached to each employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents how an employee's base salary is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// A contracted monthly salary, prorated by attendance against the
    /// standard work-day count.
    Monthly,
    /// A fixed rate per actual worked day.
    Daily,
    /// Paid per completed survey case (area-tiered commission).
    Product,
}

/// How often an allowance is applied within a pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceFrequency {
    /// Added once per pay period.
    Monthly,
    /// Multiplied by the actual worked-day count.
    Daily,
    /// Multiplied by the count of completed cases attributed to the employee.
    PerCase,
}

/// A recurring allowance attached to an employee (fuel, meals, phone, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allowance {
    /// Unique identifier for the allowance.
    pub id: String,
    /// Display name (e.g., "Fuel", "Lunch").
    pub name: String,
    /// How often the allowance applies.
    pub frequency: AllowanceFrequency,
    /// The allowance amount per application.
    pub amount: Decimal,
}

/// Represents an employee subject to payroll calculation.
///
/// Salary fields not matching the salary type are ignored; a missing salary
/// amount degrades to zero rather than producing an error, so a half-filled
/// employee record yields a visibly wrong number instead of a crash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// How the base salary is computed.
    pub salary_type: SalaryType,
    /// Contracted monthly salary, used when `salary_type` is `Monthly`.
    #[serde(default)]
    pub salary_monthly: Option<Decimal>,
    /// Rate per worked day, used when `salary_type` is `Daily`.
    #[serde(default)]
    pub salary_daily: Option<Decimal>,
    /// Recurring allowances.
    #[serde(default)]
    pub allowances: Vec<Allowance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_monthly_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Tran Van A",
            "salary_type": "monthly",
            "salary_monthly": "10000000",
            "allowances": []
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.salary_type, SalaryType::Monthly);
        assert_eq!(employee.salary_monthly, Some(dec("10000000")));
        assert_eq!(employee.salary_daily, None);
        assert!(employee.allowances.is_empty());
    }

    #[test]
    fn test_deserialize_product_employee_with_allowances() {
        let json = r#"{
            "id": "emp_002",
            "name": "Le Thi B",
            "salary_type": "product",
            "allowances": [
                { "id": "al_1", "name": "Fuel", "frequency": "daily", "amount": "50000" },
                { "id": "al_2", "name": "Phone", "frequency": "monthly", "amount": "200000" }
            ]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.salary_type, SalaryType::Product);
        assert_eq!(employee.allowances.len(), 2);
        assert_eq!(employee.allowances[0].frequency, AllowanceFrequency::Daily);
        assert_eq!(employee.allowances[1].amount, dec("200000"));
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = Employee {
            id: "emp_003".to_string(),
            name: "Pham Van C".to_string(),
            salary_type: SalaryType::Daily,
            salary_monthly: None,
            salary_daily: Some(dec("400000")),
            allowances: vec![Allowance {
                id: "al_1".to_string(),
                name: "Lunch".to_string(),
                frequency: AllowanceFrequency::PerCase,
                amount: dec("30000"),
            }],
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_salary_type_serialization() {
        assert_eq!(
            serde_json::to_string(&SalaryType::Monthly).unwrap(),
            "\"monthly\""
        );
        assert_eq!(
            serde_json::to_string(&SalaryType::Daily).unwrap(),
            "\"daily\""
        );
        assert_eq!(
            serde_json::to_string(&SalaryType::Product).unwrap(),
            "\"product\""
        );
    }

    #[test]
    fn test_allowance_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&AllowanceFrequency::PerCase).unwrap(),
            "\"per_case\""
        );
    }
}
