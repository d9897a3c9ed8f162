//! Technician commission calculation.
//!
//! Commissions are flat amounts tiered by parcel area. The amount is
//! assigned to a case from the commission rule table when the technician
//! takes it on, and paid out once the case completes.

use rust_decimal::Decimal;

use crate::config::CommissionRule;
use crate::models::Project;

use super::rule_table::lookup_rule;

/// Looks up the commission amount for a parcel area.
///
/// Returns `None` when the area falls outside every configured range;
/// callers decide whether that means zero commission or a data problem.
///
/// # Example
///
/// ```
/// use cadastral_engine::calculation::commission_for_area;
/// use cadastral_engine::config::CommissionRule;
/// use rust_decimal::Decimal;
///
/// let rules = vec![CommissionRule {
///     id: "R1".to_string(),
///     min_area: Decimal::ZERO,
///     max_area: Decimal::from(100),
///     amount: Decimal::from(200_000),
/// }];
///
/// assert_eq!(commission_for_area(&rules, Decimal::from(80)), Some(Decimal::from(200_000)));
/// assert_eq!(commission_for_area(&rules, Decimal::from(500)), None);
/// ```
pub fn commission_for_area(rules: &[CommissionRule], area: Decimal) -> Option<Decimal> {
    lookup_rule(rules, area).map(|rule| rule.amount)
}

/// Counts the completed cases attributed to a technician.
///
/// Drives `PerCase` allowances.
pub fn completed_case_count(projects: &[Project], technician_id: &str) -> u32 {
    projects
        .iter()
        .filter(|p| p.is_completed_by(technician_id))
        .count() as u32
}

/// Sums the commissions of a technician's completed cases.
///
/// Cases with no commission recorded contribute zero; a product-paid
/// technician with sloppy case data gets a visibly low number rather
/// than an error.
pub fn commission_total(projects: &[Project], technician_id: &str) -> Decimal {
    projects
        .iter()
        .filter(|p| p.is_completed_by(technician_id))
        .map(|p| p.commission.unwrap_or(Decimal::ZERO))
        .sum()
}
