//! Area rule-table lookup.
//!
//! Both the commission table and the quotation price table are ordered
//! lists of disjoint area ranges. One generic lookup serves both via the
//! [`AreaRange`] trait.

use rust_decimal::Decimal;

/// A numeric area range in a rule table.
pub trait AreaRange {
    /// The range's identifier, used in overlap diagnostics.
    fn id(&self) -> &str;
    /// Lower bound in square meters (inclusive).
    fn min_area(&self) -> Decimal;
    /// Upper bound in square meters (inclusive).
    fn max_area(&self) -> Decimal;

    /// Returns true if `area` falls within this range.
    fn contains(&self, area: Decimal) -> bool {
        self.min_area() <= area && area <= self.max_area()
    }
}

/// Finds the rule covering `area`.
///
/// Linear scan returning the first range where
/// `min_area <= area <= max_area`. Tables are authored without overlap;
/// if one slips through, first-match-wins is the defined tie-break.
///
/// Returns `None` when no range matches. This is a silent "not found",
/// not an error; callers choose the fallback (typically zero) explicitly.
///
/// # Example
///
/// ```
/// use cadastral_engine::calculation::lookup_rule;
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
/// let rule = lookup_rule(&rules, Decimal::from(50)).unwrap();
/// assert_eq!(rule.amount, Decimal::from(200_000));
/// assert!(lookup_rule(&rules, Decimal::from(101)).is_none());
/// ```
pub fn lookup_rule<R: AreaRange>(table: &[R], area: Decimal) -> Option<&R> {
    table.iter().find(|range| range.contains(area))
}

/// Returns the first pair of overlapping ranges in a table, if any.
///
/// Used by configuration validation to uphold the non-overlap invariant
/// rule tables are authored under.
pub fn find_overlap<R: AreaRange>(table: &[R]) -> Option<(&R, &R)> {
    for (i, a) in table.iter().enumerate() {
        for b in &table[i + 1..] {
            if a.min_area() <= b.max_area() && b.min_area() <= a.max_area() {
                return Some((a, b));
            }
        }
    }
    None
}
