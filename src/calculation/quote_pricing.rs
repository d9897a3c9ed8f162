//! Quotation pricing with auto-computed line items.
//!
//! A quotation is a list of line items; some are flat fees, some are
//! derived from the parcel (area, zone, location unit price). The
//! calculator is a pure pass: it takes the current items and the parcel
//! inputs and returns the items with every auto price recomputed, so
//! running it twice with the same inputs changes nothing.

use rust_decimal::Decimal;

use crate::config::QuoteAreaRule;
use crate::models::{LineItemKind, QuoteItem, ZoneType};

use super::rule_table::lookup_rule;

/// The drawing-inspection fee rate: 25% of its input fees.
pub fn inspection_rate() -> Decimal {
    Decimal::new(25, 2)
}

/// The transfer-tax area multiplier.
fn transfer_tax_factor() -> Decimal {
    Decimal::new(25, 1)
}

/// Looks up the survey fee for a parcel.
///
/// Selects the price column matching the zone type from the rule covering
/// the area. Returns `None` when the area falls outside every configured
/// range; the pricing pass treats that as a zero fee.
///
/// # Example
///
/// ```
/// use cadastral_engine::calculation::survey_price;
/// use cadastral_engine::config::QuoteAreaRule;
/// use cadastral_engine::models::ZoneType;
/// use rust_decimal::Decimal;
///
/// let rules = vec![QuoteAreaRule {
///     id: "Q2".to_string(),
///     min_area: Decimal::from(100),
///     max_area: Decimal::from(300),
///     price_urban: Decimal::from(1_224_000),
///     price_rural: Decimal::from(836_000),
/// }];
///
/// let area = Decimal::from(150);
/// assert_eq!(survey_price(&rules, area, ZoneType::Urban), Some(Decimal::from(1_224_000)));
/// assert_eq!(survey_price(&rules, area, ZoneType::Rural), Some(Decimal::from(836_000)));
/// ```
pub fn survey_price(rules: &[QuoteAreaRule], area: Decimal, zone: ZoneType) -> Option<Decimal> {
    lookup_rule(rules, area).map(|rule| match zone {
        ZoneType::Urban => rule.price_urban,
        ZoneType::Rural => rule.price_rural,
    })
}

/// Recomputes every auto-priced line item from the parcel inputs.
///
/// Flat items pass through untouched. Auto items are repriced in
/// dependency order: the survey fee first (it feeds the inspection fee),
/// then the rest. A disabled item still gets a fresh price so re-enabling
/// it shows the current figure, but it contributes nothing to the
/// inspection inputs or the total.
///
/// Missing kinds are tolerated: a template without an inspection item
/// simply prices nothing for it.
pub fn compute_quote_items(
    items: &[QuoteItem],
    area: Decimal,
    zone: ZoneType,
    location_unit_price: Decimal,
    rules: &[QuoteAreaRule],
) -> Vec<QuoteItem> {
    let mut items = items.to_vec();

    // Survey fee first; an area outside every tier prices to zero.
    let survey = survey_price(rules, area, zone).unwrap_or(Decimal::ZERO);
    for item in items.iter_mut().filter(|i| i.kind == LineItemKind::AutoSurvey) {
        item.price = survey;
    }

    // The inspection fee reads the freshly-priced survey item.
    let inspection_base: Decimal = items
        .iter()
        .filter(|i| {
            i.enabled
                && matches!(
                    i.kind,
                    LineItemKind::AutoSurvey | LineItemKind::CommuneMinutes
                )
        })
        .map(|i| i.price)
        .sum();

    for item in items.iter_mut() {
        match item.kind {
            LineItemKind::AutoInspection => item.price = inspection_base * inspection_rate(),
            LineItemKind::AutoTransferTax => {
                item.price = area * transfer_tax_factor() * location_unit_price;
            }
            LineItemKind::AutoLandUseTax => item.price = area * location_unit_price,
            LineItemKind::Flat | LineItemKind::CommuneMinutes | LineItemKind::AutoSurvey => {}
        }
    }

    items
}

/// Sums the enabled line items.
pub fn quote_total(items: &[QuoteItem]) -> Decimal {
    items
        .iter()
        .filter(|i| i.enabled)
        .map(|i| i.price)
        .sum()
}
