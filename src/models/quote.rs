//! Quotation line-item models.
//!
//! Line items carry an explicit [`LineItemKind`] so the pricing calculator
//! pattern-matches on kind instead of on opaque item-id strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Urban/rural land classification affecting the quotation base price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    /// Urban parcel; uses the urban price column.
    Urban,
    /// Rural parcel; uses the rural price column.
    Rural,
}

/// Which fee template a quotation is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteKind {
    /// Survey-and-drawing service.
    Drawing,
    /// New-certificate (title paperwork) service.
    NewCertificate,
}

/// The pricing behavior of a quotation line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    /// A configured flat fee; the calculator never touches its price.
    Flat,
    /// The commune-minutes signing fee. Flat-priced, but it feeds the
    /// inspection-fee formula, so it carries its own kind.
    CommuneMinutes,
    /// Survey fee derived from the area rule table and zone type.
    AutoSurvey,
    /// Drawing-inspection fee: 25% of the enabled survey and commune-minutes
    /// fees.
    AutoInspection,
    /// Transfer tax: `area * 2.5 * location unit price`.
    AutoTransferTax,
    /// Land-use-change tax: `area * location unit price`.
    AutoLandUseTax,
}

impl LineItemKind {
    /// Returns true if the calculator overwrites this item's price.
    pub fn is_auto(&self) -> bool {
        matches!(
            self,
            Self::AutoSurvey | Self::AutoInspection | Self::AutoTransferTax | Self::AutoLandUseTax
        )
    }
}

/// One priced line in a quotation.
///
/// Disabled items are retained for later re-enabling but excluded from the
/// quote total and from the inspection-fee inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Unique identifier within the quote.
    pub id: String,
    /// Display name of the fee.
    pub name: String,
    /// The pricing behavior of this item.
    pub kind: LineItemKind,
    /// Current price. Auto items are overwritten on every recompute pass.
    pub price: Decimal,
    /// Whether the item counts toward the total.
    pub enabled: bool,
    /// True for ad-hoc items added by the user rather than the template.
    #[serde(default)]
    pub custom: bool,
}
