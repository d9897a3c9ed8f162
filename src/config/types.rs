//! Configuration types for the office.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::calculation::{AreaRange, find_overlap};
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollPolicy, QuoteItem, QuoteKind, WeekendPolicy};

/// Identifying information about the office.
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeMetadata {
    /// The registered office name.
    pub name: String,
    /// The office street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
}

/// The document id scheme for generated quotations.
#[derive(Debug, Clone, Deserialize)]
pub struct IdConfig {
    /// Leading letters of the id (e.g., "BG").
    pub prefix: String,
    /// Whether parts are joined with the separator.
    pub use_separator: bool,
    /// The separator between id parts.
    pub separator: String,
    /// Whether a YYYYMMDD date stamp is included.
    pub include_date: bool,
    /// Minimum digits of the zero-padded sequence number.
    pub number_length: u32,
}

/// office.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeFileConfig {
    /// Office identity.
    pub office: OfficeMetadata,
    /// Quotation document id scheme.
    pub quote_id: IdConfig,
}

/// payroll.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollFileConfig {
    /// The payroll policy applied to every calculation.
    pub policy: PayrollPolicy,
    /// Which weekend days the office works.
    pub weekend: WeekendPolicy,
}

/// One tier of the technician commission table.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionRule {
    /// Rule identifier (e.g., "R2").
    pub id: String,
    /// Lower area bound in square meters (inclusive).
    pub min_area: Decimal,
    /// Upper area bound in square meters (inclusive).
    pub max_area: Decimal,
    /// Flat commission paid for a completed case in this tier.
    pub amount: Decimal,
}

impl AreaRange for CommissionRule {
    fn id(&self) -> &str {
        &self.id
    }
    fn min_area(&self) -> Decimal {
        self.min_area
    }
    fn max_area(&self) -> Decimal {
        self.max_area
    }
}

/// commission.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// Commission tiers, authored without overlap.
    pub rules: Vec<CommissionRule>,
}

/// One tier of the quotation survey-fee table.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteAreaRule {
    /// Rule identifier (e.g., "Q3").
    pub id: String,
    /// Lower area bound in square meters (inclusive).
    pub min_area: Decimal,
    /// Upper area bound in square meters (inclusive).
    pub max_area: Decimal,
    /// Survey fee for urban parcels in this tier.
    pub price_urban: Decimal,
    /// Survey fee for rural parcels in this tier.
    pub price_rural: Decimal,
}

impl AreaRange for QuoteAreaRule {
    fn id(&self) -> &str {
        &self.id
    }
    fn min_area(&self) -> Decimal {
        self.min_area
    }
    fn max_area(&self) -> Decimal {
        self.max_area
    }
}

/// quote_rules.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRulesConfig {
    /// Survey-fee tiers, authored without overlap.
    pub rules: Vec<QuoteAreaRule>,
}

/// quote_items.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteItemsConfig {
    /// Starting line items per quotation kind.
    pub templates: HashMap<QuoteKind, Vec<QuoteItem>>,
}

/// The complete office configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in an office configuration directory.
#[derive(Debug, Clone)]
pub struct OfficeConfig {
    office: OfficeMetadata,
    quote_id: IdConfig,
    payroll_policy: PayrollPolicy,
    weekend: WeekendPolicy,
    commission_rules: Vec<CommissionRule>,
    quote_rules: Vec<QuoteAreaRule>,
    templates: HashMap<QuoteKind, Vec<QuoteItem>>,
}

impl OfficeConfig {
    /// Creates a new OfficeConfig from its component parts, rejecting
    /// rule tables with overlapping ranges.
    pub fn new(
        office: OfficeFileConfig,
        payroll: PayrollFileConfig,
        commission: CommissionConfig,
        quote_rules: QuoteRulesConfig,
        quote_items: QuoteItemsConfig,
    ) -> EngineResult<Self> {
        Self::check_overlap("commission", &commission.rules)?;
        Self::check_overlap("quote_rules", &quote_rules.rules)?;

        Ok(Self {
            office: office.office,
            quote_id: office.quote_id,
            payroll_policy: payroll.policy,
            weekend: payroll.weekend,
            commission_rules: commission.rules,
            quote_rules: quote_rules.rules,
            templates: quote_items.templates,
        })
    }

    fn check_overlap<R: AreaRange>(table: &str, rules: &[R]) -> EngineResult<()> {
        if let Some((a, b)) = find_overlap(rules) {
            return Err(EngineError::OverlappingRules {
                table: table.to_string(),
                first: a.id().to_string(),
                second: b.id().to_string(),
            });
        }
        Ok(())
    }

    /// Returns the office identity.
    pub fn office(&self) -> &OfficeMetadata {
        &self.office
    }

    /// Returns the quotation id scheme.
    pub fn quote_id(&self) -> &IdConfig {
        &self.quote_id
    }

    /// Returns the payroll policy.
    pub fn payroll_policy(&self) -> &PayrollPolicy {
        &self.payroll_policy
    }

    /// Returns the weekend working policy.
    pub fn weekend(&self) -> WeekendPolicy {
        self.weekend
    }

    /// Returns the commission table.
    pub fn commission_rules(&self) -> &[CommissionRule] {
        &self.commission_rules
    }

    /// Returns the quotation survey-fee table.
    pub fn quote_rules(&self) -> &[QuoteAreaRule] {
        &self.quote_rules
    }

    /// Returns the starting line items for a quotation kind.
    pub fn template(&self, kind: QuoteKind) -> EngineResult<&[QuoteItem]> {
        self.templates
            .get(&kind)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::TemplateNotFound {
                kind: match kind {
                    QuoteKind::Drawing => "drawing".to_string(),
                    QuoteKind::NewCertificate => "new_certificate".to_string(),
                },
            })
    }
}
