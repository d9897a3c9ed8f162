//! Calculation logic for the Payroll and Quotation Engine.
//!
//! This module contains all the calculation functions: area rule-table
//! lookup, attendance statistics with implicit-day resolution, technician
//! commission, the full payroll breakdown, quotation pricing with
//! auto-computed line items, and document id formatting.

mod attendance_stats;
mod commission;
mod id_gen;
mod payroll;
mod quote_pricing;
mod rule_table;

pub use attendance_stats::{EffectiveDay, compute_month_stats, effective_status};
pub use commission::{commission_for_area, commission_total, completed_case_count};
pub use id_gen::format_document_id;
pub use payroll::compute_payroll;
pub use quote_pricing::{compute_quote_items, inspection_rate, quote_total, survey_price};
pub use rule_table::{AreaRange, find_overlap, lookup_rule};
