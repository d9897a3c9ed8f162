//! Payroll and Quotation Engine for land-survey offices
//!
//! This crate provides the calculation core of a cadastral service office:
//! attendance-driven payroll (monthly, daily and product-paid staff),
//! area-tiered technician commissions, and quotation pricing with
//! auto-computed derived line items.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
