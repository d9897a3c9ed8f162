//! Configuration loading and management for the Payroll and Quotation Engine.
//!
//! This module provides functionality to load office configuration from YAML
//! files, including the payroll policy, the commission and survey-fee rule
//! tables, and the quotation line-item templates.
//!
//! # Example
//!
//! ```no_run
//! use cadastral_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/office").unwrap();
//! println!("Loaded office: {}", config.office().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CommissionConfig, CommissionRule, IdConfig, OfficeConfig, OfficeFileConfig, OfficeMetadata,
    PayrollFileConfig, QuoteAreaRule, QuoteItemsConfig, QuoteRulesConfig,
};
