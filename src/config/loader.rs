//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading office
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollPolicy, QuoteItem, QuoteKind, WeekendPolicy};

use super::types::{
    CommissionConfig, CommissionRule, IdConfig, OfficeConfig, OfficeFileConfig, OfficeMetadata,
    PayrollFileConfig, QuoteAreaRule, QuoteItemsConfig, QuoteRulesConfig,
};

/// Loads and provides access to office configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the payroll policy, rule tables, and
/// quotation templates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/office/
/// ├── office.yaml       # Office identity and id scheme
/// ├── payroll.yaml      # Payroll policy and weekend policy
/// ├── commission.yaml   # Technician commission tiers
/// ├── quote_rules.yaml  # Survey-fee tiers by area and zone
/// └── quote_items.yaml  # Starting line items per quotation kind
/// ```
///
/// # Example
///
/// ```no_run
/// use cadastral_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/office").unwrap();
/// println!("Loaded office: {}", loader.office().name);
/// println!("Standard work days: {}", loader.payroll_policy().standard_work_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OfficeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/office")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Either rule table contains overlapping area ranges
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cadastral_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/office")?;
    /// # Ok::<(), cadastral_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let office = Self::load_yaml::<OfficeFileConfig>(&path.join("office.yaml"))?;
        let payroll = Self::load_yaml::<PayrollFileConfig>(&path.join("payroll.yaml"))?;
        let commission = Self::load_yaml::<CommissionConfig>(&path.join("commission.yaml"))?;
        let quote_rules = Self::load_yaml::<QuoteRulesConfig>(&path.join("quote_rules.yaml"))?;
        let quote_items = Self::load_yaml::<QuoteItemsConfig>(&path.join("quote_items.yaml"))?;

        let config = OfficeConfig::new(office, payroll, commission, quote_rules, quote_items)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying office configuration.
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// Returns the office identity.
    pub fn office(&self) -> &OfficeMetadata {
        self.config.office()
    }

    /// Returns the quotation document id scheme.
    pub fn quote_id(&self) -> &IdConfig {
        self.config.quote_id()
    }

    /// Returns the payroll policy.
    pub fn payroll_policy(&self) -> &PayrollPolicy {
        self.config.payroll_policy()
    }

    /// Returns the weekend working policy.
    pub fn weekend(&self) -> WeekendPolicy {
        self.config.weekend()
    }

    /// Returns the commission table.
    pub fn commission_rules(&self) -> &[CommissionRule] {
        self.config.commission_rules()
    }

    /// Returns the quotation survey-fee table.
    pub fn quote_rules(&self) -> &[QuoteAreaRule] {
        self.config.quote_rules()
    }

    /// Gets the starting line items for a quotation kind.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cadastral_engine::config::ConfigLoader;
    /// use cadastral_engine::models::QuoteKind;
    ///
    /// let loader = ConfigLoader::load("./config/office")?;
    /// let items = loader.template(QuoteKind::Drawing)?;
    /// println!("Drawing template has {} items", items.len());
    /// # Ok::<(), cadastral_engine::error::EngineError>(())
    /// ```
    pub fn template(&self, kind: QuoteKind) -> EngineResult<&[QuoteItem]> {
        self.config.template(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InsuranceBase, LineItemKind};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/office"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.office().name, "Cadastral Survey Office No. 1");
    }

    #[test]
    fn test_payroll_policy_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let policy = loader.payroll_policy();

        assert_eq!(policy.standard_work_days, 26);
        assert_eq!(policy.leave_pay_percent, dec("100"));
        assert_eq!(policy.absence_fine, dec("200000"));
        assert_eq!(policy.insurance_percent, dec("10.5"));
        assert_eq!(policy.insurance_base, InsuranceBase::Basic);
    }

    #[test]
    fn test_weekend_policy_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let weekend = loader.weekend();

        assert!(weekend.work_on_saturday);
        assert!(!weekend.work_on_sunday);
    }

    #[test]
    fn test_commission_table_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = loader.commission_rules();

        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].id, "R1");
        assert_eq!(rules[0].amount, dec("200000"));
        assert_eq!(rules[3].id, "R4");
        assert_eq!(rules[3].max_area, dec("10000"));
    }

    #[test]
    fn test_quote_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = loader.quote_rules();

        assert_eq!(rules.len(), 8);
        assert_eq!(rules[0].id, "Q1");
        assert_eq!(rules[0].max_area, dec("99.9"));
        assert_eq!(rules[1].price_urban, dec("1224000"));
        assert_eq!(rules[1].price_rural, dec("836000"));
        assert_eq!(rules[7].max_area, dec("500000"));
    }

    #[test]
    fn test_drawing_template_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let items = loader.template(QuoteKind::Drawing).unwrap();

        assert!(
            items
                .iter()
                .any(|i| i.kind == LineItemKind::AutoSurvey && i.enabled)
        );
        assert!(items.iter().any(|i| i.kind == LineItemKind::AutoInspection));

        let minutes = items
            .iter()
            .find(|i| i.kind == LineItemKind::CommuneMinutes)
            .unwrap();
        assert_eq!(minutes.price, dec("1000000"));
    }

    #[test]
    fn test_new_certificate_template_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let items = loader.template(QuoteKind::NewCertificate).unwrap();

        assert!(
            items
                .iter()
                .any(|i| i.kind == LineItemKind::AutoTransferTax)
        );
        assert!(items.iter().any(|i| i.kind == LineItemKind::AutoLandUseTax));
    }

    #[test]
    fn test_quote_id_scheme_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let scheme = loader.quote_id();

        assert_eq!(scheme.prefix, "BG");
        assert!(scheme.use_separator);
        assert_eq!(scheme.separator, "-");
        assert!(scheme.include_date);
        assert_eq!(scheme.number_length, 4);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("office.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_overlapping_commission_rules_rejected() {
        let office = serde_yaml::from_str::<OfficeFileConfig>(
            r#"
office:
  name: Test Office
  address: Somewhere
  phone: "000"
  email: test@example.com
quote_id:
  prefix: BG
  use_separator: true
  separator: "-"
  include_date: true
  number_length: 4
"#,
        )
        .unwrap();
        let payroll = serde_yaml::from_str::<PayrollFileConfig>(
            r#"
policy:
  standard_work_days: 26
  leave_pay_percent: "100"
  absence_fine: "200000"
  insurance_percent: "10.5"
  insurance_base: basic
weekend:
  work_on_saturday: true
  work_on_sunday: false
"#,
        )
        .unwrap();
        let commission = serde_yaml::from_str::<CommissionConfig>(
            r#"
rules:
  - id: R1
    min_area: "0"
    max_area: "100"
    amount: "200000"
  - id: R2
    min_area: "100"
    max_area: "500"
    amount: "350000"
"#,
        )
        .unwrap();
        let quote_rules = serde_yaml::from_str::<QuoteRulesConfig>("rules: []").unwrap();
        let quote_items = serde_yaml::from_str::<QuoteItemsConfig>("templates: {}").unwrap();

        let result = OfficeConfig::new(office, payroll, commission, quote_rules, quote_items);
        match result {
            Err(EngineError::OverlappingRules {
                table,
                first,
                second,
            }) => {
                assert_eq!(table, "commission");
                assert_eq!(first, "R1");
                assert_eq!(second, "R2");
            }
            other => panic!("Expected OverlappingRules error, got {:?}", other),
        }
    }
}
