//! Document id formatting.
//!
//! Quotations and payroll exports carry office-configured document ids
//! like `BG-20260827-0001`: a prefix, an optional date stamp and a
//! zero-padded sequence number, optionally joined by a separator.

use chrono::NaiveDate;

use crate::config::IdConfig;

/// Formats a document id from the office id scheme.
///
/// The sequence number is zero-padded to `number_length` digits; a
/// sequence wider than that keeps all its digits rather than truncating.
///
/// # Example
///
/// ```
/// use cadastral_engine::calculation::format_document_id;
/// use cadastral_engine::config::IdConfig;
/// use chrono::NaiveDate;
///
/// let scheme = IdConfig {
///     prefix: "BG".to_string(),
///     use_separator: true,
///     separator: "-".to_string(),
///     include_date: true,
///     number_length: 4,
/// };
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// assert_eq!(format_document_id(&scheme, 1, date), "BG-20260827-0001");
/// ```
pub fn format_document_id(scheme: &IdConfig, sequence: u64, date: NaiveDate) -> String {
    let mut parts = vec![scheme.prefix.clone()];

    if scheme.include_date {
        parts.push(date.format("%Y%m%d").to_string());
    }

    parts.push(format!(
        "{:0width$}",
        sequence,
        width = scheme.number_length as usize
    ));

    let separator = if scheme.use_separator {
        scheme.separator.as_str()
    } else {
        ""
    };
    parts.join(separator)
}
