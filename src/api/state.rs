//! Application state for the Payroll and Quotation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::models::PayrollRecord;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded office configuration, the append-only finalized-payroll history,
/// and the quotation sequence counter.
#[derive(Clone)]
pub struct AppState {
    /// The loaded office configuration.
    config: Arc<ConfigLoader>,
    /// Finalized payroll months, append-only.
    history: Arc<RwLock<Vec<PayrollRecord>>>,
    /// Monotonic sequence for quotation document ids.
    quote_seq: Arc<AtomicU64>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            history: Arc::new(RwLock::new(Vec::new())),
            quote_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the finalized-payroll history.
    pub fn history(&self) -> &RwLock<Vec<PayrollRecord>> {
        &self.history
    }

    /// Reserves and returns the next quotation sequence number, starting at 1.
    pub fn next_quote_seq(&self) -> u64 {
        self.quote_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_quote_seq_is_monotonic() {
        let config = ConfigLoader::load("./config/office").expect("Failed to load config");
        let state = AppState::new(config);

        assert_eq!(state.next_quote_seq(), 1);
        assert_eq!(state.next_quote_seq(), 2);

        // Clones share the counter.
        let clone = state.clone();
        assert_eq!(clone.next_quote_seq(), 3);
        assert_eq!(state.next_quote_seq(), 4);
    }
}
