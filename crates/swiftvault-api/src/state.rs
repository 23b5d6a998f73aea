//! Application state shared across handlers

use swiftvault_ledger::LedgerEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The ledger of record
    pub engine: LedgerEngine,
}

impl AppState {
    /// Create a new application state over a fresh ledger
    pub fn new(engine: LedgerEngine) -> Self {
        Self { engine }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LedgerEngine::new())
    }
}
