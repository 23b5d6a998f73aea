//! Idempotency cache
//!
//! Maps a client-supplied key to the outcome it originally produced. Once a
//! key is stored its outcome is permanent for the lifetime of the process:
//! no expiry, no overwrite. A hit short-circuits all validation and
//! mutation, so a retried request replays the original outcome verbatim
//! regardless of current state.
//!
//! Keys live in one global space shared by all operation types. Growth is
//! unbounded; bounded retention would be a behavior change and is left as a
//! future enhancement.

use std::collections::HashMap;

use swiftvault_core::{IdempotencyKey, Transaction};

use crate::engine::TransferReceipt;

/// The replayable outcome of a keyed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedOutcome {
    Fund(Transaction),
    Transfer(TransferReceipt),
}

/// Key-to-outcome table, first write wins
#[derive(Debug, Default)]
pub struct IdempotencyCache {
    outcomes: HashMap<IdempotencyKey, CachedOutcome>,
}

impl IdempotencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &IdempotencyKey) -> Option<&CachedOutcome> {
        self.outcomes.get(key)
    }

    /// Record an outcome under a key
    ///
    /// A key that is already present keeps its original outcome.
    pub fn store(&mut self, key: IdempotencyKey, outcome: CachedOutcome) {
        self.outcomes.entry(key).or_insert(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
