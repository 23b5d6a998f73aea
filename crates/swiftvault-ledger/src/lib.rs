//! SwiftVault Ledger - single-process ledger of record
//!
//! The ledger is:
//! - Account-keyed by WalletId
//! - Append-only (transaction records are never updated or deleted)
//! - Idempotent (client-supplied keys replay a prior outcome verbatim)
//! - Atomic (every operation is one critical section; a failed call leaves
//!   all state exactly as it found it)
//!
//! # Invariants
//!
//! 1. No negative balances
//! 2. A transfer conserves value: total debits equal total credits
//! 3. Every transaction snapshots the balance it produced
//! 4. A retried operation is applied at most once

pub mod engine;
pub mod error;
pub mod idempotency;
pub mod store;

pub use engine::{LedgerEngine, TransferReceipt, WalletHistory};
pub use error::{LedgerError, Result};
pub use idempotency::{CachedOutcome, IdempotencyCache};
pub use store::WalletStore;
