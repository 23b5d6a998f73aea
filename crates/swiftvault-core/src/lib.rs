//! SwiftVault Core - Canonical types and entities for the SwiftVault ledger
//!
//! This crate holds the foundational value types and entities:
//! - WalletId / TransactionId / IdempotencyKey: identifier newtypes
//! - Amount: non-negative value in the currency's smallest denomination
//! - Wallet: an account holding a balance in one currency
//! - Transaction: an immutable record of a single balance-affecting event
//!
//! # Invariants
//!
//! 1. Balances never go negative (checked arithmetic on `Amount`)
//! 2. `updated_at >= created_at` on every wallet
//! 3. Transactions are immutable once constructed
//! 4. A transaction's `balance_after` is snapshotted at creation, never recomputed

pub mod transaction;
pub mod types;
pub mod wallet;

pub use transaction::*;
pub use types::*;
pub use wallet::*;
