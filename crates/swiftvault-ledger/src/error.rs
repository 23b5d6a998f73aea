//! Errors that can occur in ledger operations
//!
//! Every failure is raised synchronously by the operation that detects it,
//! before any state is written. None are retried internally.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Wallet not found: {wallet_id}")]
    WalletNotFound { wallet_id: String },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Cannot transfer to the same wallet: {wallet_id}")]
    SameWalletTransfer { wallet_id: String },

    #[error("Insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: u64, required: u64 },

    #[error("Idempotency key {key} was already used for a different operation")]
    IdempotencyConflict { key: String },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
