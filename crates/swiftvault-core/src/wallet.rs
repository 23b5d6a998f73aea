//! Wallet entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, Currency, WalletId};

/// An account holding a non-negative balance in one currency
///
/// Wallets are created once, mutated in place by funding and transfers, and
/// never deleted. The currency is fixed at creation. Every balance mutation
/// also refreshes `updated_at`, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet identifier, unique and human-readable
    pub id: WalletId,
    /// Currency code, immutable after creation
    pub currency: Currency,
    /// Current balance in the currency's smallest denomination
    pub balance: Amount,
    /// When the wallet was created
    pub created_at: DateTime<Utc>,
    /// When the balance last changed (non-decreasing)
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a new wallet with a fresh identifier and a zero balance
    pub fn new(currency: Currency) -> Self {
        let now = Utc::now();
        Self {
            id: WalletId::generate(),
            currency,
            balance: Amount::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Increase the balance, refreshing `updated_at`
    ///
    /// Returns the new balance, or `None` on overflow (balance unchanged).
    pub fn credit(&mut self, amount: Amount) -> Option<Amount> {
        let new_balance = self.balance.checked_add(amount)?;
        self.balance = new_balance;
        self.updated_at = Utc::now();
        Some(new_balance)
    }

    /// Decrease the balance, refreshing `updated_at`
    ///
    /// Returns the new balance, or `None` when the balance is insufficient
    /// (balance unchanged). The balance can never go negative.
    pub fn debit(&mut self, amount: Amount) -> Option<Amount> {
        let new_balance = self.balance.checked_sub(amount)?;
        self.balance = new_balance;
        self.updated_at = Utc::now();
        Some(new_balance)
    }
}
