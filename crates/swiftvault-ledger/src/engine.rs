//! The ledger engine
//!
//! `LedgerEngine` orchestrates the wallet store and the idempotency cache.
//! It enforces every business invariant and is the sole mutator of both.
//! Callers hand it already-parsed, already-type-checked arguments; field
//! shape validation belongs to the transport layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use swiftvault_core::{Amount, Currency, IdempotencyKey, Transaction, Wallet, WalletId};

use crate::error::{LedgerError, Result};
use crate::idempotency::{CachedOutcome, IdempotencyCache};
use crate::store::WalletStore;

/// The two records produced by a transfer, one per wallet
///
/// The legs reference each other through their metadata but are otherwise
/// independent records; there is no shared transfer entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub sender: Transaction,
    pub receiver: Transaction,
}

/// A wallet together with its full history, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletHistory {
    pub wallet: Wallet,
    pub transactions: Vec<Transaction>,
}

/// Orchestrates wallet storage and idempotent replay
///
/// Thread-safe and cheap to clone. Every mutating operation acquires the
/// idempotency write lock and then the store write lock, in that order, and
/// holds both to completion. Each operation is therefore a single critical
/// section: no concurrent call observes a balance mid-update, and of two
/// concurrent calls bearing the same fresh key exactly one executes the
/// mutating path while the other waits for and replays its outcome.
#[derive(Clone, Default)]
pub struct LedgerEngine {
    wallets: Arc<RwLock<WalletStore>>,
    idempotency: Arc<RwLock<IdempotencyCache>>,
}

impl LedgerEngine {
    /// Create an engine over fresh, empty state
    pub fn new() -> Self {
        Self {
            wallets: Arc::new(RwLock::new(WalletStore::new())),
            idempotency: Arc::new(RwLock::new(IdempotencyCache::new())),
        }
    }

    /// Create a new wallet with a zero balance and an empty history
    ///
    /// Every call creates a distinct wallet; creation has no idempotency key.
    pub async fn create_wallet(&self, currency: Currency) -> Wallet {
        let mut wallets = self.wallets.write().await;

        let mut wallet = Wallet::new(currency);
        // Identifiers are drawn from a finite word list; re-roll on collision.
        while wallets.contains(&wallet.id) {
            wallet.id = WalletId::generate();
        }
        wallets.put(wallet.clone());

        tracing::info!(wallet_id = %wallet.id, currency = %wallet.currency, "Wallet created");

        wallet
    }

    /// Credit a wallet with external funds
    ///
    /// Returns the FUND transaction. With an idempotency key, a repeated
    /// call replays the original transaction without touching any state.
    pub async fn fund(
        &self,
        wallet_id: &WalletId,
        amount: Amount,
        idempotency_key: Option<IdempotencyKey>,
    ) -> Result<Transaction> {
        let mut idempotency = self.idempotency.write().await;
        let mut wallets = self.wallets.write().await;

        if let Some(key) = &idempotency_key {
            match idempotency.lookup(key) {
                Some(CachedOutcome::Fund(tx)) => return Ok(tx.clone()),
                Some(CachedOutcome::Transfer(_)) => {
                    return Err(LedgerError::IdempotencyConflict {
                        key: key.to_string(),
                    })
                }
                None => {}
            }
        }

        let wallet = wallets
            .get_mut(wallet_id)
            .ok_or_else(|| LedgerError::WalletNotFound {
                wallet_id: wallet_id.to_string(),
            })?;

        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount {
                message: "Amount must be positive".to_string(),
            });
        }

        let new_balance = wallet
            .credit(amount)
            .ok_or_else(|| LedgerError::InvalidAmount {
                message: "Balance overflow".to_string(),
            })?;

        let tx = Transaction::fund(wallet.id.clone(), amount, new_balance);
        wallets.append_transaction(tx.clone());

        if let Some(key) = idempotency_key {
            idempotency.store(key, CachedOutcome::Fund(tx.clone()));
        }

        tracing::info!(
            wallet_id = %tx.wallet_id,
            amount = %amount,
            balance = %new_balance,
            "Wallet funded"
        );

        Ok(tx)
    }

    /// Move funds between two wallets
    ///
    /// Produces a TRANSFER_OUT record on the sender and a TRANSFER_IN record
    /// on the receiver. Value is conserved: the sum of the two balances is
    /// the same before and after. All checks precede all writes, so a failed
    /// call leaves both wallets untouched.
    pub async fn transfer(
        &self,
        from_wallet_id: &WalletId,
        to_wallet_id: &WalletId,
        amount: Amount,
        idempotency_key: Option<IdempotencyKey>,
    ) -> Result<TransferReceipt> {
        let mut idempotency = self.idempotency.write().await;
        let mut wallets = self.wallets.write().await;

        if let Some(key) = &idempotency_key {
            match idempotency.lookup(key) {
                Some(CachedOutcome::Transfer(receipt)) => return Ok(receipt.clone()),
                Some(CachedOutcome::Fund(_)) => {
                    return Err(LedgerError::IdempotencyConflict {
                        key: key.to_string(),
                    })
                }
                None => {}
            }
        }

        // Sender is checked before receiver, so a missing sender is reported
        // even when the receiver is also missing.
        let sender_balance = wallets
            .get(from_wallet_id)
            .ok_or_else(|| LedgerError::WalletNotFound {
                wallet_id: from_wallet_id.to_string(),
            })?
            .balance;

        let receiver_balance = wallets
            .get(to_wallet_id)
            .ok_or_else(|| LedgerError::WalletNotFound {
                wallet_id: to_wallet_id.to_string(),
            })?
            .balance;

        if from_wallet_id == to_wallet_id {
            return Err(LedgerError::SameWalletTransfer {
                wallet_id: from_wallet_id.to_string(),
            });
        }

        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount {
                message: "Transfer amount must be positive".to_string(),
            });
        }

        if sender_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                available: sender_balance.0,
                required: amount.0,
            });
        }

        if receiver_balance.checked_add(amount).is_none() {
            return Err(LedgerError::InvalidAmount {
                message: "Balance overflow".to_string(),
            });
        }

        // All checks passed; the writes below cannot fail.
        let sender_balance_after = wallets
            .get_mut(from_wallet_id)
            .and_then(|w| w.debit(amount))
            .ok_or_else(|| LedgerError::InsufficientBalance {
                available: sender_balance.0,
                required: amount.0,
            })?;

        let receiver_balance_after = wallets
            .get_mut(to_wallet_id)
            .and_then(|w| w.credit(amount))
            .ok_or_else(|| LedgerError::InvalidAmount {
                message: "Balance overflow".to_string(),
            })?;

        let sender_tx = Transaction::transfer_out(
            from_wallet_id.clone(),
            to_wallet_id.clone(),
            amount,
            sender_balance_after,
        );
        let receiver_tx = Transaction::transfer_in(
            to_wallet_id.clone(),
            from_wallet_id.clone(),
            amount,
            receiver_balance_after,
        );

        wallets.append_transaction(sender_tx.clone());
        wallets.append_transaction(receiver_tx.clone());

        let receipt = TransferReceipt {
            sender: sender_tx,
            receiver: receiver_tx,
        };

        if let Some(key) = idempotency_key {
            idempotency.store(key, CachedOutcome::Transfer(receipt.clone()));
        }

        tracing::info!(
            from_wallet_id = %from_wallet_id,
            to_wallet_id = %to_wallet_id,
            amount = %amount,
            "Transfer completed"
        );

        Ok(receipt)
    }

    /// A wallet and its transaction history, newest first
    ///
    /// Records with equal timestamps keep their append order (stable sort).
    pub async fn get_wallet(&self, wallet_id: &WalletId) -> Result<WalletHistory> {
        let wallets = self.wallets.read().await;

        let wallet = wallets
            .get(wallet_id)
            .cloned()
            .ok_or_else(|| LedgerError::WalletNotFound {
                wallet_id: wallet_id.to_string(),
            })?;

        let mut transactions = wallets.transactions(wallet_id);
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(WalletHistory {
            wallet,
            transactions,
        })
    }

    /// All wallets, in creation order
    pub async fn list_wallets(&self) -> Vec<Wallet> {
        self.wallets.read().await.list()
    }
}
