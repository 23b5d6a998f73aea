//! Keyed storage for wallets and their transaction logs
//!
//! The store is the single source of truth for wallets and histories. It is
//! a plain struct with no interior locking; the engine guards it behind a
//! write lock and is its only mutator. No operation ever removes an entry.

use std::collections::HashMap;

use swiftvault_core::{Transaction, Wallet, WalletId};

/// Wallet table plus per-wallet append-only transaction logs
#[derive(Debug, Default)]
pub struct WalletStore {
    /// Wallet records keyed by id
    wallets: HashMap<WalletId, Wallet>,
    /// Insertion order of wallet ids, so listing is deterministic
    order: Vec<WalletId>,
    /// Per-wallet transaction logs, in append order
    transactions: HashMap<WalletId, Vec<Transaction>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a wallet, initializing its empty transaction log
    pub fn put(&mut self, wallet: Wallet) {
        if !self.wallets.contains_key(&wallet.id) {
            self.order.push(wallet.id.clone());
            self.transactions.insert(wallet.id.clone(), Vec::new());
        }
        self.wallets.insert(wallet.id.clone(), wallet);
    }

    pub fn get(&self, id: &WalletId) -> Option<&Wallet> {
        self.wallets.get(id)
    }

    pub fn get_mut(&mut self, id: &WalletId) -> Option<&mut Wallet> {
        self.wallets.get_mut(id)
    }

    pub fn contains(&self, id: &WalletId) -> bool {
        self.wallets.contains_key(id)
    }

    /// All wallets, in insertion order
    pub fn list(&self) -> Vec<Wallet> {
        self.order
            .iter()
            .filter_map(|id| self.wallets.get(id))
            .cloned()
            .collect()
    }

    /// Append a transaction to its wallet's log
    ///
    /// The owning wallet must already be in the table; the engine only
    /// appends after a successful lookup.
    pub fn append_transaction(&mut self, tx: Transaction) {
        self.transactions
            .entry(tx.wallet_id.clone())
            .or_default()
            .push(tx);
    }

    /// Every transaction ever appended for a wallet, in append order
    pub fn transactions(&self, wallet_id: &WalletId) -> Vec<Transaction> {
        self.transactions
            .get(wallet_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }
}
