//! Transaction entity
//!
//! A transaction is an immutable record of a single balance-affecting event
//! on one wallet. A transfer produces two records, one per wallet, that
//! reference each other through their metadata; there is no shared transfer
//! entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, TransactionId, WalletId};

/// What kind of balance movement a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// External funds credited to a wallet
    Fund,
    /// Debit leg of a transfer
    TransferOut,
    /// Credit leg of a transfer
    TransferIn,
}

/// Settlement status of a transaction
///
/// The engine only ever produces `Completed`. `Pending` and `Failed` are
/// reserved for asynchronous settlement and have no transition logic today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Free-form annotation attached to a transaction
///
/// Transfer legs carry the counterparty wallet id here; that reference is
/// the only link between the two records of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_wallet_id: Option<WalletId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_wallet_id: Option<WalletId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An immutable record of a single balance-affecting event on one wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Globally unique identifier
    pub id: TransactionId,
    /// The wallet this record belongs to
    pub wallet_id: WalletId,
    /// Kind of movement
    pub kind: TransactionKind,
    /// Signed amount: positive for FUND and TRANSFER_IN, negative for TRANSFER_OUT
    pub amount: i64,
    /// Wallet balance immediately after this transaction, snapshotted at creation
    pub balance_after: Amount,
    /// Settlement status, fixed at construction
    pub status: TransactionStatus,
    /// Optional annotation (counterparty, description)
    pub metadata: TransactionMetadata,
    /// When the record was created, immutable
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a completed funding of a wallet
    pub fn fund(wallet_id: WalletId, amount: Amount, balance_after: Amount) -> Self {
        Self {
            id: TransactionId::new(),
            wallet_id,
            kind: TransactionKind::Fund,
            amount: amount.as_signed(),
            balance_after,
            status: TransactionStatus::Completed,
            metadata: TransactionMetadata {
                from_wallet_id: None,
                to_wallet_id: None,
                description: Some("Wallet funded".to_string()),
            },
            created_at: Utc::now(),
        }
    }

    /// Record the debit leg of a completed transfer
    pub fn transfer_out(
        wallet_id: WalletId,
        to_wallet_id: WalletId,
        amount: Amount,
        balance_after: Amount,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            wallet_id,
            kind: TransactionKind::TransferOut,
            amount: -amount.as_signed(),
            balance_after,
            status: TransactionStatus::Completed,
            metadata: TransactionMetadata {
                from_wallet_id: None,
                description: Some(format!("Transfer to wallet {}", to_wallet_id)),
                to_wallet_id: Some(to_wallet_id),
            },
            created_at: Utc::now(),
        }
    }

    /// Record the credit leg of a completed transfer
    pub fn transfer_in(
        wallet_id: WalletId,
        from_wallet_id: WalletId,
        amount: Amount,
        balance_after: Amount,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            wallet_id,
            kind: TransactionKind::TransferIn,
            amount: amount.as_signed(),
            balance_after,
            status: TransactionStatus::Completed,
            metadata: TransactionMetadata {
                description: Some(format!("Transfer from wallet {}", from_wallet_id)),
                from_wallet_id: Some(from_wallet_id),
                to_wallet_id: None,
            },
            created_at: Utc::now(),
        }
    }
}
