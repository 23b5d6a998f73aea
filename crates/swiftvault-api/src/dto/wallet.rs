//! Wallet and transaction DTOs
//!
//! Field-shape validation (presence, format, bounds) lives here; business
//! rules (existence, sufficiency) are the ledger's job.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use swiftvault_core::{
    Transaction, TransactionKind, TransactionMetadata, TransactionStatus, Wallet,
};
use swiftvault_ledger::{TransferReceipt, WalletHistory};

/// Wallet identifiers are human-readable: `adjective-noun-NNNN`
static WALLET_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]+-[a-z]+-\d{4}$").expect("wallet id pattern is valid")
});

fn validate_wallet_id(id: &str) -> Result<(), ValidationError> {
    if WALLET_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        let mut err = ValidationError::new("wallet_id_format");
        err.message = Some("Wallet ID must be in format: adjective-noun-1234".into());
        Err(err)
    }
}

fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if currency == "USD" {
        Ok(())
    } else {
        let mut err = ValidationError::new("unsupported_currency");
        err.message = Some("Currently only USD currency is supported".into());
        Err(err)
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Create wallet request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    /// Currency code; defaults to USD
    #[serde(default)]
    #[validate(custom(function = validate_currency))]
    pub currency: Option<String>,
}

/// Fund wallet request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FundWalletRequest {
    /// Amount in the currency's smallest denomination
    #[validate(range(min = 1i64, max = 999999999999i64, message = "Amount must be a positive number"))]
    pub amount: i64,
    /// Client-supplied key for exactly-once replay
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

/// Transfer request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Sender wallet id
    #[validate(custom(function = validate_wallet_id))]
    pub from_wallet_id: String,
    /// Receiver wallet id
    #[validate(custom(function = validate_wallet_id))]
    pub to_wallet_id: String,
    /// Amount in the currency's smallest denomination
    #[validate(range(min = 1i64, max = 999999999999i64, message = "Amount must be a positive number"))]
    pub amount: i64,
    /// Client-supplied key for exactly-once replay
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

/// Wallet representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    /// Wallet id
    pub id: String,
    /// Currency code
    pub currency: String,
    /// Current balance in the currency's smallest denomination
    pub balance: u64,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last balance change
    pub updated_at: DateTime<Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id.0,
            currency: wallet.currency.0,
            balance: wallet.balance.0,
            created_at: wallet.created_at,
            updated_at: wallet.updated_at,
        }
    }
}

/// Transaction metadata representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetadataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<TransactionMetadata> for TransactionMetadataResponse {
    fn from(metadata: TransactionMetadata) -> Self {
        Self {
            from_wallet_id: metadata.from_wallet_id.map(|id| id.0),
            to_wallet_id: metadata.to_wallet_id.map(|id| id.0),
            description: metadata.description,
        }
    }
}

/// Transaction representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction id
    pub id: String,
    /// Owning wallet id
    pub wallet_id: String,
    /// FUND, TRANSFER_OUT or TRANSFER_IN
    #[serde(rename = "type")]
    pub kind: String,
    /// Signed amount (negative for TRANSFER_OUT)
    pub amount: i64,
    /// Wallet balance immediately after this transaction
    pub balance_after: u64,
    /// PENDING, COMPLETED or FAILED
    pub status: String,
    /// Optional annotation
    pub metadata: TransactionMetadataResponse,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        let kind = match tx.kind {
            TransactionKind::Fund => "FUND",
            TransactionKind::TransferOut => "TRANSFER_OUT",
            TransactionKind::TransferIn => "TRANSFER_IN",
        };
        let status = match tx.status {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Failed => "FAILED",
        };
        Self {
            id: tx.id.0,
            wallet_id: tx.wallet_id.0,
            kind: kind.to_string(),
            amount: tx.amount,
            balance_after: tx.balance_after.0,
            status: status.to_string(),
            metadata: tx.metadata.into(),
            created_at: tx.created_at,
        }
    }
}

/// The two records produced by a transfer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub sender_transaction: TransactionResponse,
    pub receiver_transaction: TransactionResponse,
}

impl From<TransferReceipt> for TransferResponse {
    fn from(receipt: TransferReceipt) -> Self {
        Self {
            sender_transaction: receipt.sender.into(),
            receiver_transaction: receipt.receiver.into(),
        }
    }
}

/// A wallet with its transaction history, newest first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetailResponse {
    pub wallet: WalletResponse,
    pub transactions: Vec<TransactionResponse>,
}

impl From<WalletHistory> for WalletDetailResponse {
    fn from(history: WalletHistory) -> Self {
        Self {
            wallet: history.wallet.into(),
            transactions: history.transactions.into_iter().map(Into::into).collect(),
        }
    }
}
