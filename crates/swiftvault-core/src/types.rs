//! Canonical value types for SwiftVault
//!
//! Identifier newtypes, currency codes, and the `Amount` type used for all
//! balance arithmetic. Amounts are integers in the currency's smallest
//! denomination and only support checked arithmetic.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Identity Types
// ============================================================================

/// Word lists for human-readable wallet identifiers
const ADJECTIVES: &[&str] = &[
    "swift", "bright", "calm", "bold", "smart", "quick", "cool", "warm", "fresh", "clean",
];
const NOUNS: &[&str] = &[
    "wallet", "purse", "vault", "chest", "safe", "bank", "fund", "account", "ledger", "treasure",
];

/// Unique identifier for a wallet
///
/// Human-readable, in the form `adjective-noun-NNNN` (e.g. `swift-vault-4821`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletId(pub String);

impl WalletId {
    /// Generate a fresh human-readable wallet identifier
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&"swift");
        let noun = NOUNS.choose(&mut rng).unwrap_or(&"vault");
        let suffix: u16 = rng.gen_range(1000..10000);
        Self(format!("{}-{}-{}", adjective, noun, suffix))
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new() -> Self {
        Self(format!("txn_{}", Uuid::new_v4()))
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-supplied token for exactly-once replay of an operation
///
/// Opaque to the ledger. Keys live in a single global space: the same key
/// names the same outcome regardless of which operation produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdempotencyKey(pub String);

impl IdempotencyKey {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Currency code, fixed at wallet creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(pub String);

impl Currency {
    /// The canonical default currency
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn from_code(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Amount
// ============================================================================

/// A non-negative amount in the currency's smallest denomination
///
/// Balance arithmetic is checked only; overflow and underflow surface as
/// `None` and are turned into domain errors by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Amount(pub u64);

impl Amount {
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The signed view of this amount, for per-transaction records
    /// (debits are recorded as negative values).
    pub fn as_signed(self) -> i64 {
        self.0 as i64
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
