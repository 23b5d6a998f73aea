//! API error handling
//!
//! Maps ledger error kinds to transport responses. The ledger signals the
//! kind; everything user-visible about the failure lives here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use swiftvault_ledger::LedgerError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Ledger errors
    // =========================================================================
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    // =========================================================================
    // Request errors
    // =========================================================================
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid request body")]
    InvalidRequestBody,
}

impl ApiError {
    /// Stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Ledger(LedgerError::WalletNotFound { .. }) => "WALLET_NOT_FOUND",
            Self::Ledger(LedgerError::InvalidAmount { .. }) => "INVALID_AMOUNT",
            Self::Ledger(LedgerError::SameWalletTransfer { .. }) => "SAME_WALLET_TRANSFER",
            Self::Ledger(LedgerError::InsufficientBalance { .. }) => "INSUFFICIENT_BALANCE",
            Self::Ledger(LedgerError::IdempotencyConflict { .. }) => "IDEMPOTENCY_CONFLICT",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::InvalidRequestBody => "INVALID_REQUEST_BODY",
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ledger(LedgerError::WalletNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Ledger(LedgerError::InvalidAmount { .. })
            | Self::Ledger(LedgerError::SameWalletTransfer { .. })
            | Self::InvalidParameter(_)
            | Self::InvalidRequestBody => StatusCode::BAD_REQUEST,
            Self::Ledger(LedgerError::InsufficientBalance { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Ledger(LedgerError::IdempotencyConflict { .. }) => StatusCode::CONFLICT,
        }
    }
}

/// API error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.as_ref())
                            .unwrap_or("invalid")
                    )
                })
            })
            .collect();
        Self::InvalidParameter(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::Ledger(LedgerError::WalletNotFound {
            wallet_id: "swift-vault-4821".to_string(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let invalid = ApiError::Ledger(LedgerError::InvalidAmount {
            message: "Amount must be positive".to_string(),
        });
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let insufficient = ApiError::Ledger(LedgerError::InsufficientBalance {
            available: 50,
            required: 100,
        });
        assert_eq!(insufficient.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let conflict = ApiError::Ledger(LedgerError::IdempotencyConflict {
            key: "k1".to_string(),
        });
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_codes() {
        let err = ApiError::Ledger(LedgerError::SameWalletTransfer {
            wallet_id: "swift-vault-4821".to_string(),
        });
        assert_eq!(err.error_code(), "SAME_WALLET_TRANSFER");

        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert!(body.message.contains("swift-vault-4821"));
    }
}
