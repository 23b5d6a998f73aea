//! Wallet handlers
//!
//! Thin adapters: validate request shape, call the ledger engine, wrap the
//! result in the response envelope. All business rules live in the engine.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use swiftvault_core::{Amount, Currency, IdempotencyKey, WalletId};

use crate::dto::{
    ApiResponse, CreateWalletRequest, FundWalletRequest, TransactionResponse, TransferRequest,
    TransferResponse, WalletDetailResponse, WalletResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// Create a new wallet
#[utoipa::path(
    post,
    path = "/api/v1/wallets",
    tag = "Wallets",
    request_body = CreateWalletRequest,
    responses(
        (status = 201, description = "Wallet created", body = WalletResponse),
        (status = 400, description = "Unsupported currency")
    )
)]
pub async fn create_wallet(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateWalletRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<WalletResponse>>)> {
    request.validate()?;

    let currency = request
        .currency
        .map(Currency::from_code)
        .unwrap_or_default();
    let wallet = state.engine.create_wallet(currency).await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Wallet created successfully",
            wallet.into(),
        )),
    ))
}

/// Fund a wallet
#[utoipa::path(
    post,
    path = "/api/v1/wallets/{id}/fund",
    tag = "Wallets",
    params(
        ("id" = String, Path, description = "Wallet id")
    ),
    request_body = FundWalletRequest,
    responses(
        (status = 200, description = "Wallet funded", body = TransactionResponse),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn fund_wallet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<FundWalletRequest>,
) -> ApiResult<Json<ApiResponse<TransactionResponse>>> {
    request.validate()?;

    let wallet_id = WalletId::from_string(id);
    let amount = Amount::new(request.amount as u64);
    let key = request.idempotency_key.map(IdempotencyKey::from_string);

    let tx = state.engine.fund(&wallet_id, amount, key).await?;

    Ok(Json(ApiResponse::with_message(
        "Wallet funded successfully",
        tx.into(),
    )))
}

/// Transfer funds between wallets
#[utoipa::path(
    post,
    path = "/api/v1/wallets/transfer",
    tag = "Wallets",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer completed", body = TransferResponse),
        (status = 400, description = "Invalid amount or same-wallet transfer"),
        (status = 404, description = "Wallet not found"),
        (status = 422, description = "Insufficient balance")
    )
)]
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransferRequest>,
) -> ApiResult<Json<ApiResponse<TransferResponse>>> {
    request.validate()?;

    let from = WalletId::from_string(request.from_wallet_id);
    let to = WalletId::from_string(request.to_wallet_id);
    let amount = Amount::new(request.amount as u64);
    let key = request.idempotency_key.map(IdempotencyKey::from_string);

    let receipt = state.engine.transfer(&from, &to, amount, key).await?;

    Ok(Json(ApiResponse::with_message(
        "Transfer completed successfully",
        receipt.into(),
    )))
}

/// Get a wallet with its transaction history
#[utoipa::path(
    get,
    path = "/api/v1/wallets/{id}",
    tag = "Wallets",
    params(
        ("id" = String, Path, description = "Wallet id")
    ),
    responses(
        (status = 200, description = "Wallet with history", body = WalletDetailResponse),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<WalletDetailResponse>>> {
    let wallet_id = WalletId::from_string(id);
    let history = state.engine.get_wallet(&wallet_id).await?;

    Ok(Json(ApiResponse::ok(history.into())))
}

/// List all wallets
#[utoipa::path(
    get,
    path = "/api/v1/wallets",
    tag = "Wallets",
    responses(
        (status = 200, description = "All wallets in creation order", body = Vec<WalletResponse>)
    )
)]
pub async fn list_wallets(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<WalletResponse>>> {
    let wallets = state.engine.list_wallets().await;
    let data: Vec<WalletResponse> = wallets.into_iter().map(Into::into).collect();

    Json(ApiResponse::ok(data))
}
