//! OpenAPI documentation

use utoipa::OpenApi;

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI document for the SwiftVault wallet API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SwiftVault API",
        description = "Wallet ledger: creation, funding, transfers, history",
    ),
    paths(
        handlers::health::health_check,
        handlers::wallet::create_wallet,
        handlers::wallet::fund_wallet,
        handlers::wallet::transfer,
        handlers::wallet::get_wallet,
        handlers::wallet::list_wallets,
    ),
    components(schemas(
        handlers::health::HealthResponse,
        dto::CreateWalletRequest,
        dto::FundWalletRequest,
        dto::TransferRequest,
        dto::WalletResponse,
        dto::TransactionResponse,
        dto::TransactionMetadataResponse,
        dto::TransferResponse,
        dto::WalletDetailResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Wallets", description = "Wallet operations")
    )
)]
pub struct ApiDoc;
