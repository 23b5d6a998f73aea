//! End-to-end tests for the ledger engine

use swiftvault_core::{Amount, Currency, IdempotencyKey, TransactionKind, TransactionStatus, WalletId};
use swiftvault_ledger::{LedgerEngine, LedgerError};

#[tokio::test]
async fn test_created_wallet_is_empty() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;

    assert_eq!(wallet.balance, Amount::zero());
    assert_eq!(wallet.currency, Currency::usd());
    assert!(wallet.updated_at >= wallet.created_at);

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    assert!(history.transactions.is_empty());
}

#[tokio::test]
async fn test_every_creation_yields_a_distinct_wallet() {
    let engine = LedgerEngine::new();
    let a = engine.create_wallet(Currency::usd()).await;
    let b = engine.create_wallet(Currency::usd()).await;

    assert_ne!(a.id, b.id);
    assert_eq!(engine.list_wallets().await.len(), 2);
}

#[tokio::test]
async fn test_fund_increases_balance_and_appends_record() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;

    let tx = engine.fund(&wallet.id, Amount::new(100), None).await.unwrap();

    assert_eq!(tx.wallet_id, wallet.id);
    assert_eq!(tx.kind, TransactionKind::Fund);
    assert_eq!(tx.amount, 100);
    assert_eq!(tx.balance_after, Amount::new(100));
    assert_eq!(tx.status, TransactionStatus::Completed);

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(history.wallet.balance, Amount::new(100));
    assert_eq!(history.transactions.len(), 1);
    assert_eq!(history.transactions[0].id, tx.id);
}

#[tokio::test]
async fn test_fund_zero_amount_is_rejected() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;

    let result = engine.fund(&wallet.id, Amount::zero(), None).await;
    assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(history.wallet.balance, Amount::zero());
    assert!(history.transactions.is_empty());
}

#[tokio::test]
async fn test_fund_is_idempotent_under_a_key() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;
    let key = IdempotencyKey::from_string("fund-key-123");

    let first = engine
        .fund(&wallet.id, Amount::new(100), Some(key.clone()))
        .await
        .unwrap();
    let second = engine
        .fund(&wallet.id, Amount::new(100), Some(key))
        .await
        .unwrap();

    // Same transaction replayed, balance applied once
    assert_eq!(first.id, second.id);
    assert_eq!(first, second);

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(history.wallet.balance, Amount::new(100));
    assert_eq!(history.transactions.len(), 1);
}

#[tokio::test]
async fn test_cache_hit_skips_validation_entirely() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;
    let key = IdempotencyKey::from_string("replay-key");

    engine
        .fund(&wallet.id, Amount::new(100), Some(key.clone()))
        .await
        .unwrap();

    // Replay against a wallet id that does not exist: the cached outcome
    // wins before any lookup happens.
    let replayed = engine
        .fund(&WalletId::from_string("missing-vault-0000"), Amount::new(100), Some(key))
        .await
        .unwrap();
    assert_eq!(replayed.wallet_id, wallet.id);
}

#[tokio::test]
async fn test_transfer_moves_and_conserves_value() {
    let engine = LedgerEngine::new();
    let w1 = engine.create_wallet(Currency::usd()).await;
    let w2 = engine.create_wallet(Currency::usd()).await;

    engine.fund(&w1.id, Amount::new(200), None).await.unwrap();
    let receipt = engine
        .transfer(&w1.id, &w2.id, Amount::new(100), None)
        .await
        .unwrap();

    assert_eq!(receipt.sender.kind, TransactionKind::TransferOut);
    assert_eq!(receipt.receiver.kind, TransactionKind::TransferIn);
    assert_eq!(receipt.sender.amount, -100);
    assert_eq!(receipt.receiver.amount, 100);
    assert_eq!(receipt.sender.balance_after, Amount::new(100));
    assert_eq!(receipt.receiver.balance_after, Amount::new(100));

    // Legs reference each other through metadata
    assert_eq!(receipt.sender.metadata.to_wallet_id, Some(w2.id.clone()));
    assert_eq!(receipt.receiver.metadata.from_wallet_id, Some(w1.id.clone()));

    let h1 = engine.get_wallet(&w1.id).await.unwrap();
    let h2 = engine.get_wallet(&w2.id).await.unwrap();
    assert_eq!(h1.wallet.balance, Amount::new(100));
    assert_eq!(h2.wallet.balance, Amount::new(100));

    // Conservation: 200 + 0 == 100 + 100
    assert_eq!(
        h1.wallet.balance.checked_add(h2.wallet.balance),
        Some(Amount::new(200))
    );
}

#[tokio::test]
async fn test_transfer_is_idempotent_under_a_key() {
    let engine = LedgerEngine::new();
    let w1 = engine.create_wallet(Currency::usd()).await;
    let w2 = engine.create_wallet(Currency::usd()).await;
    engine.fund(&w1.id, Amount::new(200), None).await.unwrap();

    let key = IdempotencyKey::from_string("transfer-key-456");
    let first = engine
        .transfer(&w1.id, &w2.id, Amount::new(100), Some(key.clone()))
        .await
        .unwrap();
    let second = engine
        .transfer(&w1.id, &w2.id, Amount::new(100), Some(key))
        .await
        .unwrap();

    assert_eq!(first.sender.id, second.sender.id);
    assert_eq!(first.receiver.id, second.receiver.id);

    let h1 = engine.get_wallet(&w1.id).await.unwrap();
    let h2 = engine.get_wallet(&w2.id).await.unwrap();
    assert_eq!(h1.wallet.balance, Amount::new(100));
    assert_eq!(h2.wallet.balance, Amount::new(100));
    assert_eq!(h1.transactions.len(), 2); // fund + transfer out
    assert_eq!(h2.transactions.len(), 1); // transfer in
}

#[tokio::test]
async fn test_missing_sender_is_reported_before_missing_receiver() {
    let engine = LedgerEngine::new();

    let result = engine
        .transfer(
            &WalletId::from_string("missing-sender-0001"),
            &WalletId::from_string("missing-receiver-0002"),
            Amount::new(10),
            None,
        )
        .await;

    match result {
        Err(LedgerError::WalletNotFound { wallet_id }) => {
            assert_eq!(wallet_id, "missing-sender-0001");
        }
        other => panic!("expected WalletNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transfer_to_missing_receiver() {
    let engine = LedgerEngine::new();
    let w1 = engine.create_wallet(Currency::usd()).await;
    engine.fund(&w1.id, Amount::new(200), None).await.unwrap();

    let result = engine
        .transfer(
            &w1.id,
            &WalletId::from_string("missing-receiver-0002"),
            Amount::new(100),
            None,
        )
        .await;

    assert!(matches!(result, Err(LedgerError::WalletNotFound { .. })));

    let h1 = engine.get_wallet(&w1.id).await.unwrap();
    assert_eq!(h1.wallet.balance, Amount::new(200));
}

#[tokio::test]
async fn test_transfer_to_same_wallet_is_rejected() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;
    engine.fund(&wallet.id, Amount::new(200), None).await.unwrap();

    let result = engine
        .transfer(&wallet.id, &wallet.id, Amount::new(50), None)
        .await;

    assert!(matches!(result, Err(LedgerError::SameWalletTransfer { .. })));

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(history.wallet.balance, Amount::new(200));
    assert_eq!(history.transactions.len(), 1);
}

#[tokio::test]
async fn test_transfer_zero_amount_is_rejected() {
    let engine = LedgerEngine::new();
    let w1 = engine.create_wallet(Currency::usd()).await;
    let w2 = engine.create_wallet(Currency::usd()).await;
    engine.fund(&w1.id, Amount::new(200), None).await.unwrap();

    let result = engine.transfer(&w1.id, &w2.id, Amount::zero(), None).await;
    assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));

    let h1 = engine.get_wallet(&w1.id).await.unwrap();
    assert_eq!(h1.wallet.balance, Amount::new(200));
}

#[tokio::test]
async fn test_insufficient_balance_leaves_state_untouched() {
    let engine = LedgerEngine::new();
    let w1 = engine.create_wallet(Currency::usd()).await;
    let w2 = engine.create_wallet(Currency::usd()).await;
    engine.fund(&w1.id, Amount::new(50), None).await.unwrap();

    let result = engine.transfer(&w1.id, &w2.id, Amount::new(100), None).await;

    match result {
        Err(LedgerError::InsufficientBalance {
            available,
            required,
        }) => {
            assert_eq!(available, 50);
            assert_eq!(required, 100);
        }
        other => panic!("expected InsufficientBalance, got {:?}", other),
    }

    let h1 = engine.get_wallet(&w1.id).await.unwrap();
    let h2 = engine.get_wallet(&w2.id).await.unwrap();
    assert_eq!(h1.wallet.balance, Amount::new(50));
    assert_eq!(h2.wallet.balance, Amount::zero());
    assert_eq!(h1.transactions.len(), 1);
    assert!(h2.transactions.is_empty());
}

#[tokio::test]
async fn test_get_wallet_unknown_id() {
    let engine = LedgerEngine::new();
    let result = engine
        .get_wallet(&WalletId::from_string("missing-vault-0000"))
        .await;

    assert!(matches!(result, Err(LedgerError::WalletNotFound { .. })));
}

#[tokio::test]
async fn test_history_is_newest_first() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;

    engine.fund(&wallet.id, Amount::new(10), None).await.unwrap();
    engine.fund(&wallet.id, Amount::new(20), None).await.unwrap();
    engine.fund(&wallet.id, Amount::new(30), None).await.unwrap();

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    let amounts: Vec<i64> = history.transactions.iter().map(|tx| tx.amount).collect();
    assert_eq!(amounts, vec![30, 20, 10]);
    assert!(history
        .transactions
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn test_list_wallets_in_creation_order() {
    let engine = LedgerEngine::new();
    assert!(engine.list_wallets().await.is_empty());

    let a = engine.create_wallet(Currency::usd()).await;
    let b = engine.create_wallet(Currency::usd()).await;

    let ids: Vec<_> = engine.list_wallets().await.into_iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_funds_with_one_key_apply_once() {
    let engine = LedgerEngine::new();
    let wallet = engine.create_wallet(Currency::usd()).await;
    let key = IdempotencyKey::from_string("race-key");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            let wallet_id = wallet.id.clone();
            let key = key.clone();
            tokio::spawn(async move { engine.fund(&wallet_id, Amount::new(100), Some(key)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let tx = handle.await.unwrap().unwrap();
        ids.push(tx.id);
    }

    // Exactly one execution; everyone observed the same transaction
    ids.dedup();
    assert_eq!(ids.len(), 1);

    let history = engine.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(history.wallet.balance, Amount::new(100));
    assert_eq!(history.transactions.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_transfers_never_lose_value() {
    let engine = LedgerEngine::new();
    let a = engine.create_wallet(Currency::usd()).await;
    let b = engine.create_wallet(Currency::usd()).await;
    engine.fund(&a.id, Amount::new(1000), None).await.unwrap();
    engine.fund(&b.id, Amount::new(1000), None).await.unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let engine = engine.clone();
            let (from, to) = if i % 2 == 0 {
                (a.id.clone(), b.id.clone())
            } else {
                (b.id.clone(), a.id.clone())
            };
            tokio::spawn(async move { engine.transfer(&from, &to, Amount::new(100), None).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let h1 = engine.get_wallet(&a.id).await.unwrap();
    let h2 = engine.get_wallet(&b.id).await.unwrap();
    assert_eq!(
        h1.wallet.balance.checked_add(h2.wallet.balance),
        Some(Amount::new(2000))
    );
}
