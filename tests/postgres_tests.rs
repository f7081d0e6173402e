//! PostgreSQL 저장소 테스트
//! DATABASE_URL 설정 후 `cargo test -- --ignored` 로 실행
use bid_service::bidding::commands::{handle_place_bid, PlaceBidRequest};
use bid_service::bidding::error::BidError;
use bid_service::bidding::model::BidStatus;
use bid_service::config::Config;
use bid_service::database::DatabaseManager;
use bid_service::store::{BidStore, PostgresBidStore};
use chrono::{Duration, Utc};
use std::sync::Arc;

/// 데이터베이스 매니저 설정
async fn setup() -> Arc<DatabaseManager> {
    let config = Config::from_env().expect("DATABASE_URL must be set");
    let db_manager = DatabaseManager::new(&config)
        .await
        .expect("Failed to create pool");
    db_manager
        .initialize_database()
        .await
        .expect("Failed to create schema");
    Arc::new(db_manager)
}

/// 테스트용 상품 생성
async fn create_test_product(
    db_manager: &DatabaseManager,
    current_bid: Option<i64>,
    bid_end_date: Option<chrono::DateTime<Utc>>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO products (title, starting_bid, current_bid, bid_increment, bidding_enabled, sold, bid_end_date)
         VALUES ($1, 5000, $2, 500, TRUE, FALSE, $3)
         RETURNING id",
    )
    .bind("테스트 작품")
    .bind(current_bid)
    .bind(bid_end_date)
    .fetch_one(db_manager.pool())
    .await
    .unwrap()
}

fn request(product_id: i64, amount: i64) -> PlaceBidRequest {
    PlaceBidRequest {
        product_id: Some(product_id),
        bidder_name: Some("Zainab".to_string()),
        bidder_contact: Some("923001234567".to_string()),
        bid_amount: Some(amount),
    }
}

/// 입찰 후 이전 입찰 outbid 처리 및 현재가 갱신
#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_place_bid_updates_product_and_previous_bids() {
    let db_manager = setup().await;
    let store = PostgresBidStore::new(Arc::clone(&db_manager));
    let product_id = create_test_product(&db_manager, None, None).await;

    let first = handle_place_bid(request(product_id, 5000), &store, Utc::now())
        .await
        .unwrap();
    let second = handle_place_bid(request(product_id, 5500), &store, Utc::now())
        .await
        .unwrap();

    let bids = store.list_bids(product_id).await.unwrap();
    assert_eq!(bids.len(), 2);
    assert_eq!(bids[0].id, second.id);
    assert_eq!(bids[0].status, BidStatus::Active);
    assert_eq!(bids[1].id, first.id);
    assert_eq!(bids[1].status, BidStatus::Outbid);

    let product = store.get_product(product_id).await.unwrap().unwrap();
    assert_eq!(product.current_bid, Some(5500));
}

/// 검증 실패 시 변경 없음
#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_rejected_bid_has_no_effect() {
    let db_manager = setup().await;
    let store = PostgresBidStore::new(Arc::clone(&db_manager));
    let product_id = create_test_product(&db_manager, Some(10000), None).await;

    let err = handle_place_bid(request(product_id, 10499), &store, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, BidError::BidTooLow { minimum: 10500 }));

    let ended_id =
        create_test_product(&db_manager, None, Some(Utc::now() - Duration::hours(1))).await;
    let err = handle_place_bid(request(ended_id, 9000), &store, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, BidError::AuctionEnded));

    assert!(store.list_bids(product_id).await.unwrap().is_empty());
    assert!(store.list_bids(ended_id).await.unwrap().is_empty());
    let product = store.get_product(product_id).await.unwrap().unwrap();
    assert_eq!(product.current_bid, Some(10000));
}

/// 동시성 입찰 테스트 (행 잠금으로 하나만 반영)
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_bidding() {
    let db_manager = setup().await;
    let store = Arc::new(PostgresBidStore::new(Arc::clone(&db_manager)));
    let product_id = create_test_product(&db_manager, None, None).await;

    let mut handles = vec![];
    for _ in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            handle_place_bid(request(product_id, 5000), &*store, Utc::now()).await
        }));
    }

    let mut successful_bids = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful_bids += 1,
            Err(e) => assert!(matches!(e, BidError::BidTooLow { minimum: 5500 })),
        }
    }
    assert_eq!(successful_bids, 1);

    let bids = store.list_bids(product_id).await.unwrap();
    let active = bids
        .iter()
        .filter(|b| b.status == BidStatus::Active)
        .count();
    assert_eq!(active, 1);
}

/// 증분이 0 이하인 상품은 저장 불가
#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_non_positive_increment_is_rejected() {
    let db_manager = setup().await;
    for increment in [0_i64, -500] {
        let result = sqlx::query(
            "INSERT INTO products (title, starting_bid, bid_increment, bidding_enabled) VALUES ($1, 5000, $2, TRUE)",
        )
        .bind("증분 검증")
        .bind(increment)
        .execute(db_manager.pool())
        .await;
        assert!(result.is_err(), "increment {} accepted", increment);
    }
}
