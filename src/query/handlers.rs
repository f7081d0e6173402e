// region:    --- Imports
use crate::bidding::error::BidError;
use crate::bidding::model::Bid;
use crate::store::BidStore;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 상품 입찰 조회
/// 금액 내림차순, 같은 금액이면 최신순. 입찰이 없으면 빈 목록.
pub async fn list_bids(store: &dyn BidStore, product_id: i64) -> Result<Vec<Bid>, BidError> {
    info!("{:<12} --> 상품 입찰 조회 id: {}", "Query", product_id);
    store.list_bids(product_id).await
}

// endregion: --- Query Handlers

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::model::{BidStatus, Product};
    use crate::store::InMemoryBidStore;
    use chrono::{Duration, TimeZone, Utc};

    fn bid(id: i64, product_id: i64, amount: i64, minutes: i64) -> Bid {
        Bid {
            id,
            product_id,
            bidder_name: format!("bidder-{}", id),
            bidder_contact: "923001234567".to_string(),
            bid_amount: amount,
            status: BidStatus::Outbid,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn bids_are_ordered_by_amount_then_recency() {
        let store = InMemoryBidStore::new();
        store.insert_bid_record(bid(1, 9, 500, 1)).await;
        store.insert_bid_record(bid(2, 9, 700, 2)).await;
        store.insert_bid_record(bid(3, 9, 700, 3)).await;
        store.insert_bid_record(bid(4, 8, 900, 4)).await;

        let bids = list_bids(&store, 9).await.unwrap();
        let order: Vec<(i64, i64)> = bids.iter().map(|b| (b.bid_amount, b.id)).collect();
        assert_eq!(order, vec![(700, 3), (700, 2), (500, 1)]);
    }

    #[tokio::test]
    async fn product_without_bids_yields_empty_list() {
        let store = InMemoryBidStore::new();
        store
            .insert_product(Product {
                id: 5,
                starting_bid: 5000,
                current_bid: None,
                bid_increment: 500,
                bidding_enabled: true,
                sold: false,
                bid_end_date: None,
                updated_at: Utc::now(),
            })
            .await;

        assert!(list_bids(&store, 5).await.unwrap().is_empty());
        assert!(list_bids(&store, 404).await.unwrap().is_empty());
    }
}
// endregion: --- Tests
