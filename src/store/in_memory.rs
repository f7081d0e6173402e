// region:    --- Imports
use super::BidStore;
use crate::bidding::error::BidError;
use crate::bidding::model::{Bid, BidStatus, NewBid, Product};
use crate::bidding::rules;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

// endregion: --- Imports

// region:    --- In Memory Bid Store
#[derive(Default)]
struct State {
    products: BTreeMap<i64, Product>,
    bids: Vec<Bid>,
    next_bid_id: i64,
}

/// 메모리 입찰 저장소
///
/// 테스트와 로컬 실행용. 하나의 뮤텍스가 상품과 입찰을 함께 보호하므로
/// `accept_bid` 전체가 원자적으로 실행된다.
#[derive(Default)]
pub struct InMemoryBidStore {
    state: Mutex<State>,
}

impl InMemoryBidStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 상품 등록 (같은 id가 있으면 교체)
    pub async fn insert_product(&self, product: Product) {
        self.state.lock().await.products.insert(product.id, product);
    }

    /// 입찰 기록을 그대로 적재 (검증 없음)
    pub async fn insert_bid_record(&self, bid: Bid) {
        let mut state = self.state.lock().await;
        state.next_bid_id = state.next_bid_id.max(bid.id);
        state.bids.push(bid);
    }
}

#[async_trait]
impl BidStore for InMemoryBidStore {
    async fn accept_bid(&self, bid: NewBid, now: DateTime<Utc>) -> Result<Bid, BidError> {
        let mut state = self.state.lock().await;
        let state = &mut *state;

        let product = state
            .products
            .get_mut(&bid.product_id)
            .ok_or(BidError::NotFound(bid.product_id))?;

        rules::check_bid(product, bid.bid_amount, now)?;

        state.next_bid_id += 1;
        let created = Bid {
            id: state.next_bid_id,
            product_id: bid.product_id,
            bidder_name: bid.bidder_name,
            bidder_contact: bid.bidder_contact,
            bid_amount: bid.bid_amount,
            status: BidStatus::Active,
            created_at: now,
        };

        for previous in state
            .bids
            .iter_mut()
            .filter(|b| b.product_id == created.product_id && b.status == BidStatus::Active)
        {
            previous.status = BidStatus::Outbid;
        }
        state.bids.push(created.clone());

        product.current_bid = Some(created.bid_amount);
        product.updated_at = now;

        Ok(created)
    }

    async fn list_bids(&self, product_id: i64) -> Result<Vec<Bid>, BidError> {
        let state = self.state.lock().await;
        let mut bids: Vec<Bid> = state
            .bids
            .iter()
            .filter(|b| b.product_id == product_id)
            .cloned()
            .collect();
        bids.sort_by(|a, b| {
            b.bid_amount
                .cmp(&a.bid_amount)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(bids)
    }

    async fn get_product(&self, product_id: i64) -> Result<Option<Product>, BidError> {
        Ok(self.state.lock().await.products.get(&product_id).cloned())
    }
}
// endregion: --- In Memory Bid Store
