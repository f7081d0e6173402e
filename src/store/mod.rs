/// 입찰 저장소
/// 1. 입찰 반영 (검증 + 등록 + outbid 처리 + 현재가 갱신을 하나의 단위로)
/// 2. 상품별 입찰 조회
// region:    --- Imports
use crate::bidding::error::BidError;
use crate::bidding::model::{Bid, NewBid, Product};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

mod in_memory;
mod postgres;

pub use in_memory::InMemoryBidStore;
pub use postgres::PostgresBidStore;
// endregion: --- Imports

// region:    --- Bid Store Trait
/// 입찰 저장소 트레이트
///
/// `accept_bid`는 상품을 잠근 상태에서 `rules::check_bid`로 검증한 뒤 세 가지 변경을
/// 모두 반영하거나 아무것도 반영하지 않는다. 같은 상품에 대한 동시 입찰은 직렬화되며
/// 먼저 커밋된 입찰이 우선한다.
#[async_trait]
pub trait BidStore: Send + Sync {
    async fn accept_bid(&self, bid: NewBid, now: DateTime<Utc>) -> Result<Bid, BidError>;

    async fn list_bids(&self, product_id: i64) -> Result<Vec<Bid>, BidError>;

    async fn get_product(&self, product_id: i64) -> Result<Option<Product>, BidError>;
}

pub type SharedBidStore = Arc<dyn BidStore>;
// endregion: --- Bid Store Trait
