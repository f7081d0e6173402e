// region:    --- Imports
use super::BidStore;
use crate::bidding::error::BidError;
use crate::bidding::model::{Bid, NewBid, Product};
use crate::bidding::rules;
use crate::database::DatabaseManager;
use crate::query::queries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Postgres Bid Store
/// PostgreSQL 입찰 저장소
pub struct PostgresBidStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresBidStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl BidStore for PostgresBidStore {
    /// 입찰 반영
    /// 상품 행을 FOR UPDATE로 잠그므로 같은 상품의 동시 입찰은 순서대로 처리된다.
    /// 중간에 실패하면 트랜잭션이 드롭되며 롤백된다.
    async fn accept_bid(&self, bid: NewBid, now: DateTime<Utc>) -> Result<Bid, BidError> {
        let mut tx = self.db_manager.pool().begin().await?;

        let product = sqlx::query_as::<_, Product>(queries::LOCK_PRODUCT)
            .bind(bid.product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(BidError::NotFound(bid.product_id))?;

        rules::check_bid(&product, bid.bid_amount, now)?;

        let created = sqlx::query_as::<_, Bid>(queries::INSERT_BID)
            .bind(bid.product_id)
            .bind(&bid.bidder_name)
            .bind(&bid.bidder_contact)
            .bind(bid.bid_amount)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        let outbid = sqlx::query(queries::OUTBID_PREVIOUS)
            .bind(bid.product_id)
            .bind(created.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(queries::UPDATE_CURRENT_BID)
            .bind(bid.bid_amount)
            .bind(now)
            .bind(bid.product_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            "{:<12} --> 입찰 반영 완료 bid: {}, product: {}, outbid: {}",
            "Store",
            created.id,
            created.product_id,
            outbid.rows_affected()
        );
        Ok(created)
    }

    /// 상품 입찰 조회
    async fn list_bids(&self, product_id: i64) -> Result<Vec<Bid>, BidError> {
        debug!("{:<12} --> 상품 입찰 조회 id: {}", "Store", product_id);
        let bids = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, Bid>(queries::GET_PRODUCT_BIDS)
                        .bind(product_id)
                        .fetch_all(&mut **tx)
                        .await
                })
            })
            .await?;
        Ok(bids)
    }

    /// 상품 조회
    async fn get_product(&self, product_id: i64) -> Result<Option<Product>, BidError> {
        let product = sqlx::query_as::<_, Product>(queries::GET_PRODUCT)
            .bind(product_id)
            .fetch_optional(self.db_manager.pool())
            .await?;
        Ok(product)
    }
}
// endregion: --- Postgres Bid Store
