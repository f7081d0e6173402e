/// 입찰 관련 커맨드 처리
/// 1. 입찰 요청 검증
/// 2. 입찰
// region:    --- Imports
use super::error::BidError;
use super::model::{Bid, NewBid};
use crate::store::BidStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Commands
/// 입찰 요청 본문 (누락된 필드는 검증 단계에서 거절)
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidRequest {
    pub product_id: Option<i64>,
    pub bidder_name: Option<String>,
    pub bidder_contact: Option<String>,
    pub bid_amount: Option<i64>,
}

/// 입찰 명령
#[derive(Clone, PartialEq, Eq)]
pub struct PlaceBidCommand {
    pub product_id: i64,
    pub bidder_name: String,
    pub bidder_contact: String,
    pub bid_amount: i64,
}

// 연락처(전화번호)는 로그에 남기지 않는다
impl fmt::Debug for PlaceBidCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceBidCommand")
            .field("product_id", &self.product_id)
            .field("bidder_name", &self.bidder_name)
            .field("bidder_contact", &"<redacted>")
            .field("bid_amount", &self.bid_amount)
            .finish()
    }
}

impl TryFrom<PlaceBidRequest> for PlaceBidCommand {
    type Error = BidError;

    fn try_from(req: PlaceBidRequest) -> Result<Self, Self::Error> {
        let product_id = req.product_id.filter(|id| *id != 0);
        let bidder_name = non_blank(req.bidder_name);
        let bidder_contact = non_blank(req.bidder_contact);
        let bid_amount = req.bid_amount.filter(|amount| *amount > 0);

        match (product_id, bidder_name, bidder_contact, bid_amount) {
            (Some(product_id), Some(bidder_name), Some(bidder_contact), Some(bid_amount)) => {
                Ok(Self {
                    product_id,
                    bidder_name,
                    bidder_contact,
                    bid_amount,
                })
            }
            _ => Err(BidError::missing_fields()),
        }
    }
}

impl From<PlaceBidCommand> for NewBid {
    fn from(cmd: PlaceBidCommand) -> Self {
        Self {
            product_id: cmd.product_id,
            bidder_name: cmd.bidder_name,
            bidder_contact: cmd.bidder_contact,
            bid_amount: cmd.bid_amount,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 입찰
/// 요청 검증 후 저장소에서 상품 검증과 세 단계 반영을 한 번에 수행한다.
pub async fn handle_place_bid(
    req: PlaceBidRequest,
    store: &dyn BidStore,
    now: DateTime<Utc>,
) -> Result<Bid, BidError> {
    let cmd = PlaceBidCommand::try_from(req)?;
    info!(
        "{:<12} --> 입찰 요청 처리 시작 product: {}, amount: {}",
        "Command", cmd.product_id, cmd.bid_amount
    );

    match store.accept_bid(cmd.into(), now).await {
        Ok(bid) => {
            info!(
                "{:<12} --> 입찰 성공 product: {}, amount: {}",
                "Command", bid.product_id, bid.bid_amount
            );
            Ok(bid)
        }
        Err(e) => {
            if e.is_client_error() {
                warn!("{:<12} --> 입찰 거절: {}", "Command", e);
            }
            Err(e)
        }
    }
}
// endregion: --- Commands

// endregion: --- Tests
