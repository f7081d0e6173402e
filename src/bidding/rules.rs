/// 상품 상태에 대한 입찰 가능 여부 검증
/// 저장소는 상품 행을 잠근 상태에서 이 검증을 호출한다.
use super::error::BidError;
use super::model::Product;
use chrono::{DateTime, Utc};

/// 입찰 검증 (활성화 -> 판매 여부 -> 마감 -> 최소 금액 순서)
pub fn check_bid(product: &Product, bid_amount: i64, now: DateTime<Utc>) -> Result<(), BidError> {
    if !product.bidding_enabled {
        return Err(BidError::BiddingDisabled);
    }

    if product.sold {
        return Err(BidError::AlreadySold);
    }

    if matches!(product.bid_end_date, Some(end) if end < now) {
        return Err(BidError::AuctionEnded);
    }

    let minimum = product.minimum_bid();
    if bid_amount < minimum {
        return Err(BidError::BidTooLow { minimum });
    }

    Ok(())
}
