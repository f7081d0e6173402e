use super::model::format_amount;
use thiserror::Error;

/// 입찰 처리 실패 유형
#[derive(Error, Debug)]
pub enum BidError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Product not found")]
    NotFound(i64),
    #[error("Bidding is not enabled for this product")]
    BiddingDisabled,
    #[error("This product has already been sold")]
    AlreadySold,
    #[error("Bidding has ended for this product")]
    AuctionEnded,
    #[error("Bid amount must be at least Rs. {}", format_amount(.minimum))]
    BidTooLow { minimum: i64 },
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl BidError {
    pub fn missing_fields() -> Self {
        BidError::InvalidRequest("Missing required fields".to_string())
    }

    /// 클라이언트 요청 또는 비즈니스 규칙 위반 여부
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BidError::Storage(_))
    }
}
