use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// 상품 모델 (경매 관련 컬럼만 사용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub starting_bid: i64,
    pub current_bid: Option<i64>,
    pub bid_increment: i64,
    pub bidding_enabled: bool,
    pub sold: bool,
    pub bid_end_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// 다음 입찰의 최소 금액
    pub fn minimum_bid(&self) -> i64 {
        match self.current_bid {
            Some(current) => current.saturating_add(self.bid_increment),
            None => self.starting_bid,
        }
    }
}

// 입찰 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Active,
    Outbid,
}

#[derive(Error, Debug)]
#[error("unknown bid status: {0}")]
pub struct StatusParseError(String);

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Active => "active",
            BidStatus::Outbid => "outbid",
        }
    }
}

impl TryFrom<String> for BidStatus {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "active" => Ok(BidStatus::Active),
            "outbid" => Ok(BidStatus::Outbid),
            _ => Err(StatusParseError(value)),
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub product_id: i64,
    pub bidder_name: String,
    pub bidder_contact: String,
    pub bid_amount: i64,
    #[sqlx(try_from = "String")]
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
}

// 저장 전 입찰 (id, 상태, 생성 시각은 저장소가 부여)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBid {
    pub product_id: i64,
    pub bidder_name: String,
    pub bidder_contact: String,
    pub bid_amount: i64,
}

/// 금액을 천 단위 구분 기호로 표시 (예: 10500 -> "10,500")
pub fn format_amount(amount: &i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if *amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
