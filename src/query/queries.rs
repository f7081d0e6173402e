/// 상품 조회 (입찰 반영 전 행 잠금)
pub const LOCK_PRODUCT: &str = r#"
    SELECT id, starting_bid, current_bid, bid_increment, bidding_enabled, sold, bid_end_date, updated_at
    FROM products
    WHERE id = $1
    FOR UPDATE
"#;

/// 상품 조회
pub const GET_PRODUCT: &str =
    "SELECT id, starting_bid, current_bid, bid_increment, bidding_enabled, sold, bid_end_date, updated_at FROM products WHERE id = $1";

/// 입찰 등록
pub const INSERT_BID: &str = r#"
    INSERT INTO bids (product_id, bidder_name, bidder_contact, bid_amount, status, created_at)
    VALUES ($1, $2, $3, $4, 'active', $5)
    RETURNING id, product_id, bidder_name, bidder_contact, bid_amount, status, created_at
"#;

/// 이전 활성 입찰을 outbid 처리
pub const OUTBID_PREVIOUS: &str =
    "UPDATE bids SET status = 'outbid' WHERE product_id = $1 AND id <> $2 AND status = 'active'";

/// 상품 현재 입찰가 갱신
pub const UPDATE_CURRENT_BID: &str =
    "UPDATE products SET current_bid = $1, updated_at = $2 WHERE id = $3";

/// 상품 입찰 조회 (금액 내림차순, 최신순)
pub const GET_PRODUCT_BIDS: &str = r#"
    SELECT id, product_id, bidder_name, bidder_contact, bid_amount, status, created_at
    FROM bids
    WHERE product_id = $1
    ORDER BY bid_amount DESC, created_at DESC, id DESC
"#;
