// region:    --- Imports
use crate::bidding::commands::{handle_place_bid as command_handle_place_bid, PlaceBidRequest};
use crate::bidding::error::BidError;
use crate::query;
use crate::store::SharedBidStore;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Router

// 입찰 요청 본문은 작으므로 여유 있게 64KB로 제한
const BODY_LIMIT: usize = 64 * 1024;

// 금액은 정수(루피)만 허용, 소수점 금액은 본문 오류로 처리
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// 라우터 설정
/// `/api/get-bids`, `/api/place-bid`는 기존 스토어프론트 경로 호환용
pub fn routes(store: SharedBidStore) -> Router {
    // 스토어프론트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/bids",
            get(handle_get_bids)
                .post(handle_place_bid)
                .fallback(handle_method_not_allowed),
        )
        .route(
            "/api/get-bids",
            get(handle_get_bids).fallback(handle_method_not_allowed),
        )
        .route(
            "/api/place-bid",
            post(handle_place_bid).fallback(handle_method_not_allowed),
        )
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(store)
}

// endregion: --- Router

// region:    --- Command Handlers

/// 입찰 요청 처리
pub async fn handle_place_bid(
    State(store): State<SharedBidStore>,
    payload: Result<Json<PlaceBidRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            // 역직렬화 상세는 로그에만 남긴다
            warn!("{:<12} --> 잘못된 요청 본문: {}", "Handler", rejection.body_text());
            return error_response(
                BidError::InvalidRequest(INVALID_BODY_MESSAGE.to_string()),
                "Failed to place bid",
            );
        }
    };

    match command_handle_place_bid(req, &*store, Utc::now()).await {
        Ok(bid) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Bid placed successfully!",
                "bid": bid
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Failed to place bid"),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

#[derive(Debug, Deserialize)]
pub struct BidsParams {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
}

/// 상품 입찰 이력 조회
pub async fn handle_get_bids(
    State(store): State<SharedBidStore>,
    params: Result<Query<BidsParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!("{:<12} --> 잘못된 쿼리: {}", "Handler", rejection.body_text());
            return message_response(StatusCode::BAD_REQUEST, "Invalid query string");
        }
    };
    let Some(raw_id) = params.product_id.filter(|id| !id.trim().is_empty()) else {
        return message_response(StatusCode::BAD_REQUEST, "Product ID is required");
    };
    let Ok(product_id) = raw_id.trim().parse::<i64>() else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid product ID");
    };

    info!("{:<12} --> 입찰 이력 조회 id: {}", "HandlerQuery", product_id);
    match query::handlers::list_bids(&*store, product_id).await {
        Ok(bids) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "bids": bids
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Failed to get bids"),
    }
}

// endregion: --- Query Handlers

// region:    --- Responses

/// 허용되지 않은 메서드
pub async fn handle_method_not_allowed() -> Response {
    message_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "message": message
        })),
    )
        .into_response()
}

/// 입찰 오류를 응답으로 변환
/// 저장소 오류는 원인을 로그로만 남기고 일반 메시지로 응답한다.
fn error_response(err: BidError, storage_message: &str) -> Response {
    match &err {
        BidError::Storage(e) => {
            error!("{:<12} --> 저장소 오류: {:?}", "Handler", e);
            message_response(StatusCode::INTERNAL_SERVER_ERROR, storage_message)
        }
        BidError::NotFound(_) => message_response(StatusCode::NOT_FOUND, &err.to_string()),
        other => message_response(StatusCode::BAD_REQUEST, &other.to_string()),
    }
}

// endregion: --- Responses
