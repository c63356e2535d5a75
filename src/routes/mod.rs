//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인, API 정보
//! - `purchase_orders`: 엑셀 변환, 설정 조회, 저장, 목록 조회

pub mod health;
pub mod purchase_orders;

pub use health::*;
pub use purchase_orders::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

/// `/api/v1` 아래에 중첩될 API 라우터를 만듭니다.
///
/// main.rs와 테스트가 같은 라우터를 사용하도록 여기서 조립합니다.
/// 업로드 크기 제한은 `MAX_UPLOAD_BYTES` 설정을 따릅니다.
pub fn api_routes(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/purchaseorders", get(list_orders).post(create_orders))
        .route("/purchaseorders/import", post(import_upload))
        .route("/purchaseorders/path", post(import_from_path))
        .route("/purchaseorders/setting", get(get_settings))
        .route("/health", get(health_check))
        .route("/info", get(api_info))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
