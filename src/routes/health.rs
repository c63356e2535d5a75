//! # 헬스체크(Health Check) / API 정보 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok" }`
//! - `GET /api/v1/info` → `{ "title": ..., "description": ..., "version": ... }`

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::ApiInfo;
use crate::error::AppError;
use crate::routes::AppState;

/// `GET /health` — 서버와 데이터베이스 연결 상태를 확인합니다.
///
/// `SELECT 1`이 실패하면 500 `{ "error": "database is unavailable" }`를 반환합니다.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(AppError::store("database is unavailable"))?;

    Ok(Json(json!({
        "status": "ok"
    })))
}

/// `GET /info` — 설정에 등록된 API 제목/설명/버전
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(state.config.api.clone())
}
