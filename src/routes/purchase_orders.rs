//! # 구매 주문(Purchase Order) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/v1/purchaseorders/import | `import_upload` | 업로드한 엑셀 파일 변환 |
//! | POST | /api/v1/purchaseorders/path | `import_from_path` | 로컬/UNC 경로의 엑셀 파일 변환 (백업 폴백) |
//! | GET | /api/v1/purchaseorders/setting | `get_settings` | 설정 시트의 (경로, 이름) 목록 |
//! | POST | /api/v1/purchaseorders | `create_orders` | 구매 주문 일괄 저장 |
//! | GET | /api/v1/purchaseorders | `list_orders` | 페이지 단위 목록 조회 |
//!
//! 잘못된 입력은 400, 파일 처리/저장 실패는 500으로 응답합니다.
//! axum 추출자의 거부(rejection)도 `Result<추출자, Rejection>`으로 받아서
//! 400 `{ "error": ... }` 형태로 맞춥니다.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::MultipartRejection,
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Multipart, Query, State,
    },
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    db,
    error::AppError,
    models::*,
    services::{backup::BackupStore, listing, mapper, settings, workbook},
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `Config`는 시작 시 한 번 만든 불변 값이며, `Arc`로 공유합니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    /// 엑셀 원본 백업 디렉토리
    pub backups: BackupStore,
}

/// `POST /purchaseorders/import` — 업로드한 엑셀 파일을 구매 주문 목록으로 변환합니다.
///
/// multipart 필드 `file`에 엑셀 파일을 담아 보냅니다.
/// 응답: `{ "data": [...] }`
pub async fn import_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let mut upload: Option<(String, Bytes)> = None;

    // next_field(): multipart 본문의 필드를 하나씩 꺼냅니다.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        // bytes()가 field를 소비하므로 파일 이름을 먼저 복사해 둡니다.
        let file_name = field.file_name().unwrap_or("upload.xlsx").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read uploaded file: {}", e)))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    let layout = &state.config.upload_layout;
    let rows =
        workbook::load_rows_from_bytes(bytes.to_vec(), layout.sheet_index, file_name.clone())
            .await?;
    let orders = mapper::map_rows(&rows, layout, None);

    tracing::info!(
        file = %file_name,
        layout = layout.name,
        orders = orders.len(),
        "Imported purchase orders from upload"
    );
    Ok(Json(json!({ "data": orders })))
}

/// `POST /purchaseorders/path` — 디스크 또는 네트워크 공유의 엑셀 파일을 변환합니다.
///
/// 파일 경로는 다음 순서로 정합니다:
/// 1. 쿼리 `?path=`
/// 2. JSON 본문 `{ "path": "..." }` (본문이 없거나 JSON이 아니면 무시)
/// 3. 쿼리 `?name=` → 설정 시트에서 같은 이름의 경로
///
/// 원본이 없으면 최근 백업을 읽고, 있으면 백업을 갱신합니다.
/// `?job_id_no=`가 있으면 그 Job ID와 정확히 일치하는 행만 반환합니다.
pub async fn import_from_path(
    State(state): State<AppState>,
    query: Result<Query<PathImportQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let body = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let body_path = serde_json::from_slice::<PathImportBody>(&body)
        .ok()
        .map(|b| b.path);

    let path = match (non_empty(query.path).or(non_empty(body_path)), non_empty(query.name)) {
        (Some(path), _) => path,
        (None, Some(name)) => setting_path(&state.config, &name).await?,
        (None, None) => return Err(AppError::BadRequest("Path is required".to_string())),
    };

    let resolved = state.backups.resolve(&path).await?;

    let layout = &state.config.path_layout;
    let rows = workbook::load_rows_from_path(resolved.clone(), layout.sheet_index).await?;
    let orders = mapper::map_rows(&rows, layout, query.job_id_no.as_deref());

    tracing::info!(
        path = %path,
        read_from = %resolved.display(),
        layout = layout.name,
        orders = orders.len(),
        "Imported purchase orders from path"
    );
    Ok(Json(json!({ "data": orders })))
}

/// `GET /purchaseorders/setting` — 설정 시트의 (경로, 이름) 목록을 반환합니다.
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let path = configured_setting_file(&state.config)?;
    let settings = settings::read_settings(path).await?;
    Ok(Json(json!({ "data": settings })))
}

/// `POST /purchaseorders` — 구매 주문 배열을 한 번에 저장합니다.
///
/// 응답: `{ "inserted": 3, "batchId": "..." }`
pub async fn create_orders(
    State(state): State<AppState>,
    payload: Result<Json<Vec<PurchaseOrder>>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(orders) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if orders.is_empty() {
        return Err(AppError::BadRequest(
            "At least one purchase order is required".to_string(),
        ));
    }

    let summary = db::insert_many(&state.pool, &orders).await?;
    tracing::info!(batch_id = %summary.batch_id, inserted = summary.inserted, "Stored purchase orders");

    Ok(Json(json!({
        "inserted": summary.inserted,
        "batchId": summary.batch_id,
    })))
}

/// `GET /purchaseorders?search=&pageNo=1&pageSize=10` — 페이지 단위 목록
///
/// 응답: `{ "data": [...], "total": 25, "page": 1, "pageSize": 10 }`
pub async fn list_orders(
    State(state): State<AppState>,
    query: Result<Query<RequestQuery>, QueryRejection>,
) -> Result<Json<Page>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let page = listing::list_orders(&state.pool, &query).await?;
    Ok(Json(page))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn configured_setting_file(config: &Config) -> Result<PathBuf, AppError> {
    config
        .setting_file_path
        .as_ref()
        .map(PathBuf::from)
        .ok_or_else(|| AppError::NotConfigured("Setting file path is not configured".to_string()))
}

/// 설정 시트에서 `name`에 해당하는 엑셀 경로를 찾습니다.
async fn setting_path(config: &Config, name: &str) -> Result<String, AppError> {
    let settings = settings::read_settings(configured_setting_file(config)?).await?;
    settings::find_setting(&settings, name)
        .map(|s| s.path.clone())
        .ok_or_else(|| AppError::BadRequest(format!("No setting named '{}'", name)))
}
