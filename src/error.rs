//! # 에러 처리 모듈
//!
//! 핸들러에서 발생할 수 있는 모든 에러를 `AppError` 하나로 통합하고,
//! HTTP 응답 `{ "error": "메시지" }`로 변환합니다.
//!
//! 상태 코드는 두 가지만 사용합니다:
//! - 400: 잘못된 입력 (파일/경로 누락, 0 이하의 페이지 값 등). I/O 전에 거부합니다.
//! - 500: 파일 처리 또는 저장소 실패
//!
//! 어떤 에러도 자동으로 재시도하지 않습니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::backup::BackupError;
use crate::services::workbook::SheetError;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
#[derive(Debug, Error)]
pub enum AppError {
    /// 잘못된 요청 (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// 스프레드시트 읽기 실패 (HTTP 500)
    /// 메시지에 경로와 시트 이름이 포함되어 그대로 전달됩니다.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// 원본도 백업도 읽을 수 없음 (HTTP 500)
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// 저장소 연산 실패 (HTTP 500)
    /// `op`는 "failed to count purchase orders"처럼 어떤 연산이 실패했는지 나타냅니다.
    #[error("{op}")]
    Store {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// 서버 설정 누락 (HTTP 500). 메시지는 그대로 전달됩니다.
    #[error("{0}")]
    NotConfigured(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// `map_err`에 바로 넘길 수 있는 저장소 에러 생성기
    ///
    /// ```ignore
    /// query.execute(pool).await.map_err(AppError::store("failed to insert purchase orders"))?;
    /// ```
    pub fn store(op: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 `{ "error": message }` JSON 응답으로 변환합니다.
    ///
    /// 저장소/내부 에러는 원인(source)을 로그에 남기고,
    /// 클라이언트에는 연산 이름만 전달합니다.
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Sheet(e) => {
                tracing::error!("Spreadsheet error: {}", e);
                e.to_string()
            }
            AppError::Backup(e) => {
                tracing::error!("Backup error: {}", e);
                format!("Failed to find original file or backup: {}", e)
            }
            AppError::Store { op, source } => {
                tracing::error!("Store error ({}): {}", op, source);
                op.to_string()
            }
            AppError::NotConfigured(msg) => {
                tracing::error!("Configuration error: {}", msg);
                msg.clone()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
