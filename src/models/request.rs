//! # 요청/응답 모델
//!
//! - `RequestQuery`: 목록 조회의 페이지/검색 파라미터 (`?search=&pageNo=&pageSize=`)
//! - `PathImportQuery`, `PathImportBody`: 경로 기반 가져오기 요청
//! - `Page`: 페이지 단위 목록 응답

use serde::{Deserialize, Serialize};

use super::PurchaseOrder;

/// 기본 페이지 번호 (1부터 시작)
pub const DEFAULT_PAGE_NO: i64 = 1;
/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 목록 조회 쿼리 파라미터
///
/// 파라미터가 생략되면 기본값을 사용합니다.
/// 0 이하의 값은 `listing` 서비스에서 400 에러로 거부됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_page_no")]
    pub page_no: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_no() -> i64 {
    DEFAULT_PAGE_NO
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// `POST /purchaseorders/path`의 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct PathImportQuery {
    /// 엑셀 파일 경로 (로컬 또는 UNC 경로)
    pub path: Option<String>,
    /// 설정 시트에 등록된 이름. `path` 대신 사용할 수 있습니다.
    pub name: Option<String>,
    /// 이 값과 정확히 일치하는 Job ID 행만 반환
    pub job_id_no: Option<String>,
}

/// `POST /purchaseorders/path`의 (선택적) JSON 본문
#[derive(Debug, Default, Deserialize)]
pub struct PathImportBody {
    #[serde(default)]
    pub path: String,
}

/// 페이지 단위 목록 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub data: Vec<PurchaseOrder>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
