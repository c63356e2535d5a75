//! # 비즈니스 로직 모듈
//!
//! 엑셀 → 구매 주문 변환과 목록 조회의 핵심 로직입니다.
//! HTTP(axum)에 의존하지 않으므로 단위 테스트가 쉽습니다.
//!
//! - `coercion`: 셀 문자열 → `Option<String>` / `Option<i64>`
//! - `status`: 납품일 메모의 괄호 수량으로 완료 상태 계산
//! - `layout`: 버전별 열 매핑 설정
//! - `workbook`: calamine으로 시트를 문자열 행으로 읽기
//! - `mapper`: 문자열 행 → `PurchaseOrder`
//! - `settings`: 설정 시트 (경로, 이름) 조회
//! - `backup`: 원본이 없을 때 백업으로 폴백
//! - `listing`: 페이지네이션 목록 조회

pub mod backup;
pub mod coercion;
pub mod layout;
pub mod listing;
pub mod mapper;
pub mod settings;
pub mod status;
pub mod workbook;
