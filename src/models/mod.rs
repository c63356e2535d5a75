//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `purchase_order`: 구매 주문 레코드와 납품 완료 상태
//! - `request`: 목록/가져오기 요청 파라미터와 페이지 응답
//! - `setting`: 설정 시트의 (경로, 이름) 행
//!
//! `pub use X::*;`로 재공개하여 `crate::models::PurchaseOrder`처럼 접근합니다.

pub mod purchase_order;
pub mod request;
pub mod setting;

pub use purchase_order::*;
pub use request::*;
pub use setting::*;
