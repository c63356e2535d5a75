//! # 구매 주문(Purchase Order) 모델
//!
//! 엑셀 시트의 한 행(row)을 정규화한 레코드입니다.
//! 시트 버전마다 채워지는 필드가 다르기 때문에, 이 구조체는
//! 모든 버전의 필드를 합친 형태(union)이며 **모든 필드가 Option**입니다.
//!
//! 값이 없으면 `None` → JSON `null`로 직렬화됩니다.
//! 빈 문자열("")이나 0을 `null` 대신 쓰지 않습니다.

use serde::{Deserialize, Serialize};

/// 정규화된 구매 주문 레코드
///
/// `skip_serializing_if`를 사용하지 않으므로 값이 없는 필드도
/// `"ordered": null`처럼 항상 응답에 포함됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub job_id_no: Option<String>,
    /// `type`은 Rust 예약어이므로 `r#type`으로 선언하고,
    /// JSON에서는 serde가 "type"으로 이름을 바꿉니다.
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub sales_team: Option<String>,
    pub project_manager: Option<String>,
    pub purchasing: Option<String>,
    pub customer_po: Option<String>,
    pub job_amount: Option<i64>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub customer: Option<String>,
    pub product_code: Option<String>,
    pub product_description: Option<String>,
    pub ordered: Option<i64>,
    pub received: Option<i64>,
    pub remain: Option<i64>,
    pub currency: Option<String>,
    pub unit_list_price: Option<i64>,
    pub extend_list_price: Option<i64>,
    pub discount_percent: Option<i64>,
    pub discount_amount: Option<i64>,
    pub extend_unit_net_price: Option<i64>,
    pub extend_net_price: Option<i64>,
    pub pr: Option<String>,
    pub pr_date: Option<String>,
    pub po: Option<String>,
    pub po_date: Option<String>,
    pub request_date: Option<String>,
    pub po_receive_date: Option<String>,
    pub distribution: Option<String>,
    pub payment_term: Option<String>,
    pub received_date: Option<String>,
    pub stock_picking_out_date: Option<String>,
    pub delivery_date: Option<String>,
    pub status: Option<String>,
    pub remark: Option<String>,
}

/// 납품 완료 여부 (두 가지 상태만 존재)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Completed,
    NotCompleted,
}

impl CompletionStatus {
    /// API 응답과 DB 문서에 기록되는 문자열 표현
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionStatus::Completed => "Completed",
            CompletionStatus::NotCompleted => "Not Completed",
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
