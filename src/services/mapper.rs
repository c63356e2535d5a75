//! # 엑셀 행 → 구매 주문 레코드 매핑
//!
//! `workbook` 모듈이 읽어온 문자열 행(`Vec<Vec<String>>`)을
//! `SheetLayout`에 따라 `PurchaseOrder`로 변환하는 순수 함수입니다.
//! 파일 I/O나 공유 상태가 없으므로 동시에 여러 요청에서 호출해도 안전하고,
//! 같은 입력에 대해서는 항상 같은 결과를 냅니다.
//!
//! ## 처리 순서 (행마다)
//! 1. 헤더 행(`header_rows`개) 건너뛰기
//! 2. 식별자 열이 비어 있으면 건너뛰기
//! 3. 식별자 필터가 있으면 정확히 일치하는 행만 남기기
//! 4. 짧은 행은 빈 문자열로 채우기(padding)
//! 5. 열 매핑 적용 + 완료 상태 계산

use std::borrow::Cow;

use crate::models::PurchaseOrder;
use crate::services::layout::SheetLayout;
use crate::services::status::completion_status;

/// 시트의 행들을 구매 주문 레코드로 변환합니다.
///
/// # 매개변수
/// - `rows`: 시트의 모든 행 (헤더 포함)
/// - `layout`: 열 매핑 설정
/// - `job_id_filter`: `Some("")`은 필터 없음과 같습니다.
///
/// # 반환값
/// 조건에 맞는 행이 없으면 빈 `Vec`을 반환합니다.
pub fn map_rows(
    rows: &[Vec<String>],
    layout: &SheetLayout,
    job_id_filter: Option<&str>,
) -> Vec<PurchaseOrder> {
    let filter = job_id_filter.filter(|f| !f.is_empty());
    let width = layout.required_width();

    rows.iter()
        .skip(layout.header_rows)
        .filter_map(|row| {
            let id = row.get(layout.id_column).map(String::as_str).unwrap_or("");
            if id.is_empty() {
                return None;
            }
            if filter.is_some_and(|f| f != id) {
                return None;
            }
            Some(map_row(&pad_row(row, width), layout))
        })
        .collect()
}

/// 행 길이가 `width`보다 짧으면 빈 셀을 덧붙인 복사본을 만듭니다.
///
/// Cow(Copy-on-Write): 이미 충분히 긴 행은 복사하지 않고 빌려서 씁니다.
fn pad_row(row: &[String], width: usize) -> Cow<'_, [String]> {
    if row.len() >= width {
        return Cow::Borrowed(row);
    }
    let mut padded = row.to_vec();
    padded.resize(width, String::new());
    Cow::Owned(padded)
}

/// 패딩된 한 행을 레코드로 변환합니다.
fn map_row(row: &[String], layout: &SheetLayout) -> PurchaseOrder {
    let mut order = PurchaseOrder::default();

    for &(field, column) in layout.columns {
        field.apply(&mut order, &row[column], layout.int_policy);
    }

    // 상태 열의 원본 값은 무시하고 납품일 메모 + 주문 수량으로 다시 계산합니다.
    if let Some(source) = layout.status {
        let status = completion_status(&row[source.delivery_column], &row[source.ordered_column]);
        order.status = Some(status.as_str().to_string());
    }

    order
}
