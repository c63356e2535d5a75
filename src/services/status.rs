//! # 납품 완료 상태 계산
//!
//! 납품일 셀에는 `"2024-05-01 (2 pcs), 2024-05-10 (3 pcs)"`처럼
//! 괄호 안에 납품 수량이 적힌 자유 형식 메모가 들어 있습니다.
//! 괄호 안의 **앞쪽 숫자**를 모두 더한 값이 주문 수량과 정확히 같으면
//! "Completed", 그 외에는 모두 "Not Completed"입니다.
//!
//! 부분 완료 상태나 허용 오차는 없습니다.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::CompletionStatus;

/// `(` 바로 뒤의 숫자들 + `)`가 아닌 임의의 문자들 + `)`
///
/// regex 크레이트의 `\d`는 유니코드 숫자(전각 `２` 등)까지 포함하므로
/// ASCII 숫자 `[0-9]`만 허용합니다.
///
/// LazyLock: 처음 사용할 때 한 번만 컴파일되는 전역 정규식
static UNIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]+)[^)]*\)").expect("unit pattern is a valid regex"));

/// 납품일 메모와 주문 수량 문자열로 완료 상태를 계산합니다.
pub fn completion_status(delivery_annotation: &str, ordered_text: &str) -> CompletionStatus {
    if delivery_annotation.is_empty() || ordered_text.is_empty() {
        return CompletionStatus::NotCompleted;
    }

    let ordered = match ordered_text.parse::<i64>() {
        Ok(0) | Err(_) => return CompletionStatus::NotCompleted,
        Ok(n) => n,
    };

    match delivered_units(delivery_annotation) {
        Some(total) if total == ordered => CompletionStatus::Completed,
        _ => CompletionStatus::NotCompleted,
    }
}

/// 괄호 수량의 합계. 매칭이 없으면 0입니다.
///
/// 숫자가 i64 범위를 넘거나 합계가 넘치면 `None`을 반환합니다.
fn delivered_units(annotation: &str) -> Option<i64> {
    UNIT_PATTERN
        .captures_iter(annotation)
        .try_fold(0i64, |total, caps| {
            let units = caps[1].parse::<i64>().ok()?;
            total.checked_add(units)
        })
}
