//! # 셀 값 변환(Coercion) 헬퍼
//!
//! 엑셀 셀의 원본 문자열을 `Option<String>` / `Option<i64>`로 변환합니다.
//! 빈 셀은 빈 문자열이 아니라 `None`(값 없음)이 됩니다.
//!
//! 정수 변환에는 두 가지 정책이 있습니다:
//! - `ZeroIsAbsent`: 0도 값 없음으로 처리 → `"ordered": null`
//! - `EmptyOnly`: 빈 문자열만 값 없음 → `"ordered": 0`
//!
//! 어떤 정책을 쓸지는 시트 레이아웃(`layout`)이 정하며, 설정으로 덮어쓸 수 있습니다.

use std::str::FromStr;

/// 정수 셀의 "값 없음" 판정 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntPolicy {
    /// 빈 문자열, 숫자가 아닌 값, 그리고 0을 `None`으로 처리
    ZeroIsAbsent,
    /// 빈 문자열과 숫자가 아닌 값만 `None`으로 처리
    EmptyOnly,
}

impl IntPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            IntPolicy::ZeroIsAbsent => "zero-is-absent",
            IntPolicy::EmptyOnly => "empty-only",
        }
    }
}

impl FromStr for IntPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero-is-absent" => Ok(IntPolicy::ZeroIsAbsent),
            "empty-only" => Ok(IntPolicy::EmptyOnly),
            other => Err(format!("unknown integer policy '{}'", other)),
        }
    }
}

/// 빈 문자열이면 `None`, 아니면 원본 그대로 `Some`
///
/// 공백 제거(trim)는 하지 않습니다. `" "`는 값이 있는 것으로 봅니다.
pub fn string_or_nil(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// 정수로 파싱할 수 있으면 `Some`, 아니면 `None`
///
/// `"+5"`, `"-5"` 같은 부호는 허용하지만, 앞뒤 공백이나 소수점은 허용하지 않습니다.
pub fn int_or_nil(raw: &str, policy: IntPolicy) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }

    // .parse::<i64>().ok(): 파싱 실패(Err)를 None으로 바꿉니다.
    let value = raw.parse::<i64>().ok()?;

    match policy {
        IntPolicy::ZeroIsAbsent if value == 0 => None,
        _ => Some(value),
    }
}
