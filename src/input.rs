//! 사용자 입력(문자열, 파일 값)을 계산 엔진에 넘기기 전에 숫자로 정리한다.
//!
//! 엔진은 모든 값이 유한하다고 가정하므로 NaN/무한대는 이 경계에서 대체값으로 바뀐다.

/// 유한한 값이면 그대로, 아니면 `fallback`을 반환한다.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// 선택 값에서 유한하지 않은 값을 걸러낸다.
pub fn finite_opt(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// 문자열을 숫자로 해석한다. 해석할 수 없으면 `fallback`.
///
/// 소수점으로 쉼표(`0,30`)도 허용한다.
pub fn parse_number(text: &str, fallback: f64) -> f64 {
    parse_optional(text).unwrap_or(fallback)
}

/// 빈 입력이나 해석 불가 입력은 `None`으로 취급한다.
pub fn parse_optional(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
