//! 화면 표시용 숫자 포맷터. 어떤 입력에도 실패하지 않는다.

/// 값이 없거나 숫자가 아닐 때 표시하는 기호.
pub const PLACEHOLDER: &str = "—";

/// 기본 소수 자릿수.
pub const DEFAULT_DECIMALS: u32 = 2;

/// f64가 의미 있게 표현하는 최대 소수 자릿수. 이를 넘는 요청은 여기로 제한한다.
const MAX_DECIMALS: u32 = 15;

/// 포맷 대상 값. 입력 경로에서 검증되지 않은 데이터가 넘어올 수 있어
/// 숫자가 아닌 값도 받는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatValue {
    Number(f64),
    Missing,
    NonNumeric,
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        FormatValue::Number(value)
    }
}

impl From<f32> for FormatValue {
    fn from(value: f32) -> Self {
        FormatValue::Number(f64::from(value))
    }
}

impl From<i32> for FormatValue {
    fn from(value: i32) -> Self {
        FormatValue::Number(f64::from(value))
    }
}

impl From<u32> for FormatValue {
    fn from(value: u32) -> Self {
        FormatValue::Number(f64::from(value))
    }
}

impl<T: Into<FormatValue>> From<Option<T>> for FormatValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormatValue::Missing, Into::into)
    }
}

/// 문자열은 숫자 형태라도 숫자 타입이 아니므로 그대로 표시하지 않는다.
impl From<&str> for FormatValue {
    fn from(_: &str) -> Self {
        FormatValue::NonNumeric
    }
}

impl From<String> for FormatValue {
    fn from(_: String) -> Self {
        FormatValue::NonNumeric
    }
}

impl From<bool> for FormatValue {
    fn from(_: bool) -> Self {
        FormatValue::NonNumeric
    }
}

/// 값을 `decimal_places` 자리로 반올림해 문자열로 만든다.
///
/// - 없음/비숫자/NaN/±무한대 → [`PLACEHOLDER`]
/// - 반올림은 0에서 먼 쪽(half away from zero)이며, 이진 표현 오차를 상쇄하려고
///   반올림 전에 `f64::EPSILON`을 더한다.
/// - 결과는 최소 길이 십진 표기(뒤쪽 0 채움 없음, 천 단위 구분자 없음).
pub fn format_number(value: impl Into<FormatValue>, decimal_places: u32) -> String {
    match value.into() {
        FormatValue::Number(n) if n.is_finite() => round_to_string(n, decimal_places),
        _ => PLACEHOLDER.to_string(),
    }
}

/// 소수 둘째 자리 기본 포맷.
pub fn format_default(value: impl Into<FormatValue>) -> String {
    format_number(value, DEFAULT_DECIMALS)
}

fn round_to_string(n: f64, decimal_places: u32) -> String {
    let places = decimal_places.min(MAX_DECIMALS);
    let factor = 10_f64.powi(places as i32);
    let scaled = (n.abs() + f64::EPSILON) * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        // 자릿수를 곱하면 범위를 넘는 큰 값은 이미 정수이므로 원래 값을 쓴다.
        n.abs()
    };
    let signed = if n.is_sign_negative() && rounded != 0.0 {
        -rounded
    } else {
        rounded
    };
    format!("{signed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(0.125, 2), "0.13");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0, 2), "0");
        assert_eq!(format_number(-0.001, 2), "0");
    }

    #[test]
    fn huge_values_do_not_use_exponent() {
        let s = format_number(1e21, 2);
        assert!(!s.contains('e'), "{s}");
        assert!(!s.contains(','), "{s}");
        let back: f64 = s.parse().expect("plain decimal");
        assert!((back - 1e21).abs() / 1e21 < 1e-12);
    }

    #[test]
    fn excessive_decimals_are_capped() {
        assert_eq!(format_number(0.5, 400), "0.5");
    }
}
