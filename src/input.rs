//! 키 입력 중인 문자열을 숫자로 해석한다.

/// 입력 칸의 원시 문자열을 숫자로 변환한다.
///
/// 앞뒤 공백은 무시하고, 소수점으로 쉼표(`0,25`)도 허용한다.
/// 비어 있거나 해석할 수 없으면 None을 돌려주며, 계산기에는 NaN으로 전달된다.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok()
}

/// 해석 실패를 NaN으로 바꿔 계산기 입력으로 쓴다.
pub fn parse_or_nan(raw: &str) -> f64 {
    parse_amount(raw).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_partial_typing_states() {
        assert_eq!(parse_amount(" 0.25 "), Some(0.25));
        assert_eq!(parse_amount("0,5"), Some(0.5));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert!(parse_or_nan("abc").is_nan());
    }
}
