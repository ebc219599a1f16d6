//! 표시 포맷터: 어떤 입력에도 패닉 없이 문자열을 돌려주는지 확인한다.
use syringe_dose_calculator::format::{format_default, format_number, FormatValue, PLACEHOLDER};

#[test]
fn rounds_to_two_places_by_default() {
    assert_eq!(format_number(1.2345, 2), "1.23");
    assert_eq!(format_default(1.2345), "1.23");
    assert_eq!(format_default(5.0), "5");
    assert_eq!(format_default(0.1), "0.1");
}

#[test]
fn non_finite_and_absent_values_use_placeholder() {
    let cases: Vec<FormatValue> = vec![
        FormatValue::Missing,
        None::<f64>.into(),
        f64::NAN.into(),
        f64::INFINITY.into(),
        f64::NEG_INFINITY.into(),
        "12.5".into(),
        String::from("abc").into(),
        true.into(),
        FormatValue::NonNumeric,
    ];
    for case in cases {
        assert_eq!(format_number(case, 2), PLACEHOLDER, "{case:?}");
    }
}

#[test]
fn finite_values_never_render_placeholder() {
    let values = [
        0.0,
        -0.0,
        1e-300,
        -12.345,
        1234567.891,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
    ];
    for v in values {
        for places in [0, 1, 2, 6, 20, u32::MAX] {
            let s = format_number(v, places);
            assert_ne!(s, PLACEHOLDER, "{v} @ {places}");
            assert!(!s.contains(','), "{s}");
        }
    }
}

#[test]
fn optional_values_pass_through() {
    assert_eq!(format_default(Some(4.0)), "4");
    assert_eq!(format_default(Some(f64::NAN)), PLACEHOLDER);
    assert_eq!(format_number(Some(30.000000000000004), 2), "30");
}
