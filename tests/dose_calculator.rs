//! 용량 환산 회귀 테스트. 실제 재구성 예시 값을 사용한다.
use syringe_dose_calculator::dose::{calculate, UNITS_PER_ML};

fn assert_close(label: &str, actual: Option<f64>, expected: f64, tol: f64) {
    let actual = actual.unwrap_or_else(|| panic!("{label} undefined, expected {expected}"));
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:e}, tol {tol})"
    );
}

#[test]
fn fifteen_mg_vial_in_three_ml() {
    let res = calculate(0.25, 15.0, 3.0);
    assert_close("concentration", res.concentration_mg_per_ml, 5.0, 1e-9);
    assert_close("volume", res.volume_ml, 0.05, 1e-9);
    assert_close("units", res.units, 5.0, 1e-9);
}

#[test]
fn ten_mg_vial_in_two_ml() {
    let res = calculate(0.2, 10.0, 2.0);
    assert_close("units", res.units, 4.0, 1e-9);
}

#[test]
fn large_vial_fills_thirty_units() {
    let res = calculate(50.0, 500.0, 3.0);
    assert_close("units", res.units, 30.0, 1e-6);
}

#[test]
fn concentration_is_vial_over_water() {
    let vials = [0.5, 5.0, 10.0, 15.0, 1000.0];
    let waters = [0.1, 1.0, 2.0, 3.0, 10.0];
    for vial in vials {
        for water in waters {
            let res = calculate(1.0, vial, water);
            assert_close("concentration", res.concentration_mg_per_ml, vial / water, 1e-9);
        }
    }
}

#[test]
fn units_are_volume_times_hundred() {
    for dose in [0.1, 0.25, 1.0, 7.5, 50.0] {
        let res = calculate(dose, 20.0, 2.0);
        let conc = 20.0 / 2.0;
        assert_close("units", res.units, dose / conc * UNITS_PER_ML, 1e-9);
        let volume = res.volume_ml.expect("volume");
        assert_close("units vs volume", res.units, volume * UNITS_PER_ML, 1e-12);
    }
}

#[test]
fn non_positive_or_nan_inputs_leave_units_undefined() {
    let bad = [0.0, -1.0, f64::NAN, f64::NEG_INFINITY];
    for b in bad {
        assert_eq!(calculate(b, 10.0, 2.0).units, None, "dose={b}");
        assert_eq!(calculate(1.0, b, 2.0).units, None, "vial={b}");
        assert_eq!(calculate(1.0, 10.0, b).units, None, "water={b}");
    }
}

#[test]
fn concentration_survives_missing_dose() {
    let res = calculate(f64::NAN, 10.0, 2.0);
    assert_close("concentration", res.concentration_mg_per_ml, 5.0, 1e-12);
    assert_eq!(res.volume_ml, None);
    assert_eq!(res.units, None);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = calculate(0.3, 7.0, 1.3);
    let b = calculate(0.3, 7.0, 1.3);
    assert_eq!(
        a.units.map(f64::to_bits),
        b.units.map(f64::to_bits)
    );
    assert_eq!(a, b);
}
