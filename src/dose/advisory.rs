use crate::syringe::SyringeProfile;

/// 계산 결과에 대한 권고 메시지. 계산 오류가 아니라 사용자 주의 안내이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoseAdvisory {
    /// 계산된 units가 선택한 주사기 최대 눈금을 넘는다.
    ExceedsCapacity { units: f64, max_units: u32 },
    /// 1 unit 미만이라 눈금으로 정확히 재기 어렵다.
    BelowOneUnit { units: f64 },
}

/// 이미 계산된 units 값에 임계값 비교만 적용해 권고 목록을 만든다.
pub fn advisories_for(units: Option<f64>, syringe: SyringeProfile) -> Vec<DoseAdvisory> {
    let Some(units) = units.filter(|u| u.is_finite()) else {
        return Vec::new();
    };
    let max_units = syringe.max_units();
    let mut out = Vec::new();
    if units > f64::from(max_units) {
        out.push(DoseAdvisory::ExceedsCapacity { units, max_units });
    }
    if units > 0.0 && units < 1.0 {
        out.push(DoseAdvisory::BelowOneUnit { units });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_full_syringe_is_fine() {
        assert!(advisories_for(Some(30.0), SyringeProfile::U30).is_empty());
        assert!(advisories_for(Some(1.0), SyringeProfile::U30).is_empty());
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(
            advisories_for(Some(30.5), SyringeProfile::U30),
            vec![DoseAdvisory::ExceedsCapacity {
                units: 30.5,
                max_units: 30
            }]
        );
        assert_eq!(
            advisories_for(Some(0.5), SyringeProfile::U100),
            vec![DoseAdvisory::BelowOneUnit { units: 0.5 }]
        );
        assert!(advisories_for(Some(0.0), SyringeProfile::U100).is_empty());
        assert!(advisories_for(None, SyringeProfile::U100).is_empty());
    }
}
