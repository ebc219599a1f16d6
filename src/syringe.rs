use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dose::UNITS_PER_ML;

/// 선택 가능한 U-100 인슐린 주사기 규격.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum SyringeProfile {
    /// 30 units (0.3 mL)
    #[value(name = "30")]
    U30,
    /// 50 units (0.5 mL)
    #[value(name = "50")]
    U50,
    /// 100 units (1.0 mL)
    #[default]
    #[value(name = "100")]
    U100,
}

impl SyringeProfile {
    /// 화면에 노출되는 순서대로 나열한 전체 규격.
    pub const ALL: [SyringeProfile; 3] = [
        SyringeProfile::U30,
        SyringeProfile::U50,
        SyringeProfile::U100,
    ];

    /// 주사기 최대 눈금 [units].
    pub fn max_units(&self) -> u32 {
        match self {
            SyringeProfile::U30 => 30,
            SyringeProfile::U50 => 50,
            SyringeProfile::U100 => 100,
        }
    }

    /// 눈금 수와 mL 용량을 함께 보여주는 표시용 이름. 예: `30 units (0.3 mL)`.
    pub fn label(&self) -> String {
        format!("{} units ({:.1} mL)", self.max_units(), self.capacity_ml())
    }

    /// 최대 눈금을 mL로 환산한 용량.
    pub fn capacity_ml(&self) -> f64 {
        f64::from(self.max_units()) / UNITS_PER_ML
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_follow_u100_scale() {
        assert!((SyringeProfile::U30.capacity_ml() - 0.3).abs() < 1e-12);
        assert!((SyringeProfile::U50.capacity_ml() - 0.5).abs() < 1e-12);
        assert!((SyringeProfile::U100.capacity_ml() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn label_shows_units_and_capacity() {
        assert_eq!(SyringeProfile::U30.label(), "30 units (0.3 mL)");
        assert_eq!(SyringeProfile::U50.label(), "50 units (0.5 mL)");
        assert_eq!(SyringeProfile::U100.label(), "100 units (1.0 mL)");
    }
}
