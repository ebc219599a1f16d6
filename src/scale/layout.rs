use serde::{Deserialize, Serialize};

/// 눈금 종류. 높이와 굵기, 라벨 여부를 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickClass {
    /// 1 unit 간격의 가장 짧은 눈금
    Minor,
    /// 5 unit 간격 눈금(라벨 없음)
    Medium,
    /// 10 unit 간격 눈금(라벨 있음)
    Major,
}

impl TickClass {
    /// 눈금 값으로 종류를 분류한다. 10의 배수가 5의 배수보다 우선한다.
    pub fn classify(unit_value: u32) -> Self {
        if unit_value % 10 == 0 {
            TickClass::Major
        } else if unit_value % 5 == 0 {
            TickClass::Medium
        } else {
            TickClass::Minor
        }
    }
}

/// 눈금 하나. unit_value 외의 상태는 모두 파생값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub unit_value: u32,
    pub class: TickClass,
    pub labeled: bool,
}

impl Tick {
    pub fn new(unit_value: u32) -> Self {
        let class = TickClass::classify(unit_value);
        Self {
            unit_value,
            class,
            labeled: class == TickClass::Major,
        }
    }
}

/// 0..=max_units 범위의 눈금을 순서대로 생성한다(max_units + 1개).
pub fn build_ticks(max_units: u32) -> Vec<Tick> {
    (0..=max_units).map(Tick::new).collect()
}

/// 눈금 트랙의 기하 정보(px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleGeometry {
    /// 트랙 좌우 여백
    pub padding: f64,
    /// 0 ~ max_units 사이 트랙 길이
    pub track_width: f64,
    /// 주사기 몸통(바렐) 높이
    pub barrel_height: f64,
    pub minor_tick_height: f64,
    pub medium_tick_height: f64,
    pub major_tick_height: f64,
    pub minor_stroke: f64,
    pub medium_stroke: f64,
    pub major_stroke: f64,
    pub label_font_size: f64,
}

impl Default for ScaleGeometry {
    fn default() -> Self {
        Self {
            padding: 24.0,
            track_width: 560.0,
            barrel_height: 40.0,
            minor_tick_height: 8.0,
            medium_tick_height: 14.0,
            major_tick_height: 22.0,
            minor_stroke: 1.0,
            medium_stroke: 1.5,
            major_stroke: 2.0,
            label_font_size: 12.0,
        }
    }
}

impl ScaleGeometry {
    /// 그릴 수 있는 값인지 확인한다. 트랙 폭은 양수, 나머지는 0 이상의 유한값이어야 한다.
    pub fn is_drawable(&self) -> bool {
        let non_negative = [
            self.padding,
            self.barrel_height,
            self.minor_tick_height,
            self.medium_tick_height,
            self.major_tick_height,
            self.minor_stroke,
            self.medium_stroke,
            self.major_stroke,
            self.label_font_size,
        ];
        self.track_width.is_finite()
            && self.track_width > 0.0
            && non_negative.iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    /// 전체 폭(여백 포함).
    pub fn total_width(&self) -> f64 {
        self.padding * 2.0 + self.track_width
    }

    /// 눈금 값을 x 좌표로 선형 보간한다. `max_units == 0`이면 정의되지 않는다.
    pub fn position_of(&self, unit_value: f64, max_units: u32) -> Option<f64> {
        if max_units == 0 {
            return None;
        }
        Some(self.padding + unit_value / f64::from(max_units) * self.track_width)
    }

    /// 계산된 units 위치의 마커 좌표.
    ///
    /// 범위를 벗어난 값은 [0, max_units]로 잘라서 그리지만,
    /// 값이 없거나 유한하지 않으면 마커를 아예 생략한다.
    pub fn marker_offset(&self, units: Option<f64>, max_units: u32) -> Option<f64> {
        let units = units.filter(|u| u.is_finite())?;
        let clamped = units.clamp(0.0, f64::from(max_units));
        self.position_of(clamped, max_units)
    }

    pub fn tick_height(&self, class: TickClass) -> f64 {
        match class {
            TickClass::Minor => self.minor_tick_height,
            TickClass::Medium => self.medium_tick_height,
            TickClass::Major => self.major_tick_height,
        }
    }

    pub fn tick_stroke(&self, class: TickClass) -> f64 {
        match class {
            TickClass::Minor => self.minor_stroke,
            TickClass::Medium => self.medium_stroke,
            TickClass::Major => self.major_stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_track_edges() {
        let g = ScaleGeometry {
            padding: 10.0,
            track_width: 300.0,
            ..ScaleGeometry::default()
        };
        assert_eq!(g.position_of(0.0, 30), Some(10.0));
        assert_eq!(g.position_of(30.0, 30), Some(310.0));
        assert_eq!(g.position_of(15.0, 30), Some(160.0));
    }

    #[test]
    fn drawable_needs_positive_track() {
        assert!(ScaleGeometry::default().is_drawable());
        for bad in [
            ScaleGeometry { track_width: 0.0, ..ScaleGeometry::default() },
            ScaleGeometry { track_width: -10.0, ..ScaleGeometry::default() },
            ScaleGeometry { track_width: f64::NAN, ..ScaleGeometry::default() },
            ScaleGeometry { padding: -1.0, ..ScaleGeometry::default() },
            ScaleGeometry { major_stroke: f64::INFINITY, ..ScaleGeometry::default() },
        ] {
            assert!(!bad.is_drawable(), "{bad:?}");
        }
    }

    #[test]
    fn zero_capacity_has_no_position() {
        let g = ScaleGeometry::default();
        assert_eq!(g.position_of(0.0, 0), None);
        assert_eq!(g.marker_offset(Some(1.0), 0), None);
    }

    #[test]
    fn marker_is_clamped_but_dropped_when_undefined() {
        let g = ScaleGeometry::default();
        let right = g.position_of(50.0, 50);
        let left = g.position_of(0.0, 50);
        assert_eq!(g.marker_offset(Some(75.0), 50), right);
        assert_eq!(g.marker_offset(Some(-3.0), 50), left);
        assert_eq!(g.marker_offset(None, 50), None);
        assert_eq!(g.marker_offset(Some(f64::NAN), 50), None);
        assert_eq!(g.marker_offset(Some(f64::INFINITY), 50), None);
    }

    #[test]
    fn major_takes_precedence_over_medium() {
        assert_eq!(TickClass::classify(0), TickClass::Major);
        assert_eq!(TickClass::classify(20), TickClass::Major);
        assert_eq!(TickClass::classify(25), TickClass::Medium);
        assert_eq!(TickClass::classify(26), TickClass::Minor);
    }
}
