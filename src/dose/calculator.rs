/// U-100 눈금 기준: 1 mL = 100 units.
pub const UNITS_PER_ML: f64 = 100.0;

/// 사용자가 입력한 용량 계산 값.
///
/// 모든 값은 파싱 직후의 임의 실수이며 음수, 0, NaN, 무한대가 올 수 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseInput {
    /// 1회 투여량 [mg]
    pub dose_mg: f64,
    /// 바이알 총 약물량 [mg]
    pub vial_mg: f64,
    /// 희석액(BAC water) 부피 [mL]
    pub water_ml: f64,
}

/// 용량 계산 결과.
///
/// 각 필드는 유한한 음이 아닌 값이거나 `None`(정의되지 않음)이다.
/// `None`은 0과 구분되며 이후 단계로 그대로 전파된다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoseResult {
    /// 재구성 농도 [mg/mL]
    pub concentration_mg_per_ml: Option<f64>,
    /// 흡인할 부피 [mL]
    pub volume_ml: Option<f64>,
    /// U-100 주사기 눈금 [units]
    pub units: Option<f64>,
}

impl DoseInput {
    pub fn new(dose_mg: f64, vial_mg: f64, water_ml: f64) -> Self {
        Self {
            dose_mg,
            vial_mg,
            water_ml,
        }
    }

    /// 현재 입력으로 용량을 계산한다.
    pub fn calculate(&self) -> DoseResult {
        calculate(self.dose_mg, self.vial_mg, self.water_ml)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// 투여량, 바이알 용량, 희석액 부피로 농도/부피/units를 계산한다.
///
/// 1. 농도 = vial / water (둘 다 양수일 때만)
/// 2. 부피 = dose / 농도 (dose 양수, 농도 양수일 때만)
/// 3. units = 부피 × 100
///
/// 실패하지 않는다. 잘못된 입력은 해당 단계부터 `None`으로 내려간다.
/// NaN은 모든 비교에서 거짓이므로 양수 조건에서 자연스럽게 걸러진다.
pub fn calculate(dose_mg: f64, vial_mg: f64, water_ml: f64) -> DoseResult {
    let concentration_mg_per_ml = if vial_mg > 0.0 && water_ml > 0.0 {
        finite(vial_mg / water_ml)
    } else {
        None
    };

    let volume_ml = concentration_mg_per_ml
        .filter(|c| *c > 0.0 && dose_mg > 0.0)
        .and_then(|c| finite(dose_mg / c));

    let units = volume_ml.and_then(|v| finite(v * UNITS_PER_ML));

    DoseResult {
        concentration_mg_per_ml,
        volume_ml,
        units,
    }
}
