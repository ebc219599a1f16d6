//! 입력 폼 상태와 명시적 재계산.
//!
//! 입력이 바뀔 때마다 `recompute()`를 호출해 최신 입력 스냅샷으로
//! 계산기, 포맷터, 눈금 배치를 다시 실행한다. 계산 함수 자체는 상태가 없다.

use crate::dose::{advisories_for, DoseAdvisory, DoseInput, DoseResult};
use crate::format::{format_number, DEFAULT_DECIMALS};
use crate::input::parse_or_nan;
use crate::scale::ScaleGeometry;
use crate::syringe::SyringeProfile;

/// 화면에 그대로 표시할 문자열 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseDisplay {
    pub concentration: String,
    pub volume: String,
    pub units: String,
}

/// 한 번의 재계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseSnapshot {
    pub input: DoseInput,
    pub syringe: SyringeProfile,
    pub result: DoseResult,
    pub display: DoseDisplay,
    pub advisories: Vec<DoseAdvisory>,
    /// 눈금 위 마커 x 좌표. units가 정의되지 않으면 None.
    pub marker_offset: Option<f64>,
}

/// 용량 계산 입력 폼.
#[derive(Debug, Clone)]
pub struct DoseForm {
    dose_text: String,
    vial_text: String,
    water_text: String,
    syringe: SyringeProfile,
    decimal_places: u32,
    geometry: ScaleGeometry,
    snapshot: DoseSnapshot,
}

impl Default for DoseForm {
    fn default() -> Self {
        Self::new(SyringeProfile::default(), DEFAULT_DECIMALS, ScaleGeometry::default())
    }
}

impl DoseForm {
    pub fn new(syringe: SyringeProfile, decimal_places: u32, geometry: ScaleGeometry) -> Self {
        let snapshot = compute_snapshot("", "", "", syringe, decimal_places, &geometry);
        Self {
            dose_text: String::new(),
            vial_text: String::new(),
            water_text: String::new(),
            syringe,
            decimal_places,
            geometry,
            snapshot,
        }
    }

    pub fn dose_text(&self) -> &str {
        &self.dose_text
    }

    pub fn vial_text(&self) -> &str {
        &self.vial_text
    }

    pub fn water_text(&self) -> &str {
        &self.water_text
    }

    pub fn syringe(&self) -> SyringeProfile {
        self.syringe
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn geometry(&self) -> &ScaleGeometry {
        &self.geometry
    }

    /// 마지막 재계산 결과.
    pub fn snapshot(&self) -> &DoseSnapshot {
        &self.snapshot
    }

    pub fn set_dose_text(&mut self, raw: impl Into<String>) -> &DoseSnapshot {
        self.dose_text = raw.into();
        self.recompute()
    }

    pub fn set_vial_text(&mut self, raw: impl Into<String>) -> &DoseSnapshot {
        self.vial_text = raw.into();
        self.recompute()
    }

    pub fn set_water_text(&mut self, raw: impl Into<String>) -> &DoseSnapshot {
        self.water_text = raw.into();
        self.recompute()
    }

    /// 프리셋 버튼 선택. 입력 칸에는 프리셋 값을 숫자 문자열로 채운다.
    pub fn select_dose_preset(&mut self, mg: f64) -> &DoseSnapshot {
        self.set_dose_text(preset_text(mg))
    }

    pub fn select_vial_preset(&mut self, mg: f64) -> &DoseSnapshot {
        self.set_vial_text(preset_text(mg))
    }

    pub fn select_water_preset(&mut self, ml: f64) -> &DoseSnapshot {
        self.set_water_text(preset_text(ml))
    }

    pub fn select_syringe(&mut self, syringe: SyringeProfile) -> &DoseSnapshot {
        self.syringe = syringe;
        self.recompute()
    }

    pub fn set_decimal_places(&mut self, decimal_places: u32) -> &DoseSnapshot {
        self.decimal_places = decimal_places;
        self.recompute()
    }

    /// 현재 입력 스냅샷으로 모든 파생값을 다시 계산한다.
    pub fn recompute(&mut self) -> &DoseSnapshot {
        self.snapshot = compute_snapshot(
            &self.dose_text,
            &self.vial_text,
            &self.water_text,
            self.syringe,
            self.decimal_places,
            &self.geometry,
        );
        tracing::debug!(
            dose = %self.dose_text,
            vial = %self.vial_text,
            water = %self.water_text,
            units = ?self.snapshot.result.units,
            "dose recomputed"
        );
        for advisory in &self.snapshot.advisories {
            tracing::debug!(?advisory, "dose advisory");
        }
        &self.snapshot
    }
}

fn preset_text(value: f64) -> String {
    format!("{value}")
}

fn compute_snapshot(
    dose_text: &str,
    vial_text: &str,
    water_text: &str,
    syringe: SyringeProfile,
    decimal_places: u32,
    geometry: &ScaleGeometry,
) -> DoseSnapshot {
    let input = DoseInput::new(
        parse_or_nan(dose_text),
        parse_or_nan(vial_text),
        parse_or_nan(water_text),
    );
    let result = input.calculate();
    let display = DoseDisplay {
        concentration: format_number(result.concentration_mg_per_ml, decimal_places),
        volume: format_number(result.volume_ml, decimal_places),
        units: format_number(result.units, decimal_places),
    };
    DoseSnapshot {
        input,
        syringe,
        result,
        display,
        advisories: advisories_for(result.units, syringe),
        marker_offset: geometry.marker_offset(result.units, syringe.max_units()),
    }
}
