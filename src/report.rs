//! 계산 결과를 사람이 읽는 문장으로 만든다. CLI와 GUI가 함께 사용한다.

use crate::dose::DoseAdvisory;
use crate::format::format_number;
use crate::i18n::{keys, Translator};
use crate::session::DoseSnapshot;

/// 권고 메시지를 현재 언어로 만든다.
pub fn advisory_message(tr: &Translator, advisory: &DoseAdvisory, decimal_places: u32) -> String {
    match advisory {
        DoseAdvisory::ExceedsCapacity { units, max_units } => tr.fill(
            keys::ADVISORY_EXCEEDS,
            &[
                ("units", format_number(*units, decimal_places)),
                ("max", max_units.to_string()),
            ],
        ),
        DoseAdvisory::BelowOneUnit { units } => tr.fill(
            keys::ADVISORY_BELOW_ONE,
            &[("units", format_number(*units, decimal_places))],
        ),
    }
}

/// "Z 주사기에서 X mL (Y units)" 요약 문장. units가 정의되지 않으면 None.
pub fn summary_line(tr: &Translator, snapshot: &DoseSnapshot) -> Option<String> {
    snapshot.result.units?;
    Some(tr.fill(
        keys::RESULT_SUMMARY,
        &[
            ("volume", snapshot.display.volume.clone()),
            ("units", snapshot.display.units.clone()),
            ("syringe", snapshot.syringe.label()),
        ],
    ))
}

/// 결과 표 형태의 줄 목록(라벨, 값).
pub fn result_rows<'a>(tr: &'a Translator, snapshot: &'a DoseSnapshot) -> [(&'a str, &'a str); 3] {
    [
        (
            tr.t(keys::RESULT_CONCENTRATION),
            snapshot.display.concentration.as_str(),
        ),
        (tr.t(keys::RESULT_VOLUME), snapshot.display.volume.as_str()),
        (tr.t(keys::RESULT_UNITS), snapshot.display.units.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DoseForm;
    use crate::syringe::SyringeProfile;

    fn filled_form(dose: &str, vial: &str, water: &str) -> DoseForm {
        let mut form = DoseForm::default();
        form.set_vial_text(vial);
        form.set_water_text(water);
        form.set_dose_text(dose);
        form
    }

    #[test]
    fn summary_mentions_volume_units_and_syringe() {
        let tr = Translator::new("en");
        let form = filled_form("0.2", "10", "2");
        let line = summary_line(&tr, form.snapshot()).expect("summary");
        assert_eq!(line, "Draw 0.04 mL (4 units) on a 100 units (1.0 mL) syringe.");
    }

    #[test]
    fn no_summary_without_units() {
        let tr = Translator::new("en");
        let form = filled_form("", "10", "2");
        assert_eq!(summary_line(&tr, form.snapshot()), None);
    }

    #[test]
    fn advisory_uses_formatted_units() {
        let tr = Translator::new("en");
        let mut form = filled_form("0.01", "10", "1");
        let snap = form.select_syringe(SyringeProfile::U30).clone();
        let messages: Vec<String> = snap
            .advisories
            .iter()
            .map(|a| advisory_message(&tr, a, 2))
            .collect();
        assert_eq!(
            messages,
            vec!["Caution: 0.1 units is below 1 unit and hard to measure accurately.".to_string()]
        );
    }

    #[test]
    fn rows_follow_display_strings() {
        let tr = Translator::new("en");
        let form = filled_form("50", "500", "3");
        let rows = result_rows(&tr, form.snapshot());
        assert_eq!(rows[2], ("Syringe units", "30"));
    }
}
