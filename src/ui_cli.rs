use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::format::format_number;
use crate::i18n::{self, keys, Translator};
use crate::presets::{DOSE_MG_OPTIONS, VIAL_MG_OPTIONS, WATER_ML_OPTIONS};
use crate::report;
use crate::session::{DoseForm, DoseSnapshot};
use crate::syringe::SyringeProfile;

const DEFAULT_SVG_PATH: &str = "syringe_scale.svg";
const MAX_DECIMALS: u32 = 6;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Syringe,
    Presets,
    ExportSvg,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_SYRINGE,
        keys::MAIN_MENU_PRESETS,
        keys::MAIN_MENU_EXPORT_SVG,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Syringe),
            "3" => return Ok(MenuChoice::Presets),
            "4" => return Ok(MenuChoice::ExportSvg),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 용량 계산 메뉴. 각 입력 후 폼이 다시 계산된다.
pub fn handle_calculate(tr: &Translator, form: &mut DoseForm) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_KEEP_HINT));

    if let Some(raw) = read_field(tr.t(keys::FIELD_VIAL), form.vial_text())? {
        form.set_vial_text(raw);
    }
    if let Some(raw) = read_field(tr.t(keys::FIELD_WATER), form.water_text())? {
        form.set_water_text(raw);
    }
    if let Some(raw) = read_field(tr.t(keys::FIELD_DOSE), form.dose_text())? {
        form.set_dose_text(raw);
    }
    print_snapshot(tr, form.snapshot(), form.decimal_places());
    Ok(())
}

/// 주사기 규격 선택 메뉴.
pub fn handle_syringe(tr: &Translator, form: &mut DoseForm) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SYRINGE_HEADING));
    println!("{} {}", tr.t(keys::SYRINGE_CURRENT), form.syringe().label());
    for (i, s) in SyringeProfile::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, s.label());
    }
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| SyringeProfile::ALL.get(i).copied());
    match picked {
        Some(syringe) => {
            form.select_syringe(syringe);
            print_snapshot(tr, form.snapshot(), form.decimal_places());
        }
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 고정 프리셋 목록을 출력한다.
pub fn handle_presets(tr: &Translator) {
    println!("{}", tr.t(keys::PRESETS_HEADING));
    println!("{}: {}", tr.t(keys::FIELD_VIAL), join_values(&VIAL_MG_OPTIONS));
    println!("{}: {}", tr.t(keys::FIELD_WATER), join_values(&WATER_ML_OPTIONS));
    println!("{}: {}", tr.t(keys::FIELD_DOSE), join_values(&DOSE_MG_OPTIONS));
}

/// 현재 눈금 그림을 SVG로 저장한다.
pub fn handle_export_svg(tr: &Translator, form: &DoseForm) -> Result<(), AppError> {
    let raw = read_line(tr.t(keys::SVG_PROMPT_PATH))?;
    let path = match raw.trim() {
        "" => DEFAULT_SVG_PATH,
        p => p,
    };
    match app::export_scale_svg(form, path) {
        Ok(saved) => println!("{} {}", tr.t(keys::SVG_SAVED), saved.display()),
        // 경로 오류는 메뉴로 돌아가서 다시 시도할 수 있게 한다.
        Err(err @ AppError::SvgExport { .. }) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX))
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    form: &mut DoseForm,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}: {}", tr.t(keys::SETTINGS_LANGUAGE), cfg.language);
    println!("{}: {}", tr.t(keys::SETTINGS_ACTIVE_LANGUAGE), tr.language_code());
    println!("{}: {}", tr.t(keys::SETTINGS_DECIMALS), cfg.decimal_places);
    println!(
        "{}: {}",
        tr.t(keys::SETTINGS_DEFAULT_SYRINGE),
        cfg.default_syringe.label()
    );

    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim();
    if !lang.is_empty() {
        if lang.eq_ignore_ascii_case("auto") {
            cfg.language = "auto".to_string();
        } else {
            cfg.language = i18n::resolve_language(lang, None);
        }
        println!("{}", tr.t(keys::SETTINGS_RESTART_NOTE));
    }

    let decimals = read_line(tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
    let decimals = decimals.trim();
    if !decimals.is_empty() {
        match decimals.parse::<u32>() {
            Ok(n) if n <= MAX_DECIMALS => {
                cfg.decimal_places = n;
                form.set_decimal_places(n);
            }
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    // 현재 선택한 주사기를 다음 실행의 기본값으로 남긴다.
    cfg.default_syringe = form.syringe();
    Ok(())
}

/// 계산 결과와 권고 메시지를 출력한다.
pub fn print_snapshot(tr: &Translator, snapshot: &DoseSnapshot, decimal_places: u32) {
    println!("{}: {}", tr.t(keys::FIELD_SYRINGE), snapshot.syringe.label());
    for (label, value) in report::result_rows(tr, snapshot) {
        println!("  {label}: {value}");
    }
    if let Some(line) = report::summary_line(tr, snapshot) {
        println!("{line}");
    }
    for advisory in &snapshot.advisories {
        println!("{}", report::advisory_message(tr, advisory, decimal_places));
    }
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v, 2))
        .collect::<Vec<_>>()
        .join(", ")
}

const CLEAR_FIELD: &str = "-";

/// 현재 값을 보여주고 새 값을 읽는다.
fn read_field(label: &str, current: &str) -> Result<Option<String>, AppError> {
    let shown = if current.is_empty() { CLEAR_FIELD } else { current };
    let raw = read_line(&format!("{label} [{shown}]: "))?;
    Ok(field_update(&raw))
}

/// 빈 입력은 None(유지), `-`는 빈 문자열(지우기), 그 외에는 새 값.
fn field_update(raw: &str) -> Option<String> {
    match raw.trim() {
        "" => None,
        CLEAR_FIELD => Some(String::new()),
        value => Some(value.to_string()),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PLACEHOLDER;

    #[test]
    fn blank_entry_keeps_and_dash_clears() {
        assert_eq!(field_update("\n"), None);
        assert_eq!(field_update("  -\n"), Some(String::new()));
        assert_eq!(field_update(" 2.5\n"), Some("2.5".to_string()));
        // 음수 입력은 지우기와 구분된다.
        assert_eq!(field_update("-1\n"), Some("-1".to_string()));
    }

    #[test]
    fn cleared_field_returns_to_placeholder() {
        let mut form = DoseForm::default();
        form.set_vial_text("10");
        form.set_water_text("2");
        form.set_dose_text("0.2");
        assert_eq!(form.snapshot().display.units, "4");
        if let Some(raw) = field_update("-") {
            form.set_dose_text(raw);
        }
        assert_eq!(form.dose_text(), "");
        assert_eq!(form.snapshot().display.units, PLACEHOLDER);
    }
}
