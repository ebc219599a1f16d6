use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SYRINGE: &str = "main_menu.syringe";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_EXPORT_SVG: &str = "main_menu.export_svg";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_KEEP_HINT: &str = "calc.keep_hint";
    pub const FIELD_VIAL: &str = "field.vial";
    pub const FIELD_WATER: &str = "field.water";
    pub const FIELD_DOSE: &str = "field.dose";
    pub const FIELD_SYRINGE: &str = "field.syringe";

    pub const RESULT_CONCENTRATION: &str = "result.concentration";
    pub const RESULT_VOLUME: &str = "result.volume";
    pub const RESULT_UNITS: &str = "result.units";
    pub const RESULT_SUMMARY: &str = "result.summary";

    pub const ADVISORY_EXCEEDS: &str = "advisory.exceeds_capacity";
    pub const ADVISORY_BELOW_ONE: &str = "advisory.below_one_unit";

    pub const SYRINGE_HEADING: &str = "syringe.heading";
    pub const SYRINGE_CURRENT: &str = "syringe.current";

    pub const PRESETS_HEADING: &str = "presets.heading";

    pub const SVG_PROMPT_PATH: &str = "svg.prompt_path";
    pub const SVG_SAVED: &str = "svg.saved";
    pub const SVG_EXPORT_BUTTON: &str = "svg.export_button";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_ACTIVE_LANGUAGE: &str = "settings.active_language";
    pub const SETTINGS_DECIMALS: &str = "settings.decimals";
    pub const SETTINGS_DEFAULT_SYRINGE: &str = "settings.default_syringe";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_SAVE_BUTTON: &str = "settings.save_button";
    pub const SETTINGS_RESTART_NOTE: &str = "settings.restart_note";

    pub const GUI_INPUT_HEADING: &str = "gui.input_heading";
    pub const GUI_RESULT_HEADING: &str = "gui.result_heading";
    pub const GUI_SCALE_HEADING: &str = "gui.scale_heading";
    pub const GUI_DISCLAIMER: &str = "gui.disclaimer";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 실제로 적용된 언어 코드(`ko`/`en`).
    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 현재 언어 내장 문자열 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key)
    }

    /// 템플릿 문자열의 `{name}` 자리를 채워서 반환한다.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("language pack ignored: {e}");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "주사기 용량 계산기",
        MAIN_MENU_TITLE => "\n=== 주사기 용량 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 용량 계산",
        MAIN_MENU_SYRINGE => "2) 주사기 규격 선택",
        MAIN_MENU_PRESETS => "3) 프리셋 보기",
        MAIN_MENU_EXPORT_SVG => "4) 눈금 SVG 내보내기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- 용량 계산 --",
        CALC_KEEP_HINT => "(엔터: 현재 값 유지, -: 값 지우기)",
        FIELD_VIAL => "바이알 총량 [mg]",
        FIELD_WATER => "희석액(BAC water) [mL]",
        FIELD_DOSE => "투여량 [mg]",
        FIELD_SYRINGE => "주사기",
        RESULT_CONCENTRATION => "농도 [mg/mL]",
        RESULT_VOLUME => "흡인 부피 [mL]",
        RESULT_UNITS => "눈금 [units]",
        RESULT_SUMMARY => "{syringe} 주사기에서 {volume} mL ({units} units)를 흡인합니다.",
        ADVISORY_EXCEEDS => "경고: {units} units는 {max} units 주사기 용량을 초과합니다.",
        ADVISORY_BELOW_ONE => "주의: {units} units는 1 unit 미만이라 정확히 재기 어렵습니다.",
        SYRINGE_HEADING => "\n-- 주사기 규격 --",
        SYRINGE_CURRENT => "현재 주사기:",
        PRESETS_HEADING => "\n-- 프리셋 --",
        SVG_PROMPT_PATH => "저장 경로(기본 syringe_scale.svg): ",
        SVG_SAVED => "SVG 저장 완료:",
        SVG_EXPORT_BUTTON => "SVG 내보내기",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_LANGUAGE => "언어",
        SETTINGS_ACTIVE_LANGUAGE => "현재 적용 언어",
        SETTINGS_DECIMALS => "소수 자릿수",
        SETTINGS_DEFAULT_SYRINGE => "기본 주사기",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/ko/en, 엔터=유지): ",
        SETTINGS_PROMPT_DECIMALS => "소수 자릿수(0~6, 엔터=유지): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SETTINGS_SAVE_BUTTON => "저장",
        SETTINGS_RESTART_NOTE => "언어 변경은 다시 시작하면 적용됩니다.",
        GUI_INPUT_HEADING => "입력",
        GUI_RESULT_HEADING => "결과",
        GUI_SCALE_HEADING => "주사기 눈금",
        GUI_DISCLAIMER => "계산 보조용입니다. 실제 투여 전 반드시 확인하세요.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        APP_TITLE => "Syringe Dose Calculator",
        MAIN_MENU_TITLE => "\n=== Syringe Dose Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate dose",
        MAIN_MENU_SYRINGE => "2) Select syringe",
        MAIN_MENU_PRESETS => "3) Show presets",
        MAIN_MENU_EXPORT_SVG => "4) Export scale SVG",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Dose calculation --",
        CALC_KEEP_HINT => "(Enter keeps the current value, - clears it)",
        FIELD_VIAL => "Vial total [mg]",
        FIELD_WATER => "Diluent (BAC water) [mL]",
        FIELD_DOSE => "Dose [mg]",
        FIELD_SYRINGE => "Syringe",
        RESULT_CONCENTRATION => "Concentration [mg/mL]",
        RESULT_VOLUME => "Volume to draw [mL]",
        RESULT_UNITS => "Syringe units",
        RESULT_SUMMARY => "Draw {volume} mL ({units} units) on a {syringe} syringe.",
        ADVISORY_EXCEEDS => "Warning: {units} units exceeds the {max}-unit syringe capacity.",
        ADVISORY_BELOW_ONE => "Caution: {units} units is below 1 unit and hard to measure accurately.",
        SYRINGE_HEADING => "\n-- Syringe --",
        SYRINGE_CURRENT => "Current syringe:",
        PRESETS_HEADING => "\n-- Presets --",
        SVG_PROMPT_PATH => "Output path (default syringe_scale.svg): ",
        SVG_SAVED => "SVG saved:",
        SVG_EXPORT_BUTTON => "Export SVG",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_ACTIVE_LANGUAGE => "Active language",
        SETTINGS_DECIMALS => "Decimal places",
        SETTINGS_DEFAULT_SYRINGE => "Default syringe",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, Enter keeps): ",
        SETTINGS_PROMPT_DECIMALS => "Decimal places (0-6, Enter keeps): ",
        SETTINGS_INVALID => "Invalid input, keeping the current value.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_SAVE_BUTTON => "Save",
        SETTINGS_RESTART_NOTE => "Language changes apply after restart.",
        GUI_INPUT_HEADING => "Inputs",
        GUI_RESULT_HEADING => "Results",
        GUI_SCALE_HEADING => "Syringe scale",
        GUI_DISCLAIMER => "Calculation aid only. Double-check before every injection.",
        _ => return None,
    };
    Some(s)
}
