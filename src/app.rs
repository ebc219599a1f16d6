use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use thiserror::Error;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::scale::render_scale_svg;
use crate::session::DoseForm;
use crate::syringe::SyringeProfile;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// SVG 파일 저장 오류
    #[error("SVG 저장 실패({}): {}", .path.display(), .source)]
    SvgExport {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// 한 번 계산하고 끝내는 CLI 입력값. 숫자는 키 입력과 같은 규칙으로 파싱한다.
#[derive(Debug, Clone, Default, Args)]
pub struct DoseArgs {
    /// 투여량 [mg]
    #[arg(long, allow_hyphen_values = true)]
    pub dose: Option<String>,
    /// 바이알 총량 [mg]
    #[arg(long, allow_hyphen_values = true)]
    pub vial: Option<String>,
    /// 희석액 부피 [mL]
    #[arg(long, allow_hyphen_values = true)]
    pub water: Option<String>,
    /// 주사기 규격(30/50/100 units)
    #[arg(long, value_enum)]
    pub syringe: Option<SyringeProfile>,
    /// 결과 소수 자릿수
    #[arg(long)]
    pub decimals: Option<u32>,
}

impl DoseArgs {
    /// 투여량/바이알/희석액 중 하나라도 주어지면 한 번만 계산한다.
    pub fn is_one_shot(&self) -> bool {
        self.dose.is_some() || self.vial.is_some() || self.water.is_some()
    }

    /// 대화형 모드에서는 규격과 자릿수만 설정값 위에 덮어쓴다.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(syringe) = self.syringe {
            config.default_syringe = syringe;
        }
        if let Some(decimals) = self.decimals {
            config.decimal_places = decimals;
        }
    }
}

/// 설정값 위에 CLI 인자를 적용해 계산을 마친 폼을 만든다.
/// 주어지지 않은 입력은 빈 문자열이 되어 결과에 자리표시자로 나온다.
pub fn one_shot(config: &Config, args: &DoseArgs) -> DoseForm {
    let mut form = form_from_config(config);
    if let Some(syringe) = args.syringe {
        form.select_syringe(syringe);
    }
    if let Some(decimals) = args.decimals {
        form.set_decimal_places(decimals);
    }
    form.set_vial_text(args.vial.clone().unwrap_or_default());
    form.set_water_text(args.water.clone().unwrap_or_default());
    form.set_dose_text(args.dose.clone().unwrap_or_default());
    form
}

/// 설정값으로 초기 입력 폼을 만든다.
pub fn form_from_config(config: &Config) -> DoseForm {
    DoseForm::new(config.default_syringe, config.decimal_places, config.scale)
}

/// 현재 폼의 눈금 그림을 SVG 파일로 저장한다.
pub fn export_scale_svg(form: &DoseForm, path: impl AsRef<Path>) -> Result<PathBuf, AppError> {
    let path = path.as_ref().to_path_buf();
    let svg = render_scale_svg(form.syringe(), form.snapshot().result.units, form.geometry());
    fs::write(&path, svg).map_err(|source| AppError::SvgExport {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "scale svg exported");
    Ok(path)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut form = form_from_config(config);
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, &mut form)?,
            MenuChoice::Syringe => ui_cli::handle_syringe(tr, &mut form)?,
            MenuChoice::Presets => ui_cli::handle_presets(tr),
            MenuChoice::ExportSvg => ui_cli::handle_export_svg(tr, &form)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config, &mut form)?;
                config.save()?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
