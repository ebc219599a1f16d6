use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use syringe_dose_calculator::{app, config, i18n, logger, ui_cli};

/// U-100 주사기 용량 계산기(CLI).
///
/// 투여량/바이알/희석액 중 하나라도 주면 한 번 계산하고 종료하며,
/// 아무것도 주지 않으면 대화형 메뉴를 실행한다.
#[derive(Debug, Parser)]
#[command(name = "syringe_dose_calculator_cli", version, about)]
struct Cli {
    #[command(flatten)]
    dose: app::DoseArgs,
    /// 눈금 그림을 저장할 SVG 경로
    #[arg(long)]
    svg: Option<PathBuf>,
    /// 언어 코드(auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 디버그 로그 출력
    #[arg(long, short)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("설정을 읽지 못해 기본값을 사용합니다: {err}");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.lang_pack_dir.as_deref());

    if !cli.dose.is_one_shot() {
        cli.dose.apply_to_config(&mut cfg);
        return app::run(&mut cfg, &tr);
    }

    let form = app::one_shot(&cfg, &cli.dose);
    ui_cli::print_snapshot(&tr, form.snapshot(), form.decimal_places());

    if let Some(path) = cli.svg {
        let saved = app::export_scale_svg(&form, path)?;
        println!("{} {}", tr.t(i18n::keys::SVG_SAVED), saved.display());
    }
    Ok(())
}
