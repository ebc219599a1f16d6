use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::format::DEFAULT_DECIMALS;
use crate::scale::ScaleGeometry;
use crate::syringe::SyringeProfile;

/// 기본 설정 파일 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en 등)
    pub language: String,
    /// 언어팩(TOML) 디렉터리. 없으면 locales/ 후 내장 문자열 사용
    pub lang_pack_dir: Option<String>,
    /// 시작 시 선택되는 주사기 규격
    pub default_syringe: SyringeProfile,
    /// 결과 표시 소수 자릿수
    pub decimal_places: u32,
    /// 눈금 트랙 기하 정보
    pub scale: ScaleGeometry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            lang_pack_dir: None,
            default_syringe: SyringeProfile::U100,
            decimal_places: DEFAULT_DECIMALS,
            scale: ScaleGeometry::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 기록한 뒤 반환한다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        if !cfg.scale.is_drawable() {
            tracing::warn!(
                path = %path.display(),
                scale = ?cfg.scale,
                "invalid scale geometry, using defaults"
            );
            cfg.scale = ScaleGeometry::default();
        }
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

/// 설정을 지정한 경로에 저장한다.
pub fn save_to(cfg: &Config, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path.as_ref(), content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, CONFIG_PATH)
    }
}
