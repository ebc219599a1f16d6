//! 용량 계산 핵심 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod config;
pub mod dose;
pub mod format;
pub mod i18n;
pub mod input;
pub mod logger;
pub mod presets;
pub mod report;
pub mod scale;
pub mod session;
pub mod syringe;
pub mod ui_cli;
