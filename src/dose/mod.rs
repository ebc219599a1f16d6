//! 용량 환산(mg → mL → U-100 units) 및 주의 메시지 판정 모듈 모음.

pub mod advisory;
pub mod calculator;

pub use advisory::{advisories_for, DoseAdvisory};
pub use calculator::{calculate, DoseInput, DoseResult, UNITS_PER_ML};
