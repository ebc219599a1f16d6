//! 주사기 눈금 배치 및 SVG 렌더링.

pub mod layout;
pub mod svg;

pub use layout::{build_ticks, ScaleGeometry, Tick, TickClass};
pub use svg::render_scale_svg;
