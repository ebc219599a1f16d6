use std::fmt::{self, Write};

use super::layout::{build_ticks, ScaleGeometry};
use crate::syringe::SyringeProfile;

const TOP_MARGIN: f64 = 12.0;
const LABEL_GAP: f64 = 6.0;
const FILL_COLOR: &str = "#7cc4f4";
const OVER_COLOR: &str = "#f29c9c";
const MARKER_COLOR: &str = "#d62828";
const TICK_COLOR: &str = "#222";

/// 주사기 눈금과 현재 units 위치를 SVG 문자열로 그린다.
///
/// 눈금은 바렐 상단에서 아래로 내려오며, 10 단위 눈금 아래에 숫자 라벨을 붙인다.
/// `units`가 없거나 유한하지 않으면 채움 막대와 마커를 그리지 않는다.
pub fn render_scale_svg(
    syringe: SyringeProfile,
    units: Option<f64>,
    geometry: &ScaleGeometry,
) -> String {
    let mut svg = String::new();
    write_svg(&mut svg, syringe, units, geometry)
        .map(|()| svg)
        .unwrap_or_default()
}

fn write_svg(
    svg: &mut String,
    syringe: SyringeProfile,
    units: Option<f64>,
    g: &ScaleGeometry,
) -> fmt::Result {
    let max_units = syringe.max_units();
    let width = g.total_width();
    let barrel_bottom = TOP_MARGIN + g.barrel_height;
    let label_y = TOP_MARGIN + g.major_tick_height + LABEL_GAP + g.label_font_size;
    let height = barrel_bottom.max(label_y) + TOP_MARGIN;
    let (track_start, track_end) = match (
        g.position_of(0.0, max_units),
        g.position_of(f64::from(max_units), max_units),
    ) {
        (Some(s), Some(e)) => (s, e),
        _ => (g.padding, g.padding + g.track_width),
    };

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}" role="img" aria-label="{}">"#,
        width,
        height,
        width,
        height,
        syringe.label()
    )?;
    writeln!(
        svg,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="4" ry="4" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        track_start,
        TOP_MARGIN,
        track_end - track_start,
        g.barrel_height,
        TICK_COLOR
    )?;

    if let Some(marker_x) = g.marker_offset(units, max_units) {
        let over = units.is_some_and(|u| u > f64::from(max_units));
        writeln!(
            svg,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="0.7"/>"#,
            track_start,
            TOP_MARGIN,
            marker_x - track_start,
            g.barrel_height,
            if over { OVER_COLOR } else { FILL_COLOR }
        )?;
        writeln!(
            svg,
            r#"  <path d="M{:.2},{:.2}L{:.2},{:.2}" stroke="{}" stroke-width="2.5"/>"#,
            marker_x,
            TOP_MARGIN - 4.0,
            marker_x,
            barrel_bottom + 4.0,
            MARKER_COLOR
        )?;
    }

    for tick in build_ticks(max_units) {
        let Some(x) = g.position_of(f64::from(tick.unit_value), max_units) else {
            continue;
        };
        writeln!(
            svg,
            r#"  <path d="M{:.2},{:.2}L{:.2},{:.2}" stroke="{}" stroke-width="{:.2}"/>"#,
            x,
            TOP_MARGIN,
            x,
            TOP_MARGIN + g.tick_height(tick.class),
            TICK_COLOR,
            g.tick_stroke(tick.class)
        )?;
        if tick.labeled {
            writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="{:.2}">{}</text>"#,
                x, label_y, g.label_font_size, tick.unit_value
            )?;
        }
    }

    writeln!(svg, "</svg>")
}
