//! SVG rendering of radar geometry.
//!
//! Consumes [`RadarView`] primitives as-is; no geometry is computed here.

use std::fmt::Write as _;

use crate::services::panel::RadarView;
use crate::services::radar::{Point, SeriesPolygon};

/// Grid stroke for rings and axes.
const GRID_STROKE: &str = "rgba(255, 255, 255, 0.12)";

/// Label fill.
const LABEL_FILL: &str = "rgba(255, 255, 255, 0.75)";

/// Polygon outline width.
const STROKE_WIDTH: f64 = 2.0;

/// Renders a radar view as a standalone SVG document.
///
/// # Examples
///
/// ```
/// use skillradar::export::render_radar_svg;
/// use skillradar::models::SkillCatalog;
/// use skillradar::services::{NoTranslation, PanelRenderer};
///
/// let catalog = SkillCatalog::builtin();
/// let view = PanelRenderer::default().radar(&catalog, "Founder", None, &NoTranslation);
/// let svg = render_radar_svg(&view);
/// assert!(svg.starts_with("<svg"));
/// ```
#[must_use]
pub fn render_radar_svg(view: &RadarView) -> String {
    let chart = &view.chart;
    let size = fmt_num(chart.size);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(out, "  <title>{}</title>", escape(&view.title));

    let _ = writeln!(out, r#"  <g class="rings" fill="none" stroke="{GRID_STROKE}">"#);
    for ring in &chart.rings {
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
            fmt_num(chart.frame.center.x),
            fmt_num(chart.frame.center.y),
            fmt_num(ring.radius)
        );
    }
    out.push_str("  </g>\n");

    let _ = writeln!(out, r#"  <g class="axes" stroke="{GRID_STROKE}">"#);
    for axis in &chart.axis_lines {
        let _ = writeln!(
            out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_num(axis.from.x),
            fmt_num(axis.from.y),
            fmt_num(axis.to.x),
            fmt_num(axis.to.y)
        );
    }
    out.push_str("  </g>\n");

    for polygon in &chart.polygons {
        write_polygon(&mut out, polygon);
    }

    let _ = writeln!(
        out,
        r#"  <g class="labels" fill="{LABEL_FILL}" font-size="12" dominant-baseline="middle">"#
    );
    for label in &chart.labels {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" text-anchor="{}">{}</text>"#,
            fmt_num(label.position.x),
            fmt_num(label.position.y),
            label.anchor.as_str(),
            escape(&label.text)
        );
    }
    out.push_str("  </g>\n");
    out.push_str("</svg>\n");

    out
}

fn write_polygon(out: &mut String, polygon: &SeriesPolygon) {
    if polygon.points.is_empty() {
        return;
    }
    let stroke = polygon.stroke.to_hex();
    let element = if polygon.closed { "polygon" } else { "polyline" };
    let fill = if polygon.closed {
        polygon.fill.as_str()
    } else {
        "none"
    };

    let _ = writeln!(out, r#"  <g class="series" data-label="{}">"#, escape(&polygon.label));
    let _ = writeln!(
        out,
        r#"    <{element} points="{}" fill="{fill}" stroke="{stroke}" stroke-width="{}"/>"#,
        points_attr(&polygon.points),
        fmt_num(STROKE_WIDTH)
    );
    for point in &polygon.points {
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{stroke}"/>"#,
            fmt_num(point.x),
            fmt_num(point.y),
            fmt_num(polygon.dot_radius)
        );
    }
    out.push_str("  </g>\n");
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two decimals, trailing zeros trimmed.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
