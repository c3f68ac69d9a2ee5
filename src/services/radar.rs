//! Radar chart geometry.
//!
//! Converts an ordered axis list and value series into renderer-agnostic
//! primitives: concentric rings, axis spokes, series polygons with vertex dots,
//! and anchored axis labels. Nothing here knows about SVG, canvases or
//! terminals; `export` and `tui` consume the primitives.
//!
//! # Coordinate system
//!
//! Screen coordinates: x grows right, y grows down. Axis 0 points straight up
//! and axes proceed clockwise: `θ_i = -π/2 + i·2π/N`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::warn;

use crate::models::RgbColor;

/// Size used when neither the requested nor the observed size is usable.
pub const DEFAULT_RADAR_SIZE: f64 = 360.0;

/// Smallest chart the responsive sizing will shrink to.
pub const DEFAULT_MIN_SIZE: f64 = 180.0;

/// Horizontal breathing room reserved inside the container.
pub const DEFAULT_CONTAINER_PAD: f64 = 8.0;

/// `|cos θ|` below which a label is centered on its axis.
const ANCHOR_DEADBAND: f64 = 0.1;

/// A point in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (down is positive)
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Horizontal alignment of an axis label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Text begins at the anchor (right-hand side of the chart)
    Start,
    /// Text is centered on the anchor (top and bottom)
    Middle,
    /// Text ends at the anchor (left-hand side of the chart)
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// One labeled value series plotted on the radar.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    /// Legend label
    pub label: String,
    /// Fill and stroke color
    pub color: RgbColor,
    /// Axis name → value (0-100); missing axes plot as 0
    pub values: HashMap<String, f64>,
}

impl RadarSeries {
    /// Creates a series.
    pub fn new(label: impl Into<String>, color: RgbColor, values: HashMap<String, f64>) -> Self {
        Self {
            label: label.into(),
            color,
            values,
        }
    }

    /// Value for an axis clamped to 0-100; missing or non-finite values are 0.
    #[must_use]
    pub fn value(&self, axis: &str) -> f64 {
        self.values
            .get(axis)
            .copied()
            .filter(|v| v.is_finite())
            .map_or(0.0, |v| v.clamp(0.0, 100.0))
    }
}

/// Visual constants of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    /// Number of concentric grid rings
    pub ring_count: usize,
    /// Space between the outer ring and the chart edge
    pub padding: f64,
    /// Smallest usable radius regardless of size
    pub min_radius: f64,
    /// Distance of axis labels beyond the outer ring
    pub label_offset: f64,
    /// Radius of vertex dots
    pub dot_radius: f64,
    /// Opacity of the polygon fill
    pub fill_alpha: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            ring_count: 5,
            padding: 32.0,
            min_radius: 50.0,
            label_offset: 18.0,
            dot_radius: 3.0,
            fill_alpha: 0.2,
        }
    }
}

/// Center and usable radius of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarFrame {
    /// Chart center
    pub center: Point,
    /// Radius of the outer ring (value 100)
    pub radius: f64,
}

impl RadarFrame {
    /// Creates a frame from an explicit center and radius.
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Frame for a square chart of `size`, centered, with the style's padding.
    #[must_use]
    pub fn for_size(size: f64, style: &RadarStyle) -> Self {
        let half = size / 2.0;
        Self {
            center: Point::new(half, half),
            radius: (half - style.padding).max(style.min_radius),
        }
    }

    /// Point at `distance` from the center along `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.center.x + distance * angle.cos(),
            self.center.y + distance * angle.sin(),
        )
    }

    /// Vertex for a value (0-100) on axis `index` of `count`.
    #[must_use]
    pub fn vertex(&self, index: usize, count: usize, value: f64) -> Point {
        let value = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.point_at(angle_for(index, count), value / 100.0 * self.radius)
    }
}

/// Grid ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ring {
    /// 1-based ring level, outermost = ring count
    pub level: usize,
    /// Ring radius
    pub radius: f64,
}

/// Spoke from the center to the outer ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLine {
    /// Axis name
    pub axis: String,
    /// Angle in radians
    pub angle: f64,
    /// Start (chart center)
    pub from: Point,
    /// End (on the outer ring)
    pub to: Point,
}

/// Axis label placed beyond the outer ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    /// Axis name (lookup key)
    pub axis: String,
    /// Text to display
    pub text: String,
    /// Anchor point
    pub position: Point,
    /// Horizontal alignment
    pub anchor: TextAnchor,
}

/// A series drawn as a polygon with a dot on every vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPolygon {
    /// Series label
    pub label: String,
    /// Solid stroke and dot color
    pub stroke: RgbColor,
    /// Translucent fill, as CSS `rgba()`
    pub fill: String,
    /// Vertices in axis order
    pub points: Vec<Point>,
    /// Whether the outline closes back to the first vertex
    pub closed: bool,
    /// Radius of vertex dots
    pub dot_radius: f64,
}

/// Complete radar geometry for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    /// Square chart size
    pub size: f64,
    /// Center and outer radius
    pub frame: RadarFrame,
    /// Grid rings, innermost first
    pub rings: Vec<Ring>,
    /// Axis spokes
    pub axis_lines: Vec<AxisLine>,
    /// One polygon per series
    pub polygons: Vec<SeriesPolygon>,
    /// One label per axis
    pub labels: Vec<AxisLabel>,
    /// Fewer than three axes: polygons are open polylines (or empty)
    pub degenerate: bool,
}

/// Angle of axis `index` out of `count`, starting straight up, clockwise.
///
/// Returns `-π/2` when `count` is 0.
#[must_use]
pub fn angle_for(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    -FRAC_PI_2 + TAU * index as f64 / count as f64
}

/// Label alignment for an axis angle, from its horizontal projection.
#[must_use]
pub fn anchor_for(angle: f64) -> TextAnchor {
    let c = angle.cos();
    if c > ANCHOR_DEADBAND {
        TextAnchor::Start
    } else if c < -ANCHOR_DEADBAND {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

/// Responsive chart size for an observed container width.
///
/// `clamp(min_size, requested, container_width - pad)`: the chart never exceeds
/// the requested size, shrinks with the container, and never drops below
/// `min_size`. Non-finite or non-positive results fall back to `requested`, and
/// a degenerate `requested` falls back to the default size.
///
/// # Examples
///
/// ```
/// use skillradar::services::radar::fit;
///
/// assert_eq!(fit(360.0, 300.0, 180.0, 8.0), 292.0);
/// assert_eq!(fit(360.0, 1000.0, 180.0, 8.0), 360.0);
/// assert_eq!(fit(360.0, 100.0, 180.0, 8.0), 180.0);
/// ```
#[must_use]
pub fn fit(requested: f64, container_width: f64, min_size: f64, pad: f64) -> f64 {
    let requested = usable(requested).unwrap_or(DEFAULT_RADAR_SIZE);
    let size = (container_width - pad).min(requested).max(min_size);
    usable(size).unwrap_or(requested)
}

fn usable(size: f64) -> Option<f64> {
    (size.is_finite() && size > 0.0).then_some(size)
}

/// Builds radar geometry.
#[derive(Debug, Clone, Default)]
pub struct RadarGeometryEngine {
    style: RadarStyle,
}

impl RadarGeometryEngine {
    /// Creates an engine with the given style.
    #[must_use]
    pub const fn new(style: RadarStyle) -> Self {
        Self { style }
    }

    /// The engine's style.
    #[must_use]
    pub const fn style(&self) -> &RadarStyle {
        &self.style
    }

    /// Lays out a square chart of `size`.
    ///
    /// A non-finite or non-positive size is replaced by [`DEFAULT_RADAR_SIZE`].
    #[must_use]
    pub fn layout(&self, axes: &[String], series: &[RadarSeries], size: f64) -> RadarChart {
        let size = usable(size).unwrap_or_else(|| {
            warn!(size, "unusable radar size, using default");
            DEFAULT_RADAR_SIZE
        });
        let frame = RadarFrame::for_size(size, &self.style);
        let mut chart = self.layout_in(frame, axes, series);
        chart.size = size;
        chart
    }

    /// Lays out a chart inside an explicit frame.
    ///
    /// The reported size is the frame's bounding square (`2 × (radius + padding)`).
    #[must_use]
    pub fn layout_in(&self, frame: RadarFrame, axes: &[String], series: &[RadarSeries]) -> RadarChart {
        let count = axes.len();
        let degenerate = count < 3;
        if degenerate {
            warn!(axes = count, "radar needs at least three axes; rendering open geometry");
        }

        let rings = (1..=self.style.ring_count)
            .map(|level| Ring {
                level,
                radius: frame.radius * level as f64 / self.style.ring_count as f64,
            })
            .collect();

        let axis_lines = axes
            .iter()
            .enumerate()
            .map(|(i, axis)| {
                let angle = angle_for(i, count);
                AxisLine {
                    axis: axis.clone(),
                    angle,
                    from: frame.center,
                    to: frame.point_at(angle, frame.radius),
                }
            })
            .collect();

        let polygons = series
            .iter()
            .map(|s| SeriesPolygon {
                label: s.label.clone(),
                stroke: s.color,
                fill: s.color.to_rgba(self.style.fill_alpha),
                points: axes
                    .iter()
                    .enumerate()
                    .map(|(i, axis)| frame.vertex(i, count, s.value(axis)))
                    .collect(),
                closed: !degenerate,
                dot_radius: self.style.dot_radius,
            })
            .collect();

        let labels = axes
            .iter()
            .enumerate()
            .map(|(i, axis)| {
                let angle = angle_for(i, count);
                AxisLabel {
                    axis: axis.clone(),
                    text: axis.clone(),
                    position: frame.point_at(angle, frame.radius + self.style.label_offset),
                    anchor: anchor_for(angle),
                }
            })
            .collect();

        RadarChart {
            size: 2.0 * (frame.radius + self.style.padding),
            frame,
            rings,
            axis_lines,
            polygons,
            labels,
            degenerate,
        }
    }
}

impl RadarChart {
    /// Replaces label text via a lookup, keeping axis names as keys.
    #[must_use]
    pub fn with_label_text(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for label in &mut self.labels {
            if let Some(text) = lookup(&label.axis) {
                label.text = text;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn axes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn series(values: &[(&str, f64)]) -> RadarSeries {
        RadarSeries::new(
            "Full-Stack Developer",
            RgbColor::new(245, 158, 11),
            values.iter().map(|(k, v)| ((*k).to_string(), *v)).collect(),
        )
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-6
    }

    #[test]
    fn test_three_axis_vertices() {
        let frame = RadarFrame::new(Point::new(100.0, 100.0), 90.0);
        let chart = RadarGeometryEngine::default().layout_in(
            frame,
            &axes(&["A", "B", "C"]),
            &[series(&[("A", 100.0), ("B", 0.0), ("C", 50.0)])],
        );
        let points = &chart.polygons[0].points;

        // A: -90°, full radius
        assert!(close(points[0], Point::new(100.0, 10.0)));
        // B: value 0 sits on the center
        assert!(close(points[1], Point::new(100.0, 100.0)));
        // C: 150°, r = 45
        let expected_c = Point::new(100.0 - 45.0 * 3f64.sqrt() / 2.0, 122.5);
        assert!(close(points[2], expected_c));
        assert!((points[2].x - 61.029).abs() < 1e-3);
        assert!(chart.polygons[0].closed);
        assert!(!chart.degenerate);
    }

    #[test]
    fn test_value_bounds() {
        let frame = RadarFrame::new(Point::new(50.0, 70.0), 40.0);
        for i in 0..7 {
            assert!(close(frame.vertex(i, 7, 0.0), frame.center));
            let outer = frame.vertex(i, 7, 100.0);
            assert!((outer.distance(frame.center) - 40.0).abs() < EPS);
            assert!(close(outer, frame.point_at(angle_for(i, 7), 40.0)));
        }
    }

    #[test]
    fn test_values_clamped_and_sanitized() {
        let frame = RadarFrame::new(Point::new(0.0, 0.0), 10.0);
        assert!(close(frame.vertex(0, 4, 250.0), frame.vertex(0, 4, 100.0)));
        assert!(close(frame.vertex(0, 4, -5.0), frame.center));
        assert!(close(frame.vertex(0, 4, f64::NAN), frame.center));

        let s = series(&[("A", f64::INFINITY), ("B", 140.0)]);
        assert!(s.value("A").abs() < EPS);
        assert!((s.value("B") - 100.0).abs() < EPS);
        assert!(s.value("missing").abs() < EPS);
    }

    #[test]
    fn test_angles_start_up_and_go_clockwise() {
        assert!((angle_for(0, 4) + FRAC_PI_2).abs() < EPS);
        assert!(angle_for(1, 4).abs() < EPS);
        assert!((angle_for(2, 4) - FRAC_PI_2).abs() < EPS);
        assert!((angle_for(0, 0) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_anchor_rule() {
        assert_eq!(anchor_for(0.0), TextAnchor::Start);
        assert_eq!(anchor_for(std::f64::consts::PI), TextAnchor::End);
        assert_eq!(anchor_for(FRAC_PI_2), TextAnchor::Middle);
        assert_eq!(anchor_for(-FRAC_PI_2), TextAnchor::Middle);
        assert_eq!(anchor_for(3.0 * FRAC_PI_2), TextAnchor::Middle);
        // cos = 0.1 exactly is still centered
        assert_eq!(anchor_for(0.1f64.acos()), TextAnchor::Middle);
    }

    #[test]
    fn test_rings_and_labels() {
        let engine = RadarGeometryEngine::default();
        let chart = engine.layout(&axes(&["A", "B", "C", "D"]), &[], 340.0);

        assert!((chart.frame.radius - 138.0).abs() < EPS);
        assert_eq!(chart.rings.len(), 5);
        assert!((chart.rings[0].radius - 27.6).abs() < 1e-9);
        assert!((chart.rings[4].radius - 138.0).abs() < EPS);

        assert_eq!(chart.axis_lines.len(), 4);
        assert!(close(chart.axis_lines[0].to, Point::new(170.0, 32.0)));

        let anchors: Vec<TextAnchor> = chart.labels.iter().map(|l| l.anchor).collect();
        assert_eq!(
            anchors,
            [
                TextAnchor::Middle,
                TextAnchor::Start,
                TextAnchor::Middle,
                TextAnchor::End
            ]
        );
        // Labels sit label_offset beyond the outer ring
        assert!(close(chart.labels[1].position, Point::new(170.0 + 156.0, 170.0)));
    }

    #[test]
    fn test_min_radius_applies_to_small_charts() {
        let chart = RadarGeometryEngine::default().layout(&axes(&["A", "B", "C"]), &[], 100.0);
        assert!((chart.frame.radius - 50.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_axis_counts() {
        let engine = RadarGeometryEngine::default();
        let s = [series(&[("A", 50.0), ("B", 50.0)])];

        let two = engine.layout(&axes(&["A", "B"]), &s, 300.0);
        assert!(two.degenerate);
        assert!(!two.polygons[0].closed);
        assert_eq!(two.polygons[0].points.len(), 2);

        let none = engine.layout(&[], &s, 300.0);
        assert!(none.degenerate);
        assert!(none.axis_lines.is_empty());
        assert!(none.labels.is_empty());
        assert!(none.polygons[0].points.is_empty());
        assert_eq!(none.rings.len(), 5);
        for ring in &none.rings {
            assert!(ring.radius.is_finite());
        }
    }

    #[test]
    fn test_unusable_size_falls_back() {
        let engine = RadarGeometryEngine::default();
        let chart = engine.layout(&axes(&["A", "B", "C"]), &[], f64::NAN);
        assert!((chart.size - DEFAULT_RADAR_SIZE).abs() < EPS);
        let chart = engine.layout(&axes(&["A", "B", "C"]), &[], -4.0);
        assert!((chart.size - DEFAULT_RADAR_SIZE).abs() < EPS);
    }

    #[test]
    fn test_fit() {
        assert!((fit(360.0, 300.0, 180.0, 8.0) - 292.0).abs() < EPS);
        assert!((fit(360.0, 1000.0, 180.0, 8.0) - 360.0).abs() < EPS);
        assert!((fit(360.0, 50.0, 180.0, 8.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_fit_never_degenerate() {
        for width in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -20.0] {
            let size = fit(360.0, width, 180.0, 8.0);
            assert!(size.is_finite() && size > 0.0, "width {width} -> {size}");
        }
        assert!((fit(360.0, f64::NAN, 180.0, 8.0) - 360.0).abs() < EPS);
        assert!((fit(f64::NAN, 1000.0, 180.0, 8.0) - DEFAULT_RADAR_SIZE).abs() < EPS);
        assert!((fit(360.0, 300.0, f64::NAN, 8.0) - 292.0).abs() < EPS);
        assert!((fit(360.0, f64::NAN, f64::NAN, f64::NAN) - 360.0).abs() < EPS);
    }

    #[test]
    fn test_polygon_colors() {
        let chart = RadarGeometryEngine::default().layout(
            &axes(&["A", "B", "C"]),
            &[series(&[("A", 10.0)])],
            300.0,
        );
        assert_eq!(chart.polygons[0].stroke.to_hex(), "#F59E0B");
        assert_eq!(chart.polygons[0].fill, "rgba(245, 158, 11, 0.2)");
        assert!((chart.polygons[0].dot_radius - 3.0).abs() < EPS);
    }

    #[test]
    fn test_label_text_lookup_keeps_axis_key() {
        let chart = RadarGeometryEngine::default()
            .layout(&axes(&["Blockchain", "Business", "Infra"]), &[], 300.0)
            .with_label_text(|axis| (axis == "Blockchain").then(|| "区块链".to_string()));
        assert_eq!(chart.labels[0].text, "区块链");
        assert_eq!(chart.labels[0].axis, "Blockchain");
        assert_eq!(chart.labels[1].text, "Business");
    }
}
