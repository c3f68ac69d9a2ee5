//! Export functionality for the skills panel.
//!
//! Radar geometry renders to a standalone SVG document; role skill tables
//! render to a markdown report.

pub mod markdown;
pub mod svg;

pub use markdown::generate_skills_report;
pub use svg::render_radar_svg;
