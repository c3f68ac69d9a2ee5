//! Radar geometry command.

use crate::cli::common::{positive_px, print_json, resolve_role, CliContext, CliResult};
use crate::services::radar::angle_for;
use crate::services::{CatalogTranslator, RadarSizing};
use clap::Args;

/// Compute the radar chart for a role
#[derive(Debug, Clone, Args)]
pub struct RadarArgs {
    /// Role whose color and label the series uses (defaults to the first role)
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Observed container width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<f64>,

    /// Requested chart size in pixels (defaults to radar.size)
    #[arg(long, value_name = "PX")]
    pub size: Option<f64>,

    /// Locale for labels (defaults to ui.locale)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output the geometry as JSON
    #[arg(long)]
    pub json: bool,
}

impl RadarArgs {
    /// Execute the radar command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let width = positive_px("width", self.width)?;
        let size = positive_px("size", self.size)?;
        let catalog = ctx.catalog()?;
        let role = resolve_role(&catalog, self.role.as_deref())?;
        let translator = CatalogTranslator::new(&catalog, ctx.locale(self.locale.as_deref()));

        let mut renderer = ctx.renderer();
        if let Some(size) = size {
            let sizing = RadarSizing {
                size,
                ..renderer.sizing()
            };
            renderer = renderer.with_sizing(sizing);
        }
        let view = renderer.radar(&catalog, &role, width, &translator);

        if self.json {
            return print_json(&view);
        }

        let chart = &view.chart;
        println!("{} ({role})", view.title);
        println!(
            "size {:.0}  center ({:.1}, {:.1})  radius {:.1}  rings {}",
            chart.size,
            chart.frame.center.x,
            chart.frame.center.y,
            chart.frame.radius,
            chart.rings.len()
        );
        if chart.degenerate {
            println!("warning: fewer than 3 axes, the series is drawn as an open line");
        }
        println!();

        let count = chart.labels.len();
        let points = chart.polygons.first().map(|p| p.points.as_slice());
        for (i, label) in chart.labels.iter().enumerate() {
            let value = catalog
                .radar
                .values
                .get(&label.axis)
                .copied()
                .unwrap_or(0.0);
            let vertex = points
                .and_then(|p| p.get(i))
                .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                .unwrap_or_default();
            println!(
                "  {:>5.0}°  {:<24} {:>5.1}  {:<18} {}",
                angle_for(i, count).to_degrees(),
                label.text,
                value,
                vertex,
                label.anchor.as_str()
            );
        }

        Ok(())
    }
}
