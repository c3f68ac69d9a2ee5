//! Chip grid command.

use crate::cli::common::{positive_px, print_json, resolve_role, CliContext, CliResult};
use crate::services::{CatalogTranslator, PanelBody, RoleTaxonomy, ViewState};
use clap::Args;

/// Width of the text proficiency bar.
const BAR_CELLS: usize = 20;

/// Show the skill chips of a role
#[derive(Debug, Clone, Args)]
pub struct ChipsArgs {
    /// Role to show (defaults to the first role)
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Container width in pixels (narrow widths collapse the grid)
    #[arg(long, value_name = "PX")]
    pub width: Option<f64>,

    /// Show every chip even on a narrow container
    #[arg(long)]
    pub expanded: bool,

    /// Locale for labels (defaults to ui.locale)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output the render model as JSON
    #[arg(long)]
    pub json: bool,
}

impl ChipsArgs {
    /// Execute the chips command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let width = positive_px("width", self.width)?;
        let catalog = ctx.catalog()?;
        let role = resolve_role(&catalog, self.role.as_deref())?;
        let translator = CatalogTranslator::new(&catalog, ctx.locale(self.locale.as_deref()));

        let taxonomy = RoleTaxonomy::from_catalog(&catalog);
        let mut state = ViewState::initial(&taxonomy).select_role(&taxonomy, &role);
        if let Some(width) = width {
            state = state.observe_width(width, ctx.config.ui.narrow_threshold_px);
        }
        if self.expanded {
            state = state.toggle_chips_expanded();
        }

        let model = ctx.renderer().render(&catalog, &state, width, &translator);
        if self.json {
            return print_json(&model);
        }

        let PanelBody::Chips(grid) = &model.body else {
            return Ok(());
        };
        let label = model
            .tabs
            .iter()
            .find(|tab| tab.selected)
            .map_or(role.as_str(), |tab| tab.label.as_str());

        println!("{label} ({} skills)", grid.total);
        println!();
        if let Some(message) = &grid.empty_message {
            println!("  {message}");
        }
        let name_width = grid
            .chips
            .iter()
            .map(|chip| chip.label.chars().count())
            .max()
            .unwrap_or(0);
        for chip in &grid.chips {
            println!(
                "  {:<name_width$}  {}  {:>3}%",
                chip.label,
                text_bar(chip.percent),
                chip.percent
            );
        }
        if let Some(toggle) = &grid.more_toggle {
            println!();
            if toggle.expanded {
                println!("  [{}]", toggle.label);
            } else {
                println!("  [{}] +{}", toggle.label, toggle.hidden);
            }
        }

        Ok(())
    }
}

/// Proficiency as a fixed-width block bar.
fn text_bar(percent: u8) -> String {
    let filled = (usize::from(percent) * BAR_CELLS + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0), "░".repeat(20));
        assert_eq!(text_bar(100), "█".repeat(20));
        assert_eq!(text_bar(50).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(text_bar(1).chars().count(), 20);
    }
}
