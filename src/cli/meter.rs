//! Tag frequency meter command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::services::meter::DEFAULT_MAX_ITEMS;
use crate::services::{CatalogTranslator, TagMeter, Translator};
use clap::Args;

/// Width of a full meter bar in characters.
const METER_CELLS: usize = 30;

/// Show the most frequent tags across catalog items
#[derive(Debug, Clone, Args)]
pub struct MeterArgs {
    /// Number of tags to show
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_ITEMS)]
    pub max: usize,

    /// Locale for messages (defaults to ui.locale)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl MeterArgs {
    /// Execute the meter command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if self.max == 0 {
            return Err(CliError::validation("--max must be at least 1"));
        }

        let catalog = ctx.catalog()?;
        let bars = TagMeter::default().top(&catalog.items, self.max);

        if self.json {
            return print_json(&bars);
        }

        if bars.is_empty() {
            let translator = CatalogTranslator::new(&catalog, ctx.locale(self.locale.as_deref()));
            println!("{}", translator.text("meter.empty"));
            return Ok(());
        }

        let name_width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
        for bar in &bars {
            let cells = (usize::from(bar.bar_percent) * METER_CELLS).div_ceil(100);
            println!(
                "{:<name_width$}  {:<METER_CELLS$}  {:>3}  ({}%)",
                bar.name,
                "▇".repeat(cells),
                bar.count,
                bar.percent
            );
        }

        Ok(())
    }
}
