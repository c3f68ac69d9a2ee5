//! SkillRadar - skill taxonomy aggregation and radar charts
//!
//! Without a subcommand this opens the terminal skills panel; subcommands give
//! headless access to the same render models and exports.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillradar::cli::{
    ChipsArgs, CliContext, CliError, CliResult, ConfigArgs, ExportArgs, MeterArgs, NormalizeArgs,
    RadarArgs, ResolveArgs, RolesArgs,
};
use skillradar::constants::{APP_BINARY_NAME, DEFAULT_LOG_FILTER, LOG_ENV};

/// SkillRadar - skill taxonomy aggregation and radar charts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Catalog TOML file (overrides paths.catalog from the config)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List roles with their colors and skill counts
    Roles(RolesArgs),
    /// Show the skill chips of a role
    Chips(ChipsArgs),
    /// Lay out the radar chart of a role
    Radar(RadarArgs),
    /// Resolve proficiency percentages for skills
    Resolve(ResolveArgs),
    /// Normalize raw tags into canonical skill names
    Normalize(NormalizeArgs),
    /// Show the most frequent tags across catalog items
    Meter(MeterArgs),
    /// Export the radar chart (SVG) or a skills report (markdown)
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}

/// Logs go to stderr so JSON on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    match &cli.command {
        Some(Command::Config(args)) => return args.execute(),
        Some(Command::Normalize(args)) => return args.execute(),
        _ => {}
    }

    let ctx = CliContext::load(cli.catalog);
    match cli.command {
        Some(Command::Roles(args)) => args.execute(&ctx),
        Some(Command::Chips(args)) => args.execute(&ctx),
        Some(Command::Radar(args)) => args.execute(&ctx),
        Some(Command::Resolve(args)) => args.execute(&ctx),
        Some(Command::Meter(args)) => args.execute(&ctx),
        Some(Command::Export(args)) => args.execute(&ctx),
        Some(Command::Config(_) | Command::Normalize(_)) => Ok(()),
        None => run_panel(&ctx),
    }
}

#[cfg(feature = "ratatui")]
fn run_panel(ctx: &CliContext) -> CliResult<()> {
    use skillradar::tui;

    // Surface a missing or broken catalog before taking over the terminal.
    let catalog = ctx.catalog()?;
    let mut state = tui::AppState::with_catalog(
        ctx.config.clone(),
        ctx.catalog_path().map(PathBuf::from),
        catalog,
    );

    let mut terminal = tui::setup_terminal().map_err(|e| CliError::io(format!("{e:#}")))?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal).map_err(|e| CliError::io(format!("{e:#}")))?;

    result.map_err(|e| CliError::io(format!("{e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_panel(_ctx: &CliContext) -> CliResult<()> {
    Err(CliError::validation(format!(
        "{} was built without the terminal UI; run with --help to list subcommands",
        skillradar::constants::APP_NAME
    )))
}
