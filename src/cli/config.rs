//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::services::FallbackPolicy;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSetArgs {
    /// Catalog TOML file
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Label locale
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,

    /// Fallback proficiency policy (placeholder or hashed)
    #[arg(long, value_name = "POLICY")]
    fallback: Option<String>,

    /// Narrow viewport threshold in pixels
    #[arg(long, value_name = "PX")]
    narrow_threshold: Option<f64>,

    /// Preferred radar size in pixels
    #[arg(long, value_name = "PX")]
    radar_size: Option<f64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to locate config: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.catalog.is_none()
            && self.theme.is_none()
            && self.locale.is_none()
            && self.fallback.is_none()
            && self.narrow_threshold.is_none()
            && self.radar_size.is_none()
    }

    /// Applies the requested changes to a config.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(path) = &self.catalog {
            config
                .set_catalog_path(path.clone())
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(locale) = &self.locale {
            config.ui.locale = locale.trim().to_string();
        }

        if let Some(policy) = &self.fallback {
            config.proficiency.fallback = FallbackPolicy::parse(policy).ok_or_else(|| {
                CliError::validation("Invalid fallback policy. Must be 'placeholder' or 'hashed'")
            })?;
        }

        if let Some(px) = self.narrow_threshold {
            config.ui.narrow_threshold_px = px;
        }

        if let Some(px) = self.radar_size {
            config.radar.size = px;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog, --theme, --locale, --fallback, --narrow-threshold, or --radar-size",
            ));
        }

        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("SkillRadar Configuration");
    println!("========================");
    println!();

    println!("Paths:");
    if let Some(catalog) = &config.paths.catalog {
        println!("  Catalog: {}", catalog.display());
    } else {
        println!("  Catalog: (built-in)");
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!("  Locale: {}", config.ui.locale);
    println!("  Narrow Threshold: {}px", config.ui.narrow_threshold_px);
    println!(
        "  Collapsed Grid: {} columns x {} rows",
        config.ui.narrow_columns, config.ui.collapsed_rows
    );
    println!();

    println!("Radar:");
    println!(
        "  Size: {}px (min {}px, pad {}px)",
        config.radar.size, config.radar.min_size, config.radar.pad
    );
    println!("  Rings: {}", config.radar.ring_count);
    println!();

    println!("Proficiency:");
    println!("  Fallback: {}", config.proficiency.fallback);
}
