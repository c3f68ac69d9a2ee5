//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::services::aggregate::RoleAggregator;
use crate::services::normalize::TagNormalizer;
use crate::services::panel::{PanelRenderer, RadarSizing};
use crate::services::proficiency::FallbackPolicy;
use crate::services::radar::{RadarGeometryEngine, RadarStyle};
use crate::services::view::ChipLimits;

/// Largest ring count accepted in configuration.
const MAX_RING_COUNT: usize = 20;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses `auto`, `dark` or `light` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Catalog file; the built-in catalog is used when unset
    pub catalog: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
    /// Container width (px) below which the chip grid collapses
    pub narrow_threshold_px: f64,
    /// Chip columns on a narrow viewport
    pub narrow_columns: usize,
    /// Chip rows visible while collapsed
    pub collapsed_rows: usize,
    /// Pixels per terminal cell when mapping terminal width to container width
    pub cell_width_px: f64,
    /// Locale used for labels (`en` means untranslated)
    pub locale: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            narrow_threshold_px: 800.0,
            narrow_columns: 2,
            collapsed_rows: 2,
            cell_width_px: 8.0,
            locale: "en".to_string(),
        }
    }
}

impl UiConfig {
    /// Chip limits for a collapsed narrow grid.
    #[must_use]
    pub const fn chip_limits(&self) -> ChipLimits {
        ChipLimits::new(self.narrow_columns, self.collapsed_rows)
    }
}

/// Radar chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Preferred chart size (px)
    pub size: f64,
    /// Smallest chart size (px)
    pub min_size: f64,
    /// Horizontal padding reserved inside the container (px)
    pub pad: f64,
    /// Number of grid rings
    pub ring_count: usize,
    /// Space between the outer ring and the chart edge
    pub padding: f64,
    /// Smallest usable radius
    pub min_radius: f64,
    /// Label distance beyond the outer ring
    pub label_offset: f64,
    /// Vertex dot radius
    pub dot_radius: f64,
    /// Polygon fill opacity (0-1)
    pub fill_alpha: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        let style = RadarStyle::default();
        let sizing = RadarSizing::default();
        Self {
            size: sizing.size,
            min_size: sizing.min_size,
            pad: sizing.pad,
            ring_count: style.ring_count,
            padding: style.padding,
            min_radius: style.min_radius,
            label_offset: style.label_offset,
            dot_radius: style.dot_radius,
            fill_alpha: style.fill_alpha,
        }
    }
}

impl RadarConfig {
    /// Geometry style.
    #[must_use]
    pub const fn style(&self) -> RadarStyle {
        RadarStyle {
            ring_count: self.ring_count,
            padding: self.padding,
            min_radius: self.min_radius,
            label_offset: self.label_offset,
            dot_radius: self.dot_radius,
            fill_alpha: self.fill_alpha,
        }
    }

    /// Responsive sizing bounds.
    #[must_use]
    pub const fn sizing(&self) -> RadarSizing {
        RadarSizing {
            size: self.size,
            min_size: self.min_size,
            pad: self.pad,
        }
    }
}

/// Proficiency settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProficiencySettings {
    /// Value assigned to skills missing from the proficiency table
    pub fallback: FallbackPolicy,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SkillRadar/config.toml`
/// - macOS: `~/Library/Application Support/SkillRadar/config.toml`
/// - Windows: `%APPDATA%\SkillRadar\config.toml`
///
/// `SKILLRADAR_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - Pixel sizes and thresholds must be finite and positive
/// - Chip columns and rows must be at least 1
/// - `ring_count` must be 1-20; `fill_alpha` must be within 0-1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// UI preferences
    pub ui: UiConfig,
    /// Radar chart settings
    pub radar: RadarConfig,
    /// Proficiency settings
    pub proficiency: ProficiencySettings,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel renderer built from the ui, radar and proficiency sections.
    #[must_use]
    pub fn panel_renderer(&self) -> PanelRenderer {
        PanelRenderer::new(
            RoleAggregator::new(TagNormalizer::new()),
            RadarGeometryEngine::new(self.radar.style()),
            self.proficiency.fallback,
            self.ui.chip_limits(),
            self.radar.sizing(),
        )
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/SkillRadar/`
    /// - macOS: `~/Library/Application Support/SkillRadar/`
    /// - Windows: `%APPDATA%\SkillRadar\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::parse(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Parses and validates config TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("ui.narrow_threshold_px", self.ui.narrow_threshold_px),
            ("ui.cell_width_px", self.ui.cell_width_px),
            ("radar.size", self.radar.size),
            ("radar.min_size", self.radar.min_size),
            ("radar.min_radius", self.radar.min_radius),
            ("radar.dot_radius", self.radar.dot_radius),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{key} must be a positive number, got {value}");
            }
        }

        let non_negative = [
            ("radar.pad", self.radar.pad),
            ("radar.padding", self.radar.padding),
            ("radar.label_offset", self.radar.label_offset),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{key} must be zero or positive, got {value}");
            }
        }

        if self.ui.narrow_columns == 0 || self.ui.collapsed_rows == 0 {
            anyhow::bail!("ui.narrow_columns and ui.collapsed_rows must be at least 1");
        }

        if !(1..=MAX_RING_COUNT).contains(&self.radar.ring_count) {
            anyhow::bail!(
                "radar.ring_count must be between 1 and {MAX_RING_COUNT}, got {}",
                self.radar.ring_count
            );
        }

        if !(0.0..=1.0).contains(&self.radar.fill_alpha) {
            anyhow::bail!(
                "radar.fill_alpha must be between 0 and 1, got {}",
                self.radar.fill_alpha
            );
        }

        if self.ui.locale.trim().is_empty() {
            anyhow::bail!("ui.locale cannot be empty");
        }

        Ok(())
    }

    /// Sets the catalog path; the file must exist.
    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.is_file() {
            anyhow::bail!("Catalog file does not exist: {}", path.display());
        }
        self.paths.catalog = Some(path);
        Ok(())
    }
}
