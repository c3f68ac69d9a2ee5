//! Shared CLI plumbing: error type, exit codes, catalog loading and output helpers.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::Config;
use crate::models::SkillCatalog;
use crate::services::{CatalogService, PanelRenderer, RoleTaxonomy};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid arguments or invalid input data
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
    /// A named role or file does not exist
    NotFound = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Missing role or file.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration and catalog location shared by every command.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Loaded (or default) application config
    pub config: Config,
    /// `--catalog` override
    pub catalog_override: Option<PathBuf>,
}

impl CliContext {
    /// Loads the config, falling back to defaults when it cannot be read.
    #[must_use]
    pub fn load(catalog_override: Option<PathBuf>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load config, using defaults");
            Config::default()
        });
        Self {
            config,
            catalog_override,
        }
    }

    /// Catalog path in effect: `--catalog`, then `paths.catalog`.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_override
            .as_deref()
            .or(self.config.paths.catalog.as_deref())
    }

    /// Loads the catalog in effect, or the built-in one.
    pub fn catalog(&self) -> CliResult<SkillCatalog> {
        match self.catalog_path() {
            Some(path) if !path.exists() => Err(CliError::not_found(format!(
                "Catalog file not found: {}",
                path.display()
            ))),
            path => CatalogService::load_or_builtin(path)
                .map_err(|e| CliError::validation(format!("{e:#}"))),
        }
    }

    /// Panel renderer configured from the config.
    #[must_use]
    pub fn renderer(&self) -> PanelRenderer {
        self.config.panel_renderer()
    }

    /// Locale requested on the command line, else the configured one.
    #[must_use]
    pub fn locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.config.ui.locale)
    }
}

/// Resolves `--role` against the catalog's role order.
///
/// Matching is exact first, then case-insensitive. No role means the first role.
pub fn resolve_role(catalog: &SkillCatalog, requested: Option<&str>) -> CliResult<String> {
    let taxonomy = RoleTaxonomy::from_catalog(catalog);
    let Some(requested) = requested else {
        return Ok(taxonomy.first().to_string());
    };

    if taxonomy.contains(requested) {
        return Ok(requested.to_string());
    }
    let lower = requested.to_lowercase();
    taxonomy
        .order()
        .iter()
        .find(|role| role.to_lowercase() == lower)
        .cloned()
        .ok_or_else(|| {
            CliError::not_found(format!(
                "Role '{requested}' not found. Available roles: {}",
                taxonomy.order().join(", ")
            ))
        })
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Validates a `--width` / `--size` pixel value.
pub fn positive_px(name: &str, value: Option<f64>) -> CliResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(CliError::validation(format!(
            "--{name} must be a positive number of pixels, got {v}"
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::ValidationError.code(), 1);
        assert_eq!(ExitCode::IoError.code(), 2);
        assert_eq!(ExitCode::NotFound.code(), 3);
        assert_eq!(CliError::not_found("x").exit_code(), ExitCode::NotFound);
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_resolve_role() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(resolve_role(&catalog, None).unwrap(), "Full-Stack Developer");
        assert_eq!(resolve_role(&catalog, Some("Founder")).unwrap(), "Founder");
        assert_eq!(
            resolve_role(&catalog, Some("project manager")).unwrap(),
            "Project Manager"
        );
        let err = resolve_role(&catalog, Some("Astronaut")).unwrap_err();
        assert_eq!(err.kind, ExitCode::NotFound);
        assert!(err.message.contains("Web3 × AI"));
    }

    #[test]
    fn test_positive_px() {
        assert_eq!(positive_px("width", None).unwrap(), None);
        assert_eq!(positive_px("width", Some(300.0)).unwrap(), Some(300.0));
        assert!(positive_px("width", Some(0.0)).is_err());
        assert!(positive_px("size", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_catalog_override_missing_file() {
        let ctx = CliContext {
            config: Config::default(),
            catalog_override: Some(PathBuf::from("/definitely/not/here.toml")),
        };
        assert_eq!(ctx.catalog().unwrap_err().kind, ExitCode::NotFound);
    }
}
