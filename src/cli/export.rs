//! Export command for SVG radar charts and markdown skill reports.

use crate::cli::common::{positive_px, resolve_role, CliContext, CliError, CliResult};
use crate::export;
use crate::services::CatalogTranslator;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Output format for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Radar chart as SVG
    Svg,
    /// Skill tables as markdown
    Markdown,
}

impl ExportFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Markdown => "md",
        }
    }
}

/// Export the radar chart or the skills report
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// Role to export (SVG: series role; markdown: limit the report to it)
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Container width in pixels used to size the SVG
    #[arg(long, value_name = "PX")]
    pub width: Option<f64>,

    /// Locale for labels (defaults to ui.locale)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output path (defaults to skills_[role]_export_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let width = positive_px("width", self.width)?;
        let catalog = ctx.catalog()?;
        let translator = CatalogTranslator::new(&catalog, ctx.locale(self.locale.as_deref()));
        let renderer = ctx.renderer();

        let (content, role) = match self.format {
            ExportFormat::Svg => {
                let role = resolve_role(&catalog, self.role.as_deref())?;
                let view = renderer.radar(&catalog, &role, width, &translator);
                (export::render_radar_svg(&view), Some(role))
            }
            ExportFormat::Markdown => {
                let role = self
                    .role
                    .as_deref()
                    .map(|r| resolve_role(&catalog, Some(r)))
                    .transpose()?;
                let report =
                    export::generate_skills_report(&catalog, &renderer, &translator, role.as_deref());
                (report, role)
            }
        };

        let output_path = self.get_output_path(role.as_deref());
        fs::write(&output_path, content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        info!(path = %output_path.display(), format = ?self.format, "exported");
        println!("✓ Exported to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, role: Option<&str>) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        let stem = role.map_or_else(|| "all".to_string(), sanitize_filename);

        PathBuf::from(format!(
            "skills_{stem}_export_{date}.{}",
            self.format.extension()
        ))
    }
}

/// Lower-cases a role name and keeps only filename-safe characters.
fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let collapsed = sanitized
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if collapsed.is_empty() {
        "role".to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: ExportFormat, output: Option<PathBuf>) -> ExportArgs {
        ExportArgs {
            format,
            role: None,
            width: None,
            locale: None,
            output,
        }
    }

    #[test]
    fn test_get_output_path_default() {
        let path = args(ExportFormat::Svg, None).get_output_path(Some("Web3 × AI"));
        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("skills_web3_ai_export_"));
        assert!(path_str.ends_with(".svg"));

        let path = args(ExportFormat::Markdown, None).get_output_path(None);
        assert!(path.to_string_lossy().starts_with("skills_all_export_"));
        assert!(path.to_string_lossy().ends_with(".md"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/my_export.svg");
        let path = args(ExportFormat::Svg, Some(custom_path.clone())).get_output_path(None);
        assert_eq!(path, custom_path);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Full-Stack Developer"), "full_stack_developer");
        assert_eq!(sanitize_filename("×××"), "role");
    }
}
