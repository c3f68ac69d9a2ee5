//! Markdown skills report.
//!
//! Produces a role legend followed by one proficiency table per role, in the
//! catalog's display order.

use std::fmt::Write as _;

use crate::models::SkillCatalog;
use crate::services::panel::{PanelRenderer, Translator};

/// Generates a markdown report for a catalog.
///
/// With `only_role`, the report covers that role alone (the legend still lists
/// every role).
///
/// # Examples
///
/// ```
/// use skillradar::export::generate_skills_report;
/// use skillradar::models::SkillCatalog;
/// use skillradar::services::{NoTranslation, PanelRenderer};
///
/// let report = generate_skills_report(
///     &SkillCatalog::builtin(),
///     &PanelRenderer::default(),
///     &NoTranslation,
///     None,
/// );
/// assert!(report.contains("| Skill | Proficiency |"));
/// ```
#[must_use]
pub fn generate_skills_report(
    catalog: &SkillCatalog,
    renderer: &PanelRenderer,
    translator: &dyn Translator,
    only_role: Option<&str>,
) -> String {
    let aggregation = renderer.aggregate(catalog);
    let tabs = renderer.tabs(catalog, &aggregation, only_role.unwrap_or_default(), translator);
    let mut output = String::new();

    let _ = writeln!(output, "# {}\n", translator.text("radar.title"));

    output.push_str("## Roles\n\n");
    output.push_str("| Role | Skills | Color |\n");
    output.push_str("|------|--------|-------|\n");
    for tab in &tabs {
        let _ = writeln!(
            output,
            "| {} | {} | `{}` |",
            cell(&tab.label),
            tab.count,
            tab.color.to_hex()
        );
    }
    output.push('\n');

    for tab in tabs
        .iter()
        .filter(|tab| only_role.is_none_or(|role| role == tab.role))
    {
        let _ = writeln!(output, "## {}\n", tab.label);

        let chips = renderer.chips(catalog, &aggregation, &tab.role, translator);
        if chips.is_empty() {
            let _ = writeln!(output, "_{}_\n", translator.text("chips.empty"));
            continue;
        }

        output.push_str("| Skill | Proficiency |\n");
        output.push_str("|-------|-------------|\n");
        for chip in &chips {
            let _ = writeln!(output, "| {} | {}% |", cell(&chip.label), chip.percent);
        }
        output.push('\n');
    }

    output
}

/// Escapes pipes so a value stays in one table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
