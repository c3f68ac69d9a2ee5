//! Role listing command.

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::services::CatalogTranslator;
use clap::Args;
use serde::Serialize;

/// List roles in display order with skill counts and colors
#[derive(Debug, Clone, Args)]
pub struct RolesArgs {
    /// Locale for role labels (defaults to ui.locale)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RoleItem {
    role: String,
    label: String,
    skills: usize,
    color: String,
}

#[derive(Debug, Serialize)]
struct RolesResponse {
    default_role: String,
    legacy: bool,
    roles: Vec<RoleItem>,
}

impl RolesArgs {
    /// Execute the roles command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let catalog = ctx.catalog()?;
        let renderer = ctx.renderer();
        let translator = CatalogTranslator::new(&catalog, ctx.locale(self.locale.as_deref()));
        let aggregation = renderer.aggregate(&catalog);

        let roles: Vec<RoleItem> = renderer
            .tabs(&catalog, &aggregation, "", &translator)
            .into_iter()
            .map(|tab| RoleItem {
                role: tab.role,
                label: tab.label,
                skills: tab.count,
                color: tab.color.to_hex(),
            })
            .collect();

        let response = RolesResponse {
            default_role: aggregation.taxonomy().default_role().to_string(),
            legacy: aggregation.is_legacy(),
            roles,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Roles ({}):", response.roles.len());
        println!();
        for (index, role) in response.roles.iter().enumerate() {
            let marker = if role.role == response.default_role {
                " (default)"
            } else {
                ""
            };
            println!(
                "  {}. {:<28} {:>3} skills  {}{}",
                index + 1,
                role.label,
                role.skills,
                role.color,
                marker
            );
        }
        if response.legacy {
            println!();
            println!("No roles configured; skills derived from tag frequencies.");
        }

        Ok(())
    }
}
