//! Proficiency and normalization lookup commands.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::models::Skill;
use crate::services::{FallbackPolicy, ProficiencyResolver, RoleAggregator, TagNormalizer};
use clap::Args;
use serde::Serialize;

/// Resolve the proficiency and owning role of skills
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Skill names (normalized before lookup)
    #[arg(required = true, value_name = "SKILL")]
    pub skills: Vec<String>,

    /// Fallback policy for unconfigured skills: placeholder or hashed
    #[arg(long, value_name = "POLICY")]
    pub fallback: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ResolvedSkill {
    input: String,
    #[serde(flatten)]
    skill: Skill,
    configured: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let policy = match &self.fallback {
            Some(name) => FallbackPolicy::parse(name).ok_or_else(|| {
                CliError::validation(format!(
                    "Invalid fallback policy '{name}'. Must be 'placeholder' or 'hashed'"
                ))
            })?,
            None => ctx.config.proficiency.fallback,
        };

        let catalog = ctx.catalog()?;
        let normalizer = TagNormalizer::new();
        let aggregation = RoleAggregator::new(normalizer.clone()).aggregate_catalog(&catalog);
        let resolver = ProficiencyResolver::new(&catalog.proficiency, policy);

        let resolved: Vec<ResolvedSkill> = self
            .skills
            .iter()
            .map(|input| {
                let name = normalizer.normalize(input);
                ResolvedSkill {
                    input: input.clone(),
                    configured: resolver.is_configured(&name),
                    skill: Skill::new(
                        name.clone(),
                        aggregation.role_of(&name),
                        resolver.resolve(&name),
                    ),
                }
            })
            .collect();

        if self.json {
            return print_json(&resolved);
        }

        for item in &resolved {
            let source = if item.configured {
                "configured".to_string()
            } else {
                format!("fallback: {policy}")
            };
            println!(
                "{:<28} {:>3}%  {:<24} ({source})",
                item.skill.name, item.skill.percent, item.skill.role
            );
        }

        Ok(())
    }
}

/// Print the canonical form of tags
#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    /// Raw tag strings
    #[arg(required = true, value_name = "TAG")]
    pub tags: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NormalizedTag<'a> {
    input: &'a str,
    canonical: String,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> CliResult<()> {
        let normalizer = TagNormalizer::new();
        let normalized: Vec<NormalizedTag<'_>> = self
            .tags
            .iter()
            .map(|tag| NormalizedTag {
                input: tag,
                canonical: normalizer.normalize(tag),
            })
            .collect();

        if self.json {
            return print_json(&normalized);
        }
        for tag in &normalized {
            println!("{}", tag.canonical);
        }
        Ok(())
    }
}
