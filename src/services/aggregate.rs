//! Role aggregation.
//!
//! Turns the role → skills configuration (or, without one, legacy tag
//! frequencies) into per-role, de-duplicated canonical skill lists, and answers
//! which role owns any given skill.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::models::{RoleSkillsConfig, SkillCatalog, TaggedItem};

use super::normalize::TagNormalizer;

/// Fixed display order of roles plus the role that owns unmatched skills.
///
/// The default role is always part of the order, so role resolution can never
/// produce a role outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTaxonomy {
    order: Vec<String>,
    default_role: String,
}

impl RoleTaxonomy {
    /// Creates a taxonomy.
    ///
    /// Repeated roles keep their first position. A default role missing from
    /// `order` is appended to it.
    pub fn new<I, S>(order: I, default_role: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_role = default_role.into();
        let mut seen = HashSet::new();
        let mut order: Vec<String> = order
            .into_iter()
            .map(Into::into)
            .filter(|role: &String| seen.insert(role.clone()))
            .collect();
        if !order.contains(&default_role) {
            order.push(default_role.clone());
        }
        Self {
            order,
            default_role,
        }
    }

    /// Taxonomy described by a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &SkillCatalog) -> Self {
        Self::new(catalog.role_order(), catalog.default_role.clone())
    }

    /// Roles in display order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Role owning skills no other role lists.
    #[must_use]
    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    /// First role in display order.
    #[must_use]
    pub fn first(&self) -> &str {
        // The default role guarantees a non-empty order
        self.order.first().map_or(&self.default_role, String::as_str)
    }

    /// Returns true if `role` is part of the order (exact match).
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.order.iter().any(|r| r == role)
    }

    /// Index of a role in the order.
    #[must_use]
    pub fn position(&self, role: &str) -> Option<usize> {
        self.order.iter().position(|r| r == role)
    }
}

/// Result of aggregating a configuration.
#[derive(Debug, Clone)]
pub struct Aggregation {
    normalizer: TagNormalizer,
    taxonomy: RoleTaxonomy,
    skills_by_role: Vec<(String, Vec<String>)>,
    frequencies: Vec<(String, usize)>,
    legacy: bool,
}

impl Aggregation {
    /// Canonical skills of a role in display order; empty for unknown roles.
    #[must_use]
    pub fn skills(&self, role: &str) -> &[String] {
        self.skills_by_role
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, skills)| skills.as_slice())
            .unwrap_or_default()
    }

    /// `(role, skills)` pairs in display order.
    pub fn roles(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.skills_by_role
            .iter()
            .map(|(role, skills)| (role.as_str(), skills.as_slice()))
    }

    /// The taxonomy this aggregation was built with.
    #[must_use]
    pub const fn taxonomy(&self) -> &RoleTaxonomy {
        &self.taxonomy
    }

    /// Resolves the role owning a skill.
    ///
    /// Scans roles in display order and returns the first whose list contains a
    /// case-insensitive match of the normalized name; unmatched skills belong to
    /// the default role. Always returns a role from the taxonomy order.
    #[must_use]
    pub fn role_of(&self, skill: &str) -> &str {
        let key = self.normalizer.normalize(skill).to_lowercase();
        self.skills_by_role
            .iter()
            .find(|(_, skills)| skills.iter().any(|s| s.to_lowercase() == key))
            .map_or(self.taxonomy.default_role(), |(role, _)| role.as_str())
    }

    /// Tag frequency of a canonical skill (0 when no tagged items were folded).
    #[must_use]
    pub fn frequency(&self, skill: &str) -> usize {
        self.frequencies
            .iter()
            .find(|(name, _)| name == skill)
            .map_or(0, |(_, count)| *count)
    }

    /// Tag frequencies in first-seen order.
    #[must_use]
    pub fn frequencies(&self) -> &[(String, usize)] {
        &self.frequencies
    }

    /// True when skills were derived from tag frequencies instead of a role config.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// Total number of skills across all roles.
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.skills_by_role.iter().map(|(_, s)| s.len()).sum()
    }
}

/// Builds [`Aggregation`]s.
#[derive(Debug, Clone, Default)]
pub struct RoleAggregator {
    normalizer: TagNormalizer,
}

impl RoleAggregator {
    /// Creates an aggregator using the given normalizer.
    #[must_use]
    pub const fn new(normalizer: TagNormalizer) -> Self {
        Self { normalizer }
    }

    /// Aggregates the configuration into per-role skill lists.
    ///
    /// With a role config, each role in the taxonomy gets its configured skills,
    /// normalized and de-duplicated in first-seen order; tag frequencies are
    /// still counted but never change placement. Without one, every tagged
    /// skill goes to the default role, ordered by descending frequency (ties
    /// keep first-seen order).
    ///
    /// Empty input is not an error: every role simply has no skills.
    #[must_use]
    pub fn aggregate(
        &self,
        config: Option<&RoleSkillsConfig>,
        taxonomy: RoleTaxonomy,
        items: Option<&[TaggedItem]>,
    ) -> Aggregation {
        let frequencies = items.map(|items| self.tag_frequencies(items)).unwrap_or_default();

        let skills_by_role: Vec<(String, Vec<String>)> = match config {
            Some(config) => taxonomy
                .order()
                .iter()
                .map(|role| {
                    let raw = config.get(role).unwrap_or_default();
                    (role.clone(), self.dedup(raw.iter().map(String::as_str)))
                })
                .collect(),
            None => {
                let mut ranked: Vec<&(String, usize)> = frequencies.iter().collect();
                // Stable sort keeps first-seen order among equal counts
                ranked.sort_by(|a, b| b.1.cmp(&a.1));
                let legacy_skills: Vec<String> =
                    ranked.into_iter().map(|(name, _)| name.clone()).collect();

                taxonomy
                    .order()
                    .iter()
                    .map(|role| {
                        if role == taxonomy.default_role() {
                            (role.clone(), legacy_skills.clone())
                        } else {
                            (role.clone(), Vec::new())
                        }
                    })
                    .collect()
            }
        };

        let aggregation = Aggregation {
            normalizer: self.normalizer.clone(),
            taxonomy,
            skills_by_role,
            frequencies,
            legacy: config.is_none(),
        };

        debug!(
            roles = aggregation.skills_by_role.len(),
            skills = aggregation.skill_count(),
            legacy = aggregation.legacy,
            "aggregated role skills"
        );

        aggregation
    }

    /// Aggregates a whole catalog.
    #[must_use]
    pub fn aggregate_catalog(&self, catalog: &SkillCatalog) -> Aggregation {
        let config = catalog.role_skills();
        self.aggregate(
            config.as_ref(),
            RoleTaxonomy::from_catalog(catalog),
            Some(&catalog.items),
        )
    }

    /// Normalizes and removes duplicates, preserving first-seen order.
    fn dedup<'s>(&self, raw: impl Iterator<Item = &'s str>) -> Vec<String> {
        let mut seen = HashSet::new();
        raw.map(|name| self.normalizer.normalize(name))
            .filter(|name| !name.is_empty() && seen.insert(name.clone()))
            .collect()
    }

    /// Counts normalized tags across items, in first-seen order.
    ///
    /// Tags that normalize to an empty string are skipped.
    #[must_use]
    pub fn tag_frequencies(&self, items: &[TaggedItem]) -> Vec<(String, usize)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for tag in items.iter().flat_map(|item| item.tags.iter()) {
            let name = self.normalizer.normalize_value(tag);
            if name.is_empty() {
                continue;
            }
            if let Some(&slot) = index.get(&name) {
                counts[slot].1 += 1;
            } else {
                index.insert(name.clone(), counts.len());
                counts.push((name, 1));
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn taxonomy() -> RoleTaxonomy {
        RoleTaxonomy::new(["Full-Stack Developer", "Web3 × AI", "Founder"], "Full-Stack Developer")
    }

    fn config() -> RoleSkillsConfig {
        [
            ("Web3 × AI", vec!["Solidity", "hardhat", "Hardhat ", "ts"]),
            ("Full-Stack Developer", vec!["TypeScript", "  React.js", "", "Next.js"]),
            ("Founder", vec!["Pitch Deck"]),
            ("Ghost Role", vec!["Haskell"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_taxonomy_appends_default_and_dedups() {
        let t = RoleTaxonomy::new(["A", "B", "A"], "Generalist");
        assert_eq!(t.order(), ["A", "B", "Generalist"]);
        assert_eq!(t.first(), "A");
        assert_eq!(t.position("Generalist"), Some(2));

        let t = RoleTaxonomy::new(Vec::<String>::new(), "Generalist");
        assert_eq!(t.order(), ["Generalist"]);
        assert_eq!(t.first(), "Generalist");
    }

    #[test]
    fn test_skills_normalized_and_deduplicated_in_order() {
        let agg = RoleAggregator::default().aggregate(Some(&config()), taxonomy(), None);

        assert_eq!(agg.skills("Web3 × AI"), ["Solidity", "Hardhat", "TypeScript"]);
        assert_eq!(
            agg.skills("Full-Stack Developer"),
            ["TypeScript", "React.js", "Next.js"]
        );
        assert_eq!(agg.skills("Founder"), ["Pitch Deck"]);
        // Roles outside the taxonomy are not displayed
        assert!(agg.skills("Ghost Role").is_empty());
        let roles: Vec<&str> = agg.roles().map(|(r, _)| r).collect();
        assert_eq!(roles, ["Full-Stack Developer", "Web3 × AI", "Founder"]);
        assert!(!agg.is_legacy());
    }

    #[test]
    fn test_role_of_first_match_in_display_order() {
        let agg = RoleAggregator::default().aggregate(Some(&config()), taxonomy(), None);

        // TypeScript is listed by two roles; Full-Stack comes first in the order
        assert_eq!(agg.role_of("TypeScript"), "Full-Stack Developer");
        assert_eq!(agg.role_of("ts"), "Full-Stack Developer");
        assert_eq!(agg.role_of("SOLIDITY"), "Web3 × AI");
        assert_eq!(agg.role_of("pitch deck"), "Founder");
        // Unmatched and unowned skills fall to the default role
        assert_eq!(agg.role_of("Haskell"), "Full-Stack Developer");
        assert_eq!(agg.role_of(""), "Full-Stack Developer");
    }

    #[test]
    fn test_role_of_is_total() {
        let agg = RoleAggregator::default().aggregate(Some(&config()), taxonomy(), None);
        for (_, skills) in agg.roles() {
            for skill in skills {
                assert!(agg.taxonomy().contains(agg.role_of(skill)));
            }
        }
        for probe in ["", "???", "Kotlin", "react.JS"] {
            assert!(agg.taxonomy().contains(agg.role_of(probe)));
        }
    }

    #[test]
    fn test_empty_config_is_empty_state() {
        let agg = RoleAggregator::default().aggregate(
            Some(&RoleSkillsConfig::new()),
            taxonomy(),
            Some(&[TaggedItem::new(["Rust"])]),
        );
        assert_eq!(agg.skill_count(), 0);
        assert_eq!(agg.roles().count(), 3);
        // Frequencies are counted but never placed when a config exists
        assert_eq!(agg.frequency("Rust"), 1);
        assert_eq!(agg.role_of("Rust"), "Full-Stack Developer");
    }

    #[test]
    fn test_legacy_mode_ranks_by_frequency() {
        let items = vec![
            TaggedItem::new(["Go", "ts", "Hardhat"]),
            TaggedItem::new(["TypeScript", "hardhat"]),
            TaggedItem::new(["TYPESCRIPT", "IPFS"]),
        ];
        let agg = RoleAggregator::default().aggregate(None, taxonomy(), Some(&items));

        assert!(agg.is_legacy());
        assert_eq!(
            agg.skills("Full-Stack Developer"),
            ["TypeScript", "Hardhat", "Go", "IPFS"]
        );
        assert!(agg.skills("Web3 × AI").is_empty());
        assert_eq!(agg.frequency("TypeScript"), 3);
        assert_eq!(agg.frequency("Hardhat"), 2);
        assert_eq!(agg.role_of("ipfs"), "Full-Stack Developer");
    }

    #[test]
    fn test_legacy_mode_coerces_scalar_tags() {
        let items = vec![TaggedItem {
            tags: vec![json!(42), json!(" 42 "), json!(null), json!(false)],
        }];
        let agg = RoleAggregator::default().aggregate(None, taxonomy(), Some(&items));
        assert_eq!(agg.skills("Full-Stack Developer"), ["42", "false"]);
        assert_eq!(agg.frequency("42"), 2);
    }

    #[test]
    fn test_no_input_at_all() {
        let agg = RoleAggregator::default().aggregate(None, taxonomy(), None);
        assert_eq!(agg.skill_count(), 0);
        assert!(agg.frequencies().is_empty());
    }

    #[test]
    fn test_aggregate_builtin_catalog() {
        let catalog = SkillCatalog::builtin();
        let agg = RoleAggregator::default().aggregate_catalog(&catalog);
        assert_eq!(agg.skills("Full-Stack Developer").len(), 11);
        assert_eq!(agg.skills("Web3 × AI").len(), 10);
        assert_eq!(agg.skills("Project Manager").len(), 8);
        assert_eq!(agg.skills("Founder").len(), 8);
        assert_eq!(agg.role_of("Figma"), "Project Manager");
        assert_eq!(agg.frequency("Hardhat"), 4);
    }
}
