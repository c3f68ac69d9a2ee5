//! Skill catalog: the configuration every render is derived from.
//!
//! A catalog bundles the role → skills mapping, the proficiency table, optional
//! legacy tagged items, per-locale display labels and the radar preset. It is
//! plain data; the services layer turns it into render models.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::{palette::FALLBACK_ACCENT, RgbColor, Role, RoleHue};

/// Ordered mapping of role name → raw skill names.
///
/// Insertion order is preserved; it is the order roles were configured in, not
/// necessarily the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSkillsConfig {
    entries: Vec<(String, Vec<String>)>,
}

impl RoleSkillsConfig {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds the mapping from catalog roles.
    #[must_use]
    pub fn from_roles(roles: &[Role]) -> Self {
        let mut config = Self::new();
        for role in roles {
            config.insert(role.name.clone(), role.skills.clone());
        }
        config
    }

    /// Sets the skills of a role, replacing any previous list for the same name.
    pub fn insert(&mut self, role: impl Into<String>, skills: Vec<String>) {
        let role = role.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == role) {
            entry.1 = skills;
        } else {
            self.entries.push((role, skills));
        }
    }

    /// Raw skills configured for a role.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, skills)| skills.as_slice())
    }

    /// Iterates `(role, skills)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    /// Returns true if no role is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R, S> FromIterator<(R, Vec<S>)> for RoleSkillsConfig
where
    R: Into<String>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (R, Vec<S>)>>(iter: T) -> Self {
        let mut config = Self::new();
        for (role, skills) in iter {
            config.insert(role, skills.into_iter().map(Into::into).collect());
        }
        config
    }
}

/// Canonical skill name → proficiency percentage.
///
/// Keys match exactly (case-sensitive). Values are stored as configured and
/// clamped on resolution, so out-of-range entries are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProficiencyConfig(HashMap<String, i64>);

impl ProficiencyConfig {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, skill: &str) -> Option<i64> {
        self.0.get(skill).copied()
    }

    /// Sets a skill's percentage.
    pub fn insert(&mut self, skill: impl Into<String>, percent: i64) {
        self.0.insert(skill.into(), percent);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for ProficiencyConfig {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A legacy item carrying free-form tags (e.g. a portfolio project).
///
/// Tags may be any scalar; they are coerced to strings before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedItem {
    /// Raw tag values
    #[serde(default)]
    pub tags: Vec<JsonValue>,
}

impl TaggedItem {
    /// Creates an item from string tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| JsonValue::String(tag.into()))
                .collect(),
        }
    }
}

/// Radar axes and the values plotted for the selected role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPreset {
    /// Evaluation dimensions, in clockwise order starting at the top
    pub axes: Vec<String>,
    /// Axis name → value (0-100)
    #[serde(default)]
    pub values: HashMap<String, f64>,
}

impl Default for RadarPreset {
    fn default() -> Self {
        let values = [
            ("Frontend & Backend", 90.0),
            ("PM & Collaboration", 80.0),
            ("Blockchain", 72.0),
            ("Business", 66.0),
            ("Data & AI Services", 60.0),
            ("Infra & DevOps", 55.0),
        ];
        Self {
            axes: values.iter().map(|(axis, _)| (*axis).to_string()).collect(),
            values: values
                .iter()
                .map(|(axis, value)| ((*axis).to_string(), *value))
                .collect(),
        }
    }
}

/// Complete skill catalog.
///
/// # Validation
///
/// - `default_role` must be non-empty
/// - Role names must be valid and unique; hues must resolve
/// - `role_order` must not repeat a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    /// Role that owns any skill no configured role lists
    pub default_role: String,
    /// Fixed display order of roles; empty means configuration order
    #[serde(default)]
    pub role_order: Vec<String>,
    /// Role → skills configuration
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Skill → percentage
    #[serde(default)]
    pub proficiency: ProficiencyConfig,
    /// Legacy tagged items, used when no roles are configured and by the tag meter
    #[serde(default)]
    pub items: Vec<TaggedItem>,
    /// Locale → (key → display label)
    #[serde(default)]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
    /// Radar axes and values
    #[serde(default)]
    pub radar: RadarPreset,
}

impl SkillCatalog {
    /// Creates an empty catalog owned entirely by `default_role`.
    pub fn empty(default_role: impl Into<String>) -> Self {
        let default_role = default_role.into();
        Self {
            role_order: vec![default_role.clone()],
            default_role,
            roles: Vec::new(),
            proficiency: ProficiencyConfig::new(),
            items: Vec::new(),
            translations: BTreeMap::new(),
            radar: RadarPreset::default(),
        }
    }

    /// The role → skills mapping, or `None` when no roles are configured.
    ///
    /// `None` switches aggregation to legacy tag-frequency mode.
    #[must_use]
    pub fn role_skills(&self) -> Option<RoleSkillsConfig> {
        if self.roles.is_empty() {
            None
        } else {
            Some(RoleSkillsConfig::from_roles(&self.roles))
        }
    }

    /// Display order of roles.
    ///
    /// Falls back to configuration order when `role_order` is empty.
    #[must_use]
    pub fn role_order(&self) -> Vec<String> {
        if self.role_order.is_empty() {
            self.roles.iter().map(|r| r.name.clone()).collect()
        } else {
            self.role_order.clone()
        }
    }

    /// Looks up a configured role.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Color of a role, or the fallback accent for unconfigured roles.
    #[must_use]
    pub fn role_color(&self, name: &str) -> RgbColor {
        self.role(name).map_or(FALLBACK_ACCENT, Role::color)
    }

    /// Display labels for a locale, if any are configured.
    #[must_use]
    pub fn labels(&self, locale: &str) -> Option<&BTreeMap<String, String>> {
        self.translations.get(locale)
    }

    /// Validates the catalog structure.
    pub fn validate(&self) -> Result<()> {
        if self.default_role.trim().is_empty() {
            anyhow::bail!("Catalog default_role cannot be empty");
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            role.validate()?;
            if !seen.insert(role.name.as_str()) {
                anyhow::bail!("Role '{}' is defined more than once", role.name);
            }
        }

        let mut ordered = HashSet::new();
        for name in &self.role_order {
            Role::validate_name(name)?;
            if !ordered.insert(name.as_str()) {
                anyhow::bail!("Role '{name}' appears more than once in role_order");
            }
        }

        Ok(())
    }

    /// The catalog the portfolio ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let roles = vec![
            builtin_role(
                "Web3 × AI",
                "emerald",
                &[
                    "Solidity",
                    "Hardhat",
                    "Ethers.js",
                    "Web3.js",
                    "ERC-4337",
                    "DeFi (Swap, Staking, Yield Farming)",
                    "OpenAI API",
                    "Whisper API",
                    "AI Agent",
                    "MCP",
                ],
            ),
            builtin_role(
                "Founder",
                "rose",
                &[
                    "Product Design (Figma, Notion...)",
                    "Business Model Design",
                    "Ecosystem Partnerships",
                    "Team Management",
                    "Remote Collaboration",
                    "Rapid Iteration",
                    "Demo Video Production",
                    "Pitch Deck",
                ],
            ),
            builtin_role(
                "Full-Stack Developer",
                "amber",
                &[
                    "React.js",
                    "Next.js",
                    "TypeScript",
                    "Tailwind CSS",
                    "Node.js",
                    "Python",
                    "Java",
                    "MongoDB",
                    "MySQL",
                    "Redis",
                    "Docker",
                ],
            ),
            builtin_role(
                "Project Manager",
                "indigo",
                &[
                    "Linear",
                    "Jira",
                    "Figma",
                    "Scrum Master",
                    "Stakeholder Management",
                    "Delivery governance",
                    "Analytics dashboards",
                    "User Feedback Loop",
                ],
            ),
        ];

        let proficiency = [
            ("Solidity", 62),
            ("ERC-4337", 48),
            ("Hardhat", 59),
            ("Ethers.js", 57),
            ("Web3.js", 56),
            ("DeFi (Swap, Staking, Yield Farming)", 67),
            ("OpenAI API", 66),
            ("Whisper API", 65),
            ("AI Agent", 68),
            ("MCP", 40),
            ("Product Design (Figma, Notion...)", 60),
            ("Business Model Design", 45),
            ("Ecosystem Partnerships", 45),
            ("Team Management", 63),
            ("Remote Collaboration", 63),
            ("Rapid Iteration", 60),
            ("Demo Video Production", 58),
            ("Pitch Deck", 63),
            ("React.js", 62),
            ("Next.js", 60),
            ("TypeScript", 55),
            ("Tailwind CSS", 53),
            ("Wagmi", 51),
            ("Node.js", 50),
            ("Python", 50),
            ("Java", 62),
            ("MongoDB", 57),
            ("Redis", 42),
            ("MySQL", 48),
            ("Docker", 35),
            ("Jira", 46),
            ("Figma", 63),
            ("Linear", 67),
            ("Scrum Master", 67),
            ("Stakeholder Management", 62),
            ("Delivery governance", 65),
            ("Analytics dashboards", 60),
            ("User Feedback Loop", 46),
            ("PostgreSQL", 50),
            ("Go", 50),
            ("React", 50),
        ]
        .into_iter()
        .collect();

        let items = vec![
            TaggedItem::new([
                "Next.js 15+",
                "TypeScript",
                "Tailwind CSS",
                "Go",
                "Fiber",
                "PostgreSQL",
                "Solidity",
                "Hardhat",
                "ERC-4337",
                "Turnkey API",
            ]),
            TaggedItem::new([
                "Next.js 14",
                "TypeScript",
                "Tailwind CSS",
                "Express.js",
                "PostgreSQL",
                "JWT",
                "X Layer",
                "ERC-4626",
                "OKX DEX SDK",
                "Ethers.js",
                "Hardhat",
                "AI Agent",
                "WebSocket",
            ]),
            TaggedItem::new([
                "Next.js 14",
                "React 18",
                "TypeScript",
                "TailwindCSS",
                "NextAuth.js",
                "Google OAuth",
                "Wagmi",
                "ERC-4337",
                "Solidity",
                "Hardhat",
                "PostgreSQL",
                "IPFS",
            ]),
            TaggedItem::new([
                "Next.js",
                "React",
                "TypeScript",
                "Tailwind CSS",
                "Solidity 0.8.20",
                "Hardhat",
                "OpenZeppelin",
                "ethers.js",
                "wagmi",
                "React Context API",
            ]),
        ];

        let zh: BTreeMap<String, String> = [
            ("Founder", "创始人"),
            ("Full-Stack Developer", "全栈开发"),
            ("Project Manager", "项目经理"),
            ("Product Design (Figma, Notion...)", "产品设计（Figma、Notion…）"),
            ("Business Model Design", "商业模型设计"),
            ("Ecosystem Partnerships", "生态合作伙伴"),
            ("Team Management", "团队管理"),
            ("Remote Collaboration", "远程协作"),
            ("Rapid Iteration", "快速迭代"),
            ("Demo Video Production", "演示视频制作"),
            ("Pitch Deck", "路演稿（Pitch Deck）"),
            ("Stakeholder Management", "干系人管理"),
            ("Delivery governance", "交付治理"),
            ("Analytics dashboards", "分析看板"),
            ("User Feedback Loop", "用户反馈闭环"),
            ("Frontend & Backend", "前后端开发"),
            ("PM & Collaboration", "项目管理"),
            ("Blockchain", "区块链"),
            ("Business", "商务"),
            ("Data & AI Services", "数据与AI服务"),
            ("Infra & DevOps", "基础设施与运维"),
            ("radar.title", "能力图"),
            ("radar.toggle.to_radar", "雷达"),
            ("radar.toggle.to_chips", "标签"),
            ("chips.view_more", "查看更多"),
            ("chips.view_less", "收起"),
            ("chips.empty", "该角色暂无技能。"),
            ("meter.empty", "暂无技术标签。"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            default_role: "Full-Stack Developer".to_string(),
            role_order: [
                "Full-Stack Developer",
                "Web3 × AI",
                "Project Manager",
                "Founder",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            roles,
            proficiency,
            items,
            translations: BTreeMap::from([("zh".to_string(), zh)]),
            radar: RadarPreset::default(),
        }
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_role(name: &str, hue: &str, skills: &[&str]) -> Role {
    Role {
        name: name.to_string(),
        hue: RoleHue::new(hue),
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.roles.len(), 4);
        assert_eq!(catalog.role_order()[0], "Full-Stack Developer");
        assert_eq!(catalog.role_color("Founder").to_hex(), "#F43F5E");
        assert_eq!(catalog.proficiency.get("Solidity"), Some(62));
    }

    #[test]
    fn test_role_skills_insert_replaces() {
        let mut config = RoleSkillsConfig::new();
        config.insert("A", vec!["x".into()]);
        config.insert("B", vec![]);
        config.insert("A", vec!["y".into()]);

        let roles: Vec<&str> = config.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, vec!["A", "B"]);
        assert_eq!(config.get("A"), Some(&["y".to_string()][..]));
        assert_eq!(config.get("C"), None);
    }

    #[test]
    fn test_role_order_falls_back_to_configuration_order() {
        let mut catalog = SkillCatalog::builtin();
        catalog.role_order.clear();
        assert_eq!(
            catalog.role_order(),
            vec!["Web3 × AI", "Founder", "Full-Stack Developer", "Project Manager"]
        );
    }

    #[test]
    fn test_no_roles_means_legacy_mode() {
        let catalog = SkillCatalog::empty("Generalist");
        assert!(catalog.role_skills().is_none());
        assert_eq!(catalog.role_order(), vec!["Generalist"]);
        assert_eq!(catalog.role_color("Generalist"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut catalog = SkillCatalog::builtin();
        catalog.roles.push(catalog.roles[0].clone());
        assert!(catalog.validate().is_err());

        let mut catalog = SkillCatalog::builtin();
        catalog.role_order.push("Founder".to_string());
        assert!(catalog.validate().is_err());

        let mut catalog = SkillCatalog::builtin();
        catalog.default_role = "  ".to_string();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_with_scalar_tags() {
        let text = r##"
default_role = "Generalist"
role_order = ["Generalist"]

[[roles]]
name = "Generalist"
hue = "#112233"
skills = ["ts", "Rust"]

[proficiency]
Rust = 120

[[items]]
tags = ["Rust", 42, true]
"##;
        let catalog: SkillCatalog = toml::from_str(text).unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.proficiency.get("Rust"), Some(120));
        assert_eq!(catalog.items[0].tags.len(), 3);
        assert_eq!(catalog.radar, RadarPreset::default());
        assert_eq!(catalog.role_color("Generalist").to_hex(), "#112233");
    }
}
