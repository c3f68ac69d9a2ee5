//! Skills panel render model.
//!
//! Combines a catalog snapshot, a [`ViewState`] and a [`Translator`] into a
//! [`PanelModel`]: role tabs plus either a chip grid or a radar chart. The model
//! is plain data; the TUI, the CLI and the exporters all draw from it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{ChipStyle, RgbColor, SkillCatalog};

use super::aggregate::{Aggregation, RoleAggregator};
use super::proficiency::{FallbackPolicy, ProficiencyResolver};
use super::radar::{
    fit, RadarChart, RadarGeometryEngine, RadarSeries, DEFAULT_CONTAINER_PAD, DEFAULT_MIN_SIZE,
};
use super::view::{ChipLimits, ViewMode, ViewState};

/// UI string keys with their English text.
pub const UI_STRINGS: [(&str, &str); 7] = [
    ("radar.title", "Skills Map"),
    ("radar.toggle.to_radar", "Radar"),
    ("radar.toggle.to_chips", "Chips"),
    ("chips.view_more", "View more"),
    ("chips.view_less", "View less"),
    ("chips.empty", "No skills found for this role."),
    ("meter.empty", "No tech tags found."),
];

/// English text for a UI key.
#[must_use]
pub fn default_text(key: &str) -> Option<&'static str> {
    UI_STRINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// Maps role names, skill names and UI keys to display strings.
pub trait Translator {
    /// Translation for a key, if one exists.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Display text for a UI key: translation, else English, else the key.
    fn text(&self, key: &str) -> String {
        self.lookup(key)
            .or_else(|| default_text(key).map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }

    /// Display label for a role, skill or axis name; untranslated names show as-is.
    fn label(&self, name: &str) -> String {
        self.lookup(name).unwrap_or_else(|| name.to_string())
    }
}

/// Translator that knows nothing; everything renders in English.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Translator backed by a catalog's `[translations.<locale>]` table.
#[derive(Debug, Clone, Copy)]
pub struct CatalogTranslator<'a> {
    labels: Option<&'a BTreeMap<String, String>>,
}

impl<'a> CatalogTranslator<'a> {
    /// Creates a translator for a locale; unknown locales translate nothing.
    #[must_use]
    pub fn new(catalog: &'a SkillCatalog, locale: &str) -> Self {
        Self {
            labels: catalog.labels(locale),
        }
    }
}

impl Translator for CatalogTranslator<'_> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.labels.and_then(|labels| labels.get(key).cloned())
    }
}

/// One role tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleTab {
    /// Role name
    pub role: String,
    /// Localized label
    pub label: String,
    /// Number of skills in the role
    pub count: usize,
    /// Role color
    pub color: RgbColor,
    /// Whether this is the selected role
    pub selected: bool,
}

/// One skill chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    /// Canonical skill name
    pub name: String,
    /// Localized label
    pub label: String,
    /// Proficiency 0-100
    pub percent: u8,
    /// Role color
    pub color: RgbColor,
    /// Derived chip colors
    pub style: ChipStyle,
}

/// "View more / view less" control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoreToggle {
    /// Whether the grid is currently expanded
    pub expanded: bool,
    /// Label for the action the toggle performs
    pub label: String,
    /// Chips hidden while collapsed
    pub hidden: usize,
}

/// Chip grid body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipGrid {
    /// Visible chips in display order
    pub chips: Vec<Chip>,
    /// Skills in the role, visible or not
    pub total: usize,
    /// Present when narrow and the role overflows the collapsed grid
    pub more_toggle: Option<MoreToggle>,
    /// Present when the role has no skills
    pub empty_message: Option<String>,
}

/// Radar body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarView {
    /// Localized chart title
    pub title: String,
    /// Chart geometry with localized axis labels
    pub chart: RadarChart,
}

/// Panel body for the current mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PanelBody {
    /// Chip grid
    Chips(ChipGrid),
    /// Radar chart
    Radar(RadarView),
}

/// Everything needed to draw the panel once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelModel {
    /// Selected role
    pub selected_role: String,
    /// Current mode
    pub mode: ViewMode,
    /// Role tabs in display order
    pub tabs: Vec<RoleTab>,
    /// Label of the chips/radar toggle (names the mode it switches to)
    pub toggle_label: String,
    /// Mode-specific content
    pub body: PanelBody,
}

/// Requested radar size and its responsive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarSizing {
    /// Preferred chart size
    pub size: f64,
    /// Smallest chart size
    pub min_size: f64,
    /// Container padding
    pub pad: f64,
}

impl RadarSizing {
    /// Size for an observed container width, or the preferred size if none.
    #[must_use]
    pub fn resolve(&self, width: Option<f64>) -> f64 {
        width.map_or(self.size, |w| fit(self.size, w, self.min_size, self.pad))
    }
}

impl Default for RadarSizing {
    fn default() -> Self {
        Self {
            size: 340.0,
            min_size: DEFAULT_MIN_SIZE,
            pad: DEFAULT_CONTAINER_PAD,
        }
    }
}

/// Builds [`PanelModel`]s.
#[derive(Debug, Clone, Default)]
pub struct PanelRenderer {
    aggregator: RoleAggregator,
    engine: RadarGeometryEngine,
    policy: FallbackPolicy,
    limits: ChipLimits,
    sizing: RadarSizing,
}

impl PanelRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(
        aggregator: RoleAggregator,
        engine: RadarGeometryEngine,
        policy: FallbackPolicy,
        limits: ChipLimits,
        sizing: RadarSizing,
    ) -> Self {
        Self {
            aggregator,
            engine,
            policy,
            limits,
            sizing,
        }
    }

    /// Replaces the radar sizing.
    #[must_use]
    pub fn with_sizing(mut self, sizing: RadarSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Radar sizing in effect.
    #[must_use]
    pub const fn sizing(&self) -> RadarSizing {
        self.sizing
    }

    /// Aggregates a catalog with this renderer's normalization.
    #[must_use]
    pub fn aggregate(&self, catalog: &SkillCatalog) -> Aggregation {
        self.aggregator.aggregate_catalog(catalog)
    }

    /// Renders the panel for one catalog snapshot.
    ///
    /// `width` is the last observed container width; without one the radar
    /// uses its preferred size.
    #[must_use]
    pub fn render(
        &self,
        catalog: &SkillCatalog,
        state: &ViewState,
        width: Option<f64>,
        translator: &dyn Translator,
    ) -> PanelModel {
        let aggregation = self.aggregate(catalog);
        let role = state.selected_role();

        let tabs = self.tabs(catalog, &aggregation, role, translator);
        let (body, toggle_key) = match state.mode() {
            ViewMode::Chips => (
                PanelBody::Chips(self.chip_grid(catalog, &aggregation, state, translator)),
                "radar.toggle.to_radar",
            ),
            ViewMode::Radar => (
                PanelBody::Radar(self.radar(catalog, role, width, translator)),
                "radar.toggle.to_chips",
            ),
        };

        PanelModel {
            selected_role: role.to_string(),
            mode: state.mode(),
            tabs,
            toggle_label: translator.text(toggle_key),
            body,
        }
    }

    /// Role tabs in display order.
    #[must_use]
    pub fn tabs(
        &self,
        catalog: &SkillCatalog,
        aggregation: &Aggregation,
        selected: &str,
        translator: &dyn Translator,
    ) -> Vec<RoleTab> {
        aggregation
            .roles()
            .map(|(role, skills)| RoleTab {
                role: role.to_string(),
                label: translator.label(role),
                count: skills.len(),
                color: catalog.role_color(role),
                selected: role == selected,
            })
            .collect()
    }

    /// Every chip of a role, in display order.
    #[must_use]
    pub fn chips(
        &self,
        catalog: &SkillCatalog,
        aggregation: &Aggregation,
        role: &str,
        translator: &dyn Translator,
    ) -> Vec<Chip> {
        let resolver = ProficiencyResolver::new(&catalog.proficiency, self.policy);
        let color = catalog.role_color(role);
        let style = ChipStyle::for_color(color);
        aggregation
            .skills(role)
            .iter()
            .map(|name| Chip {
                name: name.clone(),
                label: translator.label(name),
                percent: resolver.resolve(name),
                color,
                style: style.clone(),
            })
            .collect()
    }

    /// Chip grid for the selected role, honoring narrow collapse.
    #[must_use]
    pub fn chip_grid(
        &self,
        catalog: &SkillCatalog,
        aggregation: &Aggregation,
        state: &ViewState,
        translator: &dyn Translator,
    ) -> ChipGrid {
        let mut chips = self.chips(catalog, aggregation, state.selected_role(), translator);
        let total = chips.len();
        chips.truncate(state.visible_count(total, self.limits));

        let more_toggle = state.has_more_toggle(total, self.limits).then(|| {
            let expanded = state.chips_expanded();
            MoreToggle {
                expanded,
                label: translator.text(if expanded {
                    "chips.view_less"
                } else {
                    "chips.view_more"
                }),
                hidden: total - chips.len(),
            }
        });

        ChipGrid {
            chips,
            total,
            more_toggle,
            empty_message: (total == 0).then(|| translator.text("chips.empty")),
        }
    }

    /// Radar chart for a role, sized to the observed width.
    #[must_use]
    pub fn radar(
        &self,
        catalog: &SkillCatalog,
        role: &str,
        width: Option<f64>,
        translator: &dyn Translator,
    ) -> RadarView {
        let series = RadarSeries::new(
            role,
            catalog.role_color(role),
            catalog.radar.values.clone(),
        );
        let chart = self
            .engine
            .layout(&catalog.radar.axes, &[series], self.sizing.resolve(width))
            .with_label_text(|axis| translator.lookup(axis));

        RadarView {
            title: translator.text("radar.title"),
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, RoleHue};
    use crate::services::aggregate::RoleTaxonomy;

    fn nine_skill_catalog() -> SkillCatalog {
        let mut catalog = SkillCatalog::empty("Generalist");
        catalog.role_order = vec!["Builder".into(), "Generalist".into()];
        catalog.roles.push(
            Role::new(
                "Builder",
                RoleHue::new("indigo"),
                (1..=9).map(|i| format!("Skill {i}")),
            )
            .unwrap(),
        );
        catalog.proficiency.insert("Skill 1", 75);
        catalog
    }

    fn state_for(catalog: &SkillCatalog) -> ViewState {
        ViewState::initial(&RoleTaxonomy::from_catalog(catalog))
    }

    #[test]
    fn test_tabs_follow_role_order() {
        let catalog = SkillCatalog::builtin();
        let model = PanelRenderer::default().render(
            &catalog,
            &state_for(&catalog),
            None,
            &NoTranslation,
        );
        let roles: Vec<(&str, usize, bool)> = model
            .tabs
            .iter()
            .map(|t| (t.role.as_str(), t.count, t.selected))
            .collect();
        assert_eq!(
            roles,
            [
                ("Full-Stack Developer", 11, true),
                ("Web3 × AI", 10, false),
                ("Project Manager", 8, false),
                ("Founder", 8, false),
            ]
        );
        assert_eq!(model.tabs[1].color.to_hex(), "#10B981");
        assert_eq!(model.toggle_label, "Radar");
    }

    #[test]
    fn test_chips_carry_proficiency_and_style() {
        let catalog = nine_skill_catalog();
        let model = PanelRenderer::default().render(
            &catalog,
            &state_for(&catalog),
            Some(1200.0),
            &NoTranslation,
        );
        let PanelBody::Chips(grid) = model.body else {
            panic!("expected chips");
        };
        assert_eq!(grid.chips.len(), 9);
        assert_eq!(grid.chips[0].percent, 75);
        assert_eq!(grid.chips[1].percent, 1);
        assert_eq!(grid.chips[0].style.background, "rgba(99, 102, 241, 0.24)");
        assert!(grid.more_toggle.is_none());
        assert!(grid.empty_message.is_none());
    }

    #[test]
    fn test_narrow_grid_collapses_with_toggle() {
        let catalog = nine_skill_catalog();
        let renderer = PanelRenderer::default();
        let state = state_for(&catalog).observe_width(500.0, 800.0);

        let model = renderer.render(&catalog, &state, Some(500.0), &NoTranslation);
        let PanelBody::Chips(grid) = model.body else {
            panic!("expected chips");
        };
        assert_eq!(grid.chips.len(), 4);
        let toggle = grid.more_toggle.unwrap();
        assert!(!toggle.expanded);
        assert_eq!(toggle.label, "View more");
        assert_eq!(toggle.hidden, 5);

        let expanded = state.toggle_chips_expanded();
        let model = renderer.render(&catalog, &expanded, Some(500.0), &NoTranslation);
        let PanelBody::Chips(grid) = model.body else {
            panic!("expected chips");
        };
        assert_eq!(grid.chips.len(), 9);
        assert_eq!(grid.more_toggle.unwrap().label, "View less");
    }

    #[test]
    fn test_empty_role_message() {
        let catalog = nine_skill_catalog();
        let taxonomy = RoleTaxonomy::from_catalog(&catalog);
        let state = state_for(&catalog).select_role(&taxonomy, "Generalist");
        let model = PanelRenderer::default().render(&catalog, &state, None, &NoTranslation);
        let PanelBody::Chips(grid) = model.body else {
            panic!("expected chips");
        };
        assert!(grid.chips.is_empty());
        assert_eq!(
            grid.empty_message.as_deref(),
            Some("No skills found for this role.")
        );
    }

    #[test]
    fn test_radar_body_localized_and_sized() {
        let catalog = SkillCatalog::builtin();
        let state = state_for(&catalog).toggle_view();
        let translator = CatalogTranslator::new(&catalog, "zh");
        let model = PanelRenderer::default().render(&catalog, &state, Some(300.0), &translator);

        assert_eq!(model.mode, ViewMode::Radar);
        assert_eq!(model.toggle_label, "标签");
        assert_eq!(model.tabs[0].label, "全栈开发");
        let PanelBody::Radar(radar) = model.body else {
            panic!("expected radar");
        };
        assert_eq!(radar.title, "能力图");
        assert!((radar.chart.size - 292.0).abs() < 1e-9);
        assert_eq!(radar.chart.labels.len(), 6);
        assert_eq!(radar.chart.labels[2].text, "区块链");
        assert_eq!(radar.chart.labels[2].axis, "Blockchain");
        assert_eq!(radar.chart.polygons[0].label, "Full-Stack Developer");
        assert_eq!(radar.chart.polygons[0].stroke.to_hex(), "#F59E0B");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let catalog = SkillCatalog::builtin();
        let translator = CatalogTranslator::new(&catalog, "fr");
        assert_eq!(translator.text("radar.title"), "Skills Map");
        assert_eq!(translator.label("Founder"), "Founder");
        assert_eq!(NoTranslation.text("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_radar_sizing_resolution() {
        let sizing = RadarSizing {
            size: 360.0,
            ..RadarSizing::default()
        };
        assert!((sizing.resolve(None) - 360.0).abs() < 1e-9);
        assert!((sizing.resolve(Some(300.0)) - 292.0).abs() < 1e-9);
        assert!((sizing.resolve(Some(f64::NAN)) - 360.0).abs() < 1e-9);
    }
}
