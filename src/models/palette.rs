//! Role hue palette.
//!
//! Roles are colored by a named hue (the same Tailwind hues the portfolio's hero
//! badges use) or by an explicit `#RRGGBB` value. Anything unrecognized falls back
//! to the neon cyan accent.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Accent color used when a role has no recognizable hue.
pub const FALLBACK_ACCENT: RgbColor = RgbColor::new(0x22, 0xE1, 0xFF);

/// Named hues with their fixed hex values.
const NAMED_HUES: [(&str, RgbColor); 4] = [
    ("emerald", RgbColor::new(0x10, 0xB9, 0x81)),
    ("rose", RgbColor::new(0xF4, 0x3F, 0x5E)),
    ("amber", RgbColor::new(0xF5, 0x9E, 0x0B)),
    ("indigo", RgbColor::new(0x63, 0x66, 0xF1)),
];

/// A role's palette identifier as written in a catalog.
///
/// Stored as a plain string: either one of the named hues (`emerald`, `rose`,
/// `amber`, `indigo`) or a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleHue(pub String);

impl RoleHue {
    /// Creates a hue from a name or hex string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the hue identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the hue names a known palette entry or parses as hex.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.lookup().is_some()
    }

    /// Resolves the hue to a color, falling back to [`FALLBACK_ACCENT`].
    #[must_use]
    pub fn color(&self) -> RgbColor {
        self.lookup().unwrap_or(FALLBACK_ACCENT)
    }

    fn lookup(&self) -> Option<RgbColor> {
        let key = self.0.trim().to_lowercase();
        NAMED_HUES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
            .or_else(|| {
                key.starts_with('#')
                    .then(|| RgbColor::from_hex(&key).ok())
                    .flatten()
            })
    }
}

impl Default for RoleHue {
    fn default() -> Self {
        Self::new("amber")
    }
}

/// Chip styling derived from a role color.
///
/// Alpha values match the portfolio's chip treatment: a translucent fill,
/// a brighter ring, and a bar gradient running into the solid color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipStyle {
    /// Solid role color
    pub color: String,
    /// Chip background fill
    pub background: String,
    /// Chip border and glow
    pub ring: String,
    /// Start of the proficiency bar gradient
    pub bar_start: String,
    /// End of the proficiency bar gradient
    pub bar_end: String,
}

impl ChipStyle {
    /// Builds the chip style for a role color.
    #[must_use]
    pub fn for_color(color: RgbColor) -> Self {
        Self {
            color: color.to_hex(),
            background: color.to_rgba(0.24),
            ring: color.to_rgba(0.55),
            bar_start: color.to_rgba(0.7),
            bar_end: color.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_hues() {
        assert_eq!(RoleHue::new("emerald").color().to_hex(), "#10B981");
        assert_eq!(RoleHue::new("rose").color().to_hex(), "#F43F5E");
        assert_eq!(RoleHue::new("Amber").color().to_hex(), "#F59E0B");
        assert_eq!(RoleHue::new(" indigo ").color().to_hex(), "#6366F1");
    }

    #[test]
    fn test_hex_hue() {
        let hue = RoleHue::new("#123456");
        assert!(hue.is_known());
        assert_eq!(hue.color(), RgbColor::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_unknown_hue_falls_back() {
        let hue = RoleHue::new("chartreuse");
        assert!(!hue.is_known());
        assert_eq!(hue.color(), FALLBACK_ACCENT);
        assert_eq!(RoleHue::new("123456").color(), FALLBACK_ACCENT);
    }

    #[test]
    fn test_chip_style() {
        let style = ChipStyle::for_color(RgbColor::new(245, 158, 11));
        assert_eq!(style.color, "#F59E0B");
        assert_eq!(style.background, "rgba(245, 158, 11, 0.24)");
        assert_eq!(style.ring, "rgba(245, 158, 11, 0.55)");
        assert_eq!(style.bar_start, "rgba(245, 158, 11, 0.7)");
        assert_eq!(style.bar_end, "#F59E0B");
    }
}
