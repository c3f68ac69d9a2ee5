//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) through `dark-light` unless the config
//! pins one.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Highlights and the selected tab
    pub accent: Color,
    /// Warnings (degenerate charts, reload failures)
    pub warning: Color,
    /// Primary text
    pub text: Color,
    /// Muted text (help line, empty states)
    pub text_muted: Color,
    /// Main background
    pub background: Color,
    /// Radar grid rings and spokes
    pub grid: Color,
    /// Unfilled part of proficiency gauges
    pub gauge_track: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark terminal background
    Dark,
    /// Light terminal background
    Light,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    ///
    /// Falls back to dark when detection fails or the mode is unspecified.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode; `Auto` detects the OS setting.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme: bright chrome on black.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            warning: Color::Yellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            grid: Color::Rgb(70, 70, 70),
            gauge_track: Color::Rgb(30, 30, 30),
        }
    }

    /// Light theme: dark text on white, accents darkened for contrast.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            warning: Color::Rgb(200, 100, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            grid: Color::Rgb(200, 200, 200),
            gauge_track: Color::Rgb(235, 235, 235),
        }
    }

    /// Theme variant, judged by the background.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::White | Color::Rgb(255, 255, 255) => ThemeVariant::Light,
            _ => ThemeVariant::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.variant(), ThemeVariant::Dark);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_ne!(theme.accent, Color::Yellow);
        assert_eq!(theme.variant(), ThemeVariant::Light);
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_theme_detect() {
        let theme = Theme::detect();
        assert!(matches!(
            theme.variant(),
            ThemeVariant::Dark | ThemeVariant::Light
        ));
    }
}
