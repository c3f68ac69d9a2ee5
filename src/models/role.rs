//! Roles group skills for display and give them a color.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{palette::RoleHue, RgbColor};

/// Maximum length of a role name in characters.
pub const MAX_ROLE_NAME_LEN: usize = 50;

/// A named grouping of skills (e.g. "Full-Stack Developer").
///
/// `skills` holds the raw, unnormalized names exactly as configured; list order
/// is display order.
///
/// # Validation
///
/// - Name must be non-empty after trimming, max 50 characters
/// - Hue must be a named palette hue or a `#RRGGBB` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Display name, also the key used for lookups
    pub name: String,
    /// Palette identifier
    #[serde(default)]
    pub hue: RoleHue,
    /// Raw skill names in display order
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Role {
    /// Creates a new Role with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillradar::models::{Role, RoleHue};
    ///
    /// let role = Role::new("Founder", RoleHue::new("rose"), ["Pitch Deck", "Team Management"]).unwrap();
    /// assert_eq!(role.skills.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or too long, or the hue is unknown.
    pub fn new<I, S>(name: impl Into<String>, hue: RoleHue, skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let role = Self {
            name: name.into(),
            hue,
            skills: skills.into_iter().map(Into::into).collect(),
        };
        role.validate()?;
        Ok(role)
    }

    /// Validates the role name and hue.
    pub fn validate(&self) -> Result<()> {
        Self::validate_name(&self.name)?;

        if !self.hue.is_known() {
            anyhow::bail!(
                "Role '{}' has unknown hue '{}'. Use emerald, rose, amber, indigo or #RRGGBB",
                self.name,
                self.hue.as_str()
            );
        }

        Ok(())
    }

    /// Validates a role name.
    pub(crate) fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Role name cannot be empty");
        }

        let len = name.chars().count();
        if len > MAX_ROLE_NAME_LEN {
            anyhow::bail!(
                "Role name '{}' exceeds maximum length of {} characters (got {})",
                name,
                MAX_ROLE_NAME_LEN,
                len
            );
        }

        Ok(())
    }

    /// Resolved display color of this role.
    #[must_use]
    pub fn color(&self) -> RgbColor {
        self.hue.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let role = Role::new("Web3 × AI", RoleHue::new("emerald"), ["Solidity"]).unwrap();
        assert_eq!(role.name, "Web3 × AI");
        assert_eq!(role.color().to_hex(), "#10B981");
        assert_eq!(role.skills, vec!["Solidity".to_string()]);
    }

    #[test]
    fn test_validate_name() {
        assert!(Role::validate_name("Founder").is_ok());
        assert!(Role::validate_name(&"é".repeat(50)).is_ok());
        assert!(Role::validate_name("").is_err());
        assert!(Role::validate_name("   ").is_err());
        assert!(Role::validate_name(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_unknown_hue_rejected() {
        let result = Role::new("Founder", RoleHue::new("plaid"), Vec::<String>::new());
        assert!(result.is_err());
    }
}
