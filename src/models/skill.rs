//! Resolved skill records.

use serde::Serialize;

/// A canonical skill with its owning role and resolved proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Skill {
    /// Canonical display name
    pub name: String,
    /// Owning role
    pub role: String,
    /// Proficiency percentage, always within 0-100
    pub percent: u8,
}

impl Skill {
    /// Creates a skill record, clamping the percentage to 100.
    pub fn new(name: impl Into<String>, role: impl Into<String>, percent: u8) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            percent: percent.min(100),
        }
    }
}
