//! Proficiency resolution.
//!
//! Maps a canonical skill name to a 0-100 percentage. Names missing from the
//! proficiency table take the resolver's fallback policy; one resolver always
//! applies the same policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::ProficiencyConfig;

/// Percentage shown for unconfigured skills under [`FallbackPolicy::Placeholder`].
pub const PLACEHOLDER_PERCENT: u8 = 1;

/// Lower bound of the hashed fallback band.
pub const HASHED_MIN: u8 = 30;

/// Upper bound (inclusive) of the hashed fallback band.
pub const HASHED_MAX: u8 = 80;

/// What an unconfigured skill resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Fixed low placeholder (1%), signalling "not yet rated"
    #[default]
    Placeholder,
    /// Stable pseudo-random value in 30-80 derived from the name
    Hashed,
}

impl FallbackPolicy {
    /// Parses a policy name (`placeholder` or `hashed`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "placeholder" => Some(Self::Placeholder),
            "hashed" => Some(Self::Hashed),
            _ => None,
        }
    }

    /// Fallback value for a name under this policy.
    #[must_use]
    pub fn value_for(self, name: &str) -> u8 {
        match self {
            Self::Placeholder => PLACEHOLDER_PERCENT,
            Self::Hashed => hashed_percent(name),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => write!(f, "placeholder"),
            Self::Hashed => write!(f, "hashed"),
        }
    }
}

/// Rolling hash of the name folded into the 30-80 band.
///
/// `hash = hash * 31 + code_unit` over UTF-16 code units with wrapping 32-bit
/// arithmetic, then `hash % 51 + 30`.
#[must_use]
pub fn hashed_percent(name: &str) -> u8 {
    let hash = name
        .encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)));
    let band = u32::from(HASHED_MAX - HASHED_MIN) + 1;
    // band < 256 so the remainder always fits
    HASHED_MIN + u8::try_from(hash % band).unwrap_or(0)
}

/// Clamps any configured value into 0-100.
#[must_use]
pub fn clamp_percent(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 100)).unwrap_or(100)
}

/// Resolves skill proficiency against a snapshot of the proficiency table.
#[derive(Debug, Clone)]
pub struct ProficiencyResolver<'a> {
    table: &'a ProficiencyConfig,
    policy: FallbackPolicy,
}

impl<'a> ProficiencyResolver<'a> {
    /// Creates a resolver over a table with a fixed fallback policy.
    #[must_use]
    pub const fn new(table: &'a ProficiencyConfig, policy: FallbackPolicy) -> Self {
        Self { table, policy }
    }

    /// The policy this resolver applies to missing names.
    #[must_use]
    pub const fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Resolves a skill to a percentage in 0-100.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillradar::models::ProficiencyConfig;
    /// use skillradar::services::{FallbackPolicy, ProficiencyResolver};
    ///
    /// let table: ProficiencyConfig = [("Rust", 140)].into_iter().collect();
    /// let resolver = ProficiencyResolver::new(&table, FallbackPolicy::Placeholder);
    /// assert_eq!(resolver.resolve("Rust"), 100);
    /// assert_eq!(resolver.resolve("rust"), 1);
    /// ```
    #[must_use]
    pub fn resolve(&self, skill: &str) -> u8 {
        if let Some(value) = self.table.get(skill) {
            clamp_percent(value)
        } else {
            let value = self.policy.value_for(skill);
            debug!(skill, policy = %self.policy, value, "proficiency fallback");
            value
        }
    }

    /// Returns true if the skill has an explicit table entry.
    #[must_use]
    pub fn is_configured(&self, skill: &str) -> bool {
        self.table.get(skill).is_some()
    }
}
