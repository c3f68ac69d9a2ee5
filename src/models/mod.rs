//! Data models for roles, skills, colors and the skill catalog.
//!
//! This module contains the plain data structures the services layer consumes.
//! Models are independent of rendering and of the aggregation logic.

pub mod catalog;
pub mod palette;
pub mod rgb;
pub mod role;
pub mod skill;

// Re-export all model types
pub use catalog::{ProficiencyConfig, RadarPreset, RoleSkillsConfig, SkillCatalog, TaggedItem};
pub use palette::{ChipStyle, RoleHue, FALLBACK_ACCENT};
pub use rgb::RgbColor;
pub use role::Role;
pub use skill::Skill;
