//! SkillRadar library
//!
//! Skill taxonomy aggregation and radar visualization: normalizes free-form
//! tags, groups skills by role, resolves proficiency, lays out radar charts and
//! builds the render model for a chips/radar skills panel. The CLI, exports and
//! the terminal UI are thin layers over these services.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;
