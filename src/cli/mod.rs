//! CLI command handlers.
//!
//! Headless, scriptable access to the skills panel: role listing, chip and
//! radar render models, proficiency lookups, the tag meter, exports and config.

pub mod chips;
pub mod common;
pub mod config;
pub mod export;
pub mod meter;
pub mod radar;
pub mod resolve;
pub mod roles;

// Re-export types used by main.rs and tests
pub use chips::ChipsArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use meter::MeterArgs;
pub use radar::RadarArgs;
pub use resolve::{NormalizeArgs, ResolveArgs};
pub use roles::RolesArgs;
