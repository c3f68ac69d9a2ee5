//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "SkillRadar";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "skillradar";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SKILLRADAR_CONFIG_DIR";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SKILLRADAR_LOG";

/// Log filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
