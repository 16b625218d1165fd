//! Editor configuration read from browser `localStorage`.
//!
//! Keys:
//! - `video_notes.cancel_policy`: `keep` (default) or `revert`
//! - `video_notes.log_level`: `off`, `error`, `warn`, `info` (default),
//!   `debug`, or `trace`
//!
//! Unparseable values fall back to the default with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use log::LevelFilter;

use crate::util::preferences;

pub const CANCEL_POLICY_KEY: &str = "video_notes.cancel_policy";
pub const LOG_LEVEL_KEY: &str = "video_notes.log_level";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// What Cancel does to edits made while a row was in edit mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CancelPolicy {
    /// Leave edit mode and keep whatever was typed, same as Save.
    #[default]
    KeepEdits,
    /// Restore the row to its values from when edit mode was entered.
    Revert,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown cancel policy '{0}' (expected 'keep' or 'revert')")]
    UnknownCancelPolicy(String),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub cancel_policy: CancelPolicy,
    pub log_level: LevelFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { cancel_policy: CancelPolicy::default(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl EditorConfig {
    /// Load from `localStorage`. Outside the browser this is the default.
    pub fn load() -> Self {
        Self::from_lookup(preferences::read)
    }

    /// Build config from a key lookup, falling back per key on parse errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let cancel_policy = parse_cancel_policy(lookup(CANCEL_POLICY_KEY).as_deref()).unwrap_or_else(|e| {
            log::warn!("{CANCEL_POLICY_KEY}: {e}; using default");
            defaults.cancel_policy
        });
        let log_level = parse_log_level(lookup(LOG_LEVEL_KEY).as_deref()).unwrap_or_else(|e| {
            log::warn!("{LOG_LEVEL_KEY}: {e}; using default");
            defaults.log_level
        });

        Self { cancel_policy, log_level }
    }
}

/// Parse a stored cancel policy. `None` and blank mean the default.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownCancelPolicy`] for any other value.
pub fn parse_cancel_policy(raw: Option<&str>) -> Result<CancelPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or_default() {
        "" => Ok(CancelPolicy::default()),
        "keep" => Ok(CancelPolicy::KeepEdits),
        "revert" => Ok(CancelPolicy::Revert),
        other => Err(ConfigError::UnknownCancelPolicy(other.to_owned())),
    }
}

/// Parse a stored log level, case-insensitively. `None` and blank mean the default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLogLevel`] if the value is not a level name.
pub fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ConfigError> {
    match raw.map(str::trim).unwrap_or_default() {
        "" => Ok(DEFAULT_LOG_LEVEL),
        other => LevelFilter::from_str(other).map_err(|_| ConfigError::InvalidLogLevel(other.to_owned())),
    }
}
