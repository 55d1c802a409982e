//! Engine configuration.
//!
//! Settings can be loaded from JSON or adjusted one option at a time with
//! name/value strings, the way a host passes `setoption` commands through.

use serde::{Deserialize, Serialize};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 6;

/// Deepest search the engine accepts.
pub const MAX_DEPTH: u32 = 12;

/// Errors that can occur while building a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{name}' needs a value")]
    MissingValue { name: String },

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },

    #[error("search depth {0} out of range 1..={max}", max = MAX_DEPTH)]
    DepthOutOfRange(u32),
}

/// Tunable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }

    /// Sets a single option by name. Names are case-insensitive.
    ///
    /// On error the configuration is unchanged.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        if !name.eq_ignore_ascii_case("depth") {
            return Err(ConfigError::UnknownOption(name.to_string()));
        }

        let value = value.ok_or_else(|| ConfigError::MissingValue {
            name: name.to_string(),
        })?;
        let depth = value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            })?;

        let updated = EngineConfig { depth };
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
