//! Toolkit configuration

use serde::Deserialize;
use validator::Validate;

use domain_keys::{DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH, MIN_KEY_LENGTH};

use crate::error::CliError;

/// Toolkit configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToolkitConfig {
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Key length used when a command gives none
    #[validate(range(min = 8, max = 256))]
    pub default_key_length: usize,
    /// Upper bound on UUIDs per invocation
    #[validate(range(min = 1, max = 1000))]
    pub max_uuid_count: usize,
    /// Pretty-print JSON output
    pub pretty_output: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_key_length: DEFAULT_KEY_LENGTH,
            max_uuid_count: 100,
            pretty_output: true,
        }
    }
}

impl ToolkitConfig {
    /// Loads configuration from `TOOLKIT_*` environment variables over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or a value is out of range
    pub fn from_env() -> Result<Self, CliError> {
        let defaults = Self::default();
        let config: Self = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("default_key_length", defaults.default_key_length as i64)?
            .set_default("max_uuid_count", defaults.max_uuid_count as i64)?
            .set_default("pretty_output", defaults.pretty_output)?
            .add_source(config::Environment::with_prefix("TOOLKIT").try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validated()
    }

    /// Checks the value ranges
    pub fn validated(self) -> Result<Self, CliError> {
        self.validate()?;
        Ok(self)
    }

    /// Default key length, clamped to the accepted key range
    pub fn key_length(&self) -> usize {
        self.default_key_length.clamp(MIN_KEY_LENGTH, MAX_KEY_LENGTH)
    }
}
