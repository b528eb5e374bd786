//! CLI error handling

use thiserror::Error;

use domain_uuid::UuidError;

/// Errors surfaced by the command line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("UUID error: {0}")]
    Uuid(#[from] UuidError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
