//! Key domain errors

use thiserror::Error;

/// Errors that can occur in the key domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key format: {0}")]
    UnknownFormat(String),

    #[error("Unknown webhook algorithm: {0}")]
    UnknownAlgorithm(String),
}
