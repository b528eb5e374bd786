//! UUID domain errors

use thiserror::Error;

/// Errors that can occur in the UUID domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    /// A caller-supplied namespace is not a well-formed UUID
    #[error("Invalid namespace '{value}': {reason}")]
    InvalidNamespace {
        value: String,
        reason: String,
    },

    #[error("Unsupported UUID version: {0}")]
    UnsupportedVersion(String),

    #[error("Unknown namespace preset: {0}")]
    UnknownNamespacePreset(String),
}
