//! Core error types used across the toolkit

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
    },
}

impl CoreError {
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
