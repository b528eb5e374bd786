//! Namespaces for name-based UUIDs
//!
//! The four well-known RFC 4122 namespaces are exposed as presets. A custom
//! namespace is parsed from caller text and rejected if malformed, so invalid
//! input never reaches the hash function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UuidError;

/// Namespace selection offered to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespacePreset {
    Dns,
    Url,
    Oid,
    X500,
    /// Caller-supplied namespace UUID
    Custom,
}

impl NamespacePreset {
    /// The standard namespace UUID, `None` for [`NamespacePreset::Custom`]
    pub fn uuid(&self) -> Option<Uuid> {
        match self {
            NamespacePreset::Dns => Some(Uuid::NAMESPACE_DNS),
            NamespacePreset::Url => Some(Uuid::NAMESPACE_URL),
            NamespacePreset::Oid => Some(Uuid::NAMESPACE_OID),
            NamespacePreset::X500 => Some(Uuid::NAMESPACE_X500),
            NamespacePreset::Custom => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamespacePreset::Dns => "dns",
            NamespacePreset::Url => "url",
            NamespacePreset::Oid => "oid",
            NamespacePreset::X500 => "x500",
            NamespacePreset::Custom => "custom",
        }
    }
}

impl fmt::Display for NamespacePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamespacePreset {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dns" => Ok(NamespacePreset::Dns),
            "url" => Ok(NamespacePreset::Url),
            "oid" => Ok(NamespacePreset::Oid),
            "x500" | "x.500" => Ok(NamespacePreset::X500),
            "custom" => Ok(NamespacePreset::Custom),
            _ => Err(UuidError::UnknownNamespacePreset(s.to_string())),
        }
    }
}

/// Parses a namespace UUID supplied as text
///
/// Accepts the hyphenated, simple, braced and URN forms.
pub fn parse_namespace(raw: &str) -> Result<Uuid, UuidError> {
    Uuid::parse_str(raw.trim()).map_err(|e| UuidError::InvalidNamespace {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Resolves a preset to its namespace UUID
///
/// For [`NamespacePreset::Custom`] the `custom` text is parsed; an absent or
/// blank value falls back to the DNS namespace. The custom text is ignored
/// for the standard presets.
pub fn resolve_namespace(preset: NamespacePreset, custom: Option<&str>) -> Result<Uuid, UuidError> {
    if let Some(uuid) = preset.uuid() {
        return Ok(uuid);
    }
    match custom.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => parse_namespace(raw),
        None => Ok(Uuid::NAMESPACE_DNS),
    }
}
