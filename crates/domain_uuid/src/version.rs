//! Supported UUID versions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UuidError;

/// UUID versions the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Gregorian timestamp with random clock sequence and node
    V1,
    /// MD5 of namespace and name
    V3,
    /// Fully random
    V4,
    /// SHA-1 of namespace and name
    V5,
    /// Unix millisecond timestamp followed by random bits
    V7,
}

impl UuidVersion {
    /// Value written into the version nibble
    pub fn number(&self) -> u8 {
        match self {
            UuidVersion::V1 => 1,
            UuidVersion::V3 => 3,
            UuidVersion::V4 => 4,
            UuidVersion::V5 => 5,
            UuidVersion::V7 => 7,
        }
    }

    /// Returns true for versions derived from a namespace and a name
    pub fn is_name_based(&self) -> bool {
        matches!(self, UuidVersion::V3 | UuidVersion::V5)
    }

    pub fn description(&self) -> &'static str {
        match self {
            UuidVersion::V1 => "Time-based UUID carrying a timestamp and a node identifier",
            UuidVersion::V3 => "Deterministic UUID from a namespace and a name using MD5; prefer v5 for new projects",
            UuidVersion::V4 => "Random UUID built from cryptographic entropy; the most common choice",
            UuidVersion::V5 => "Deterministic UUID from a namespace and a name using SHA-1; same input, same UUID",
            UuidVersion::V7 => "Timestamp-prefixed UUID that sorts chronologically; suited to primary keys",
        }
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

impl FromStr for UuidVersion {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        match digits {
            "1" => Ok(UuidVersion::V1),
            "3" => Ok(UuidVersion::V3),
            "4" => Ok(UuidVersion::V4),
            "5" => Ok(UuidVersion::V5),
            "7" => Ok(UuidVersion::V7),
            _ => Err(UuidError::UnsupportedVersion(s.to_string())),
        }
    }
}
