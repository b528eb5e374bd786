//! Entropy estimation for generated strings
//!
//! Entropy is derived from the output length and the alphabet cardinality
//! alone. Nothing here measures the randomness of an actual value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Estimated entropy in whole bits: `floor(length * log2(alphabet_size))`
pub fn estimate_entropy_bits(length: usize, alphabet_size: usize) -> u32 {
    if length == 0 || alphabet_size < 2 {
        return 0;
    }
    (length as f64 * (alphabet_size as f64).log2()).floor() as u32
}

/// Strength band for an entropy estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyStrength {
    /// Below 64 bits
    Weak,
    /// 64 to 127 bits
    Moderate,
    /// 128 to 191 bits
    Strong,
    /// 192 to 255 bits
    VeryStrong,
    /// 256 bits and above
    Exceptional,
}

impl EntropyStrength {
    /// Classifies an entropy estimate
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            0..=63 => EntropyStrength::Weak,
            64..=127 => EntropyStrength::Moderate,
            128..=191 => EntropyStrength::Strong,
            192..=255 => EntropyStrength::VeryStrong,
            _ => EntropyStrength::Exceptional,
        }
    }

    /// Short label for the band
    pub fn label(&self) -> &'static str {
        match self {
            EntropyStrength::Weak => "weak",
            EntropyStrength::Moderate => "moderate",
            EntropyStrength::Strong => "strong",
            EntropyStrength::VeryStrong => "very strong",
            EntropyStrength::Exceptional => "exceptional",
        }
    }

    /// Usage guidance shown next to a generated value
    pub fn description(&self) -> &'static str {
        match self {
            EntropyStrength::Weak => "Weak - use for development only",
            EntropyStrength::Moderate => "Moderate - suitable for internal use",
            EntropyStrength::Strong => "Strong - suitable for production",
            EntropyStrength::VeryStrong => "Very strong - excellent for production",
            EntropyStrength::Exceptional => "Exceptional - maximum security",
        }
    }
}

impl fmt::Display for EntropyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
