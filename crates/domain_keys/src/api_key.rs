//! API key generation
//!
//! Keys are drawn from an injected [`RandomSource`] and graded by their
//! estimated entropy. The optional prefix is decoration only and never
//! contributes to the entropy estimate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{
    estimate_entropy_bits, generate_base64_of_length, generate_from_alphabet, Alphabet,
    Base64Variant, EntropyStrength, RandomSource,
};
use domain_uuid::{generate_v4, to_canonical};

use crate::error::KeyError;

/// Shortest key length callers may request
pub const MIN_KEY_LENGTH: usize = 8;

/// Longest key length callers may request
pub const MAX_KEY_LENGTH: usize = 256;

/// Key length used when the caller gives none
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Hex digits in a UUID, the entropy length of the `uuid` format
const UUID_HEX_DIGITS: usize = 32;

/// Clamps a caller-supplied length into `[MIN_KEY_LENGTH, MAX_KEY_LENGTH]`
pub fn clamp_key_length(requested: i64) -> usize {
    requested.clamp(MIN_KEY_LENGTH as i64, MAX_KEY_LENGTH as i64) as usize
}

/// Output format of a generated key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// `A-Z`, `a-z`, `0-9`
    Alphanumeric,
    /// Lowercase hexadecimal
    Hex,
    /// Standard base64, truncated to the requested length
    Base64,
    /// URL-safe base64 without padding, truncated to the requested length
    Base64Url,
    /// A random (v4) UUID; the requested length is ignored
    Uuid,
    /// Decimal digits
    Numeric,
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Alphanumeric => "alphanumeric",
            KeyFormat::Hex => "hex",
            KeyFormat::Base64 => "base64",
            KeyFormat::Base64Url => "base64url",
            KeyFormat::Uuid => "uuid",
            KeyFormat::Numeric => "numeric",
        }
    }

    /// Number of distinct symbols a key character can take
    pub fn alphabet_size(&self) -> usize {
        match self {
            KeyFormat::Alphanumeric => Alphabet::Alphanumeric.size(),
            KeyFormat::Hex | KeyFormat::Uuid => Alphabet::Hex.size(),
            KeyFormat::Numeric => Alphabet::Numeric.size(),
            KeyFormat::Base64 | KeyFormat::Base64Url => 64,
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyFormat {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphanumeric" => Ok(KeyFormat::Alphanumeric),
            "hex" => Ok(KeyFormat::Hex),
            "base64" => Ok(KeyFormat::Base64),
            "base64url" => Ok(KeyFormat::Base64Url),
            "uuid" => Ok(KeyFormat::Uuid),
            "numeric" => Ok(KeyFormat::Numeric),
            _ => Err(KeyError::UnknownFormat(s.to_string())),
        }
    }
}

/// Draws the body of a key and returns it with its entropy length
pub(crate) fn generate_body<R>(rng: &mut R, format: KeyFormat, length: usize) -> (String, usize)
where
    R: RandomSource + ?Sized,
{
    match format {
        KeyFormat::Alphanumeric => (generate_from_alphabet(rng, length, Alphabet::Alphanumeric), length),
        KeyFormat::Hex => (generate_from_alphabet(rng, length, Alphabet::Hex), length),
        KeyFormat::Numeric => (generate_from_alphabet(rng, length, Alphabet::Numeric), length),
        KeyFormat::Base64 => {
            let body = generate_base64_of_length(rng, length, Base64Variant::Standard);
            let effective = body.len();
            (body, effective)
        }
        KeyFormat::Base64Url => {
            let body = generate_base64_of_length(rng, length, Base64Variant::UrlSafe);
            let effective = body.len();
            (body, effective)
        }
        KeyFormat::Uuid => (to_canonical(&generate_v4(rng)), UUID_HEX_DIGITS),
    }
}

/// An API key request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenInput {
    pub format: KeyFormat,
    /// Requested characters, excluding the prefix
    pub length: usize,
    /// Text prepended to the key, such as `sk_live_`
    pub prefix: Option<String>,
    /// Also generate an unprefixed secret of the same shape
    pub generate_pair: bool,
}

impl KeyGenInput {
    pub fn new(format: KeyFormat, length: usize) -> Self {
        Self {
            format,
            length,
            prefix: None,
            generate_pair: false,
        }
    }

    /// Sets the key prefix; an empty prefix is treated as none
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    pub fn with_pair(mut self, generate_pair: bool) -> Self {
        self.generate_pair = generate_pair;
        self
    }

    /// The request used for the secret half of a pair
    ///
    /// Same format and length, no prefix, and never itself a pair.
    pub fn secret_counterpart(&self) -> Self {
        Self {
            format: self.format,
            length: self.length,
            prefix: None,
            generate_pair: false,
        }
    }
}

/// A generated key with its entropy grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenResult {
    /// The key, prefix included
    pub key: String,
    /// Unprefixed secret, present when a pair was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Estimated entropy of the key body
    pub entropy_bits: u32,
    pub entropy_strength: EntropyStrength,
}

impl KeyGenResult {
    /// Short name of the entropy grade, such as "strong"
    pub fn entropy_label(&self) -> &'static str {
        self.entropy_strength.label()
    }

    /// Usage guidance for the entropy grade
    pub fn entropy_description(&self) -> &'static str {
        self.entropy_strength.description()
    }
}

/// Generates an API key and, when requested, its secret counterpart
pub fn generate_api_key<R>(input: &KeyGenInput, rng: &mut R) -> KeyGenResult
where
    R: RandomSource + ?Sized,
{
    debug!(
        format = %input.format,
        length = input.length,
        prefixed = input.prefix.is_some(),
        pair = input.generate_pair,
        "generating api key"
    );

    let (body, effective_length) = generate_body(rng, input.format, input.length);
    let entropy_bits = estimate_entropy_bits(effective_length, input.format.alphabet_size());

    let key = match &input.prefix {
        Some(prefix) => format!("{}{}", prefix, body),
        None => body,
    };

    let secret = if input.generate_pair {
        Some(generate_api_key(&input.secret_counterpart(), rng).key)
    } else {
        None
    };

    KeyGenResult {
        key,
        secret,
        entropy_bits,
        entropy_strength: EntropyStrength::from_bits(entropy_bits),
    }
}
