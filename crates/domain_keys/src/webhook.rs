//! Webhook signing secrets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::RandomSource;

use crate::api_key::{generate_body, KeyFormat};
use crate::code_samples::{signature_code_samples, CodeSamples};
use crate::error::KeyError;

/// Secret length used when the caller gives none
pub const DEFAULT_SECRET_LENGTH: usize = 32;

/// HMAC algorithm the receiver verifies signatures with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookAlgorithm {
    #[serde(rename = "HMAC-SHA256")]
    HmacSha256,
    #[serde(rename = "HMAC-SHA384")]
    HmacSha384,
    #[serde(rename = "HMAC-SHA512")]
    HmacSha512,
}

impl WebhookAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookAlgorithm::HmacSha256 => "HMAC-SHA256",
            WebhookAlgorithm::HmacSha384 => "HMAC-SHA384",
            WebhookAlgorithm::HmacSha512 => "HMAC-SHA512",
        }
    }

    /// Digest name as spelled by Node's `crypto` and Python's `hashlib`
    pub fn hash_name(&self) -> &'static str {
        match self {
            WebhookAlgorithm::HmacSha256 => "sha256",
            WebhookAlgorithm::HmacSha384 => "sha384",
            WebhookAlgorithm::HmacSha512 => "sha512",
        }
    }
}

impl fmt::Display for WebhookAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookAlgorithm {
    type Err = KeyError;

    /// Accepts `HMAC-SHA256` as well as the bare `sha256`, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digest = normalized.strip_prefix("hmac-").unwrap_or(normalized.as_str());
        match digest.replace('-', "").as_str() {
            "sha256" => Ok(WebhookAlgorithm::HmacSha256),
            "sha384" => Ok(WebhookAlgorithm::HmacSha384),
            "sha512" => Ok(WebhookAlgorithm::HmacSha512),
            _ => Err(KeyError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Character set of a webhook secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretFormat {
    Hex,
    Base64,
    Alphanumeric,
}

impl From<SecretFormat> for KeyFormat {
    fn from(format: SecretFormat) -> Self {
        match format {
            SecretFormat::Hex => KeyFormat::Hex,
            SecretFormat::Base64 => KeyFormat::Base64,
            SecretFormat::Alphanumeric => KeyFormat::Alphanumeric,
        }
    }
}

impl fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(KeyFormat::from(*self).as_str())
    }
}

impl FromStr for SecretFormat {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<KeyFormat>()? {
            KeyFormat::Hex => Ok(SecretFormat::Hex),
            KeyFormat::Base64 => Ok(SecretFormat::Base64),
            KeyFormat::Alphanumeric => Ok(SecretFormat::Alphanumeric),
            _ => Err(KeyError::UnknownFormat(s.to_string())),
        }
    }
}

/// A webhook secret request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSecretInput {
    pub algorithm: WebhookAlgorithm,
    pub format: SecretFormat,
    pub length: usize,
}

impl WebhookSecretInput {
    pub fn new(algorithm: WebhookAlgorithm, format: SecretFormat, length: usize) -> Self {
        Self {
            algorithm,
            format,
            length,
        }
    }
}

/// A generated secret with verification snippets embedding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSecretResult {
    pub secret: String,
    pub algorithm: WebhookAlgorithm,
    pub code_samples: CodeSamples,
}

/// Generates a webhook signing secret
pub fn generate_webhook_secret<R>(input: &WebhookSecretInput, rng: &mut R) -> WebhookSecretResult
where
    R: RandomSource + ?Sized,
{
    debug!(
        algorithm = %input.algorithm,
        format = %input.format,
        length = input.length,
        "generating webhook secret"
    );

    let (secret, _) = generate_body(rng, input.format.into(), input.length);
    let code_samples = signature_code_samples(&secret, input.algorithm);

    WebhookSecretResult {
        secret,
        algorithm: input.algorithm,
        code_samples,
    }
}
