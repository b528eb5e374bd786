//! Key Generation Domain
//!
//! This crate generates credentials handed to API consumers:
//! - API keys in charset, base64 and UUID formats, optionally prefixed
//! - Key pairs (public prefixed key plus an unprefixed secret)
//! - Webhook signing secrets with ready-made verification snippets
//!
//! Every generator takes its bytes from an injected
//! [`core_kernel::RandomSource`]; use [`core_kernel::OsRandom`] for anything
//! handed to a user.

pub mod api_key;
pub mod webhook;
pub mod code_samples;
pub mod error;

pub use api_key::{
    KeyFormat, KeyGenInput, KeyGenResult, generate_api_key, clamp_key_length,
    MIN_KEY_LENGTH, MAX_KEY_LENGTH, DEFAULT_KEY_LENGTH,
};
pub use webhook::{
    WebhookAlgorithm, SecretFormat, WebhookSecretInput, WebhookSecretResult,
    generate_webhook_secret, DEFAULT_SECRET_LENGTH,
};
pub use code_samples::{CodeSamples, signature_code_samples, TOLERANCE_SECONDS};
pub use error::KeyError;
