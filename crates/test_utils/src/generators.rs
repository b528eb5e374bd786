//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating inputs that respect the
//! caller-side validation rules (non-negative, finite, clamped lengths).

use core_kernel::Alphabet;
use domain_finance::{InvestmentInput, LoanInput};
use domain_keys::{KeyFormat, SecretFormat, WebhookAlgorithm, MAX_KEY_LENGTH, MIN_KEY_LENGTH};
use domain_uuid::UuidVersion;
use proptest::prelude::*;

/// Strategy for monthly percentage rates (0.00% to 5.00%)
pub fn monthly_rate_strategy() -> impl Strategy<Value = f64> {
    (0u32..=500u32).prop_map(|n| f64::from(n) / 100.0)
}

/// Strategy for positive amounts with cents
pub fn positive_amount_strategy() -> impl Strategy<Value = f64> {
    (1u64..1_000_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for non-negative amounts with cents
pub fn non_negative_amount_strategy() -> impl Strategy<Value = f64> {
    (0u64..100_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for valid loan inputs
pub fn loan_input_strategy() -> impl Strategy<Value = LoanInput> {
    (positive_amount_strategy(), monthly_rate_strategy(), 1u32..=420u32)
        .prop_map(|(amount, rate, months)| LoanInput::new(amount, rate, months))
}

/// Strategy for valid investment inputs
pub fn investment_input_strategy() -> impl Strategy<Value = InvestmentInput> {
    (
        non_negative_amount_strategy(),
        non_negative_amount_strategy(),
        monthly_rate_strategy(),
        0u32..=360u32,
    )
        .prop_map(|(initial, contribution, rate, months)| {
            InvestmentInput::new(initial, contribution, rate, months)
        })
}

/// Strategy for charset alphabets
pub fn alphabet_strategy() -> impl Strategy<Value = Alphabet> {
    prop_oneof![
        Just(Alphabet::Alphanumeric),
        Just(Alphabet::Hex),
        Just(Alphabet::Numeric),
    ]
}

/// Strategy for API key formats
pub fn key_format_strategy() -> impl Strategy<Value = KeyFormat> {
    prop_oneof![
        Just(KeyFormat::Alphanumeric),
        Just(KeyFormat::Hex),
        Just(KeyFormat::Base64),
        Just(KeyFormat::Base64Url),
        Just(KeyFormat::Uuid),
        Just(KeyFormat::Numeric),
    ]
}

/// Strategy for key lengths inside the accepted range
pub fn key_length_strategy() -> impl Strategy<Value = usize> {
    MIN_KEY_LENGTH..=MAX_KEY_LENGTH
}

/// Strategy for webhook algorithms
pub fn webhook_algorithm_strategy() -> impl Strategy<Value = WebhookAlgorithm> {
    prop_oneof![
        Just(WebhookAlgorithm::HmacSha256),
        Just(WebhookAlgorithm::HmacSha384),
        Just(WebhookAlgorithm::HmacSha512),
    ]
}

/// Strategy for webhook secret formats
pub fn secret_format_strategy() -> impl Strategy<Value = SecretFormat> {
    prop_oneof![
        Just(SecretFormat::Hex),
        Just(SecretFormat::Base64),
        Just(SecretFormat::Alphanumeric),
    ]
}

/// Strategy for UUID versions
pub fn uuid_version_strategy() -> impl Strategy<Value = UuidVersion> {
    prop_oneof![
        Just(UuidVersion::V1),
        Just(UuidVersion::V3),
        Just(UuidVersion::V4),
        Just(UuidVersion::V5),
        Just(UuidVersion::V7),
    ]
}

/// Strategy for names hashed into v3/v5 UUIDs, including non-ASCII text
pub fn uuid_name_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,40}"
}
