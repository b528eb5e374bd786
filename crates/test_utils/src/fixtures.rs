//! Pre-built Test Fixtures
//!
//! Provides ready-to-use inputs and reference values for the calculators and
//! generators. These fixtures are consistent and predictable for unit tests.

use chrono::{TimeZone, Utc};
use core_kernel::FixedClock;
use domain_finance::{InvestmentInput, LoanInput};
use domain_keys::{KeyFormat, KeyGenInput, SecretFormat, WebhookAlgorithm, WebhookSecretInput};
use uuid::Uuid;

/// Fixture for calculator inputs
pub struct FinanceFixtures;

impl FinanceFixtures {
    /// 100,000 financed at 1% a month over 12 months (installment 8,884.88)
    pub fn price_table_loan() -> LoanInput {
        LoanInput::new(100_000.0, 1.0, 12)
    }

    /// Interest-free purchase split in 10 installments
    pub fn interest_free_loan() -> LoanInput {
        LoanInput::new(2_500.0, 0.0, 10)
    }

    /// 1,000 initial plus 500 a month at 1% over 24 months
    pub fn monthly_savings() -> InvestmentInput {
        InvestmentInput::new(1_000.0, 500.0, 1.0, 24)
    }
}

/// Fixture for key and secret requests
pub struct KeyFixtures;

impl KeyFixtures {
    /// The default 32 character alphanumeric key
    pub fn default_key() -> KeyGenInput {
        KeyGenInput::new(KeyFormat::Alphanumeric, 32)
    }

    /// A prefixed key with a secret counterpart
    pub fn live_key_pair() -> KeyGenInput {
        KeyGenInput::new(KeyFormat::Alphanumeric, 32)
            .with_prefix("sk_live_")
            .with_pair(true)
    }

    /// The default webhook secret request
    pub fn webhook_secret() -> WebhookSecretInput {
        WebhookSecretInput::new(WebhookAlgorithm::HmacSha256, SecretFormat::Hex, 32)
    }
}

/// Published name-based UUID vectors (namespace, name, expected)
///
/// Values match Python's `uuid.uuid3` / `uuid.uuid5` and RFC 9562 Appendix A.
pub struct UuidFixtures;

impl UuidFixtures {
    pub fn v3_vectors() -> Vec<(Uuid, &'static str, &'static str)> {
        vec![
            (Uuid::NAMESPACE_DNS, "python.org", "6fa459ea-ee8a-3ca4-894e-db77e160355e"),
            (Uuid::NAMESPACE_DNS, "www.example.com", "5df41881-3aed-3515-88a7-2f4a814cf09e"),
            (Uuid::NAMESPACE_DNS, "example.com", "9073926b-929f-31c2-abc9-fad77ae3e8eb"),
        ]
    }

    pub fn v5_vectors() -> Vec<(Uuid, &'static str, &'static str)> {
        vec![
            (Uuid::NAMESPACE_DNS, "python.org", "886313e1-3b8a-5372-9b90-0c9aee199e5d"),
            (Uuid::NAMESPACE_DNS, "www.example.com", "2ed6657d-e927-568b-95e1-2665a8aea6a2"),
            (Uuid::NAMESPACE_DNS, "example.com", "cfbff0d1-9375-5685-968c-48ce8b15ae17"),
            (Uuid::NAMESPACE_DNS, "www.widget.com", "66012888-0ba6-5acc-8413-7b251906e34a"),
            (Uuid::NAMESPACE_URL, "https://example.com", "4fd35a71-71ef-5a55-a9d9-aa75c889a6d0"),
        ]
    }

    /// A clock pinned to 2024-01-01T00:00:00Z
    pub fn new_year_2024() -> FixedClock {
        FixedClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }
}
