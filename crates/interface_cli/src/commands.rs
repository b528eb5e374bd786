//! Command definitions and dispatch
//!
//! Numeric arguments arrive as raw text and go through the pt-BR aware
//! parsers, so `1.234,56` and `1234.56` are both accepted. Malformed numbers
//! become zero and flow into the calculators' degenerate branches.

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{debug, info};

use core_kernel::{Clock, OsRandom, RandomSource, SystemClock};
use domain_finance::{
    build_investment_series, calculate_investment, calculate_loan, format_currency, format_percent,
    parse_number, parse_whole_number, InvestmentInput, LoanInput,
};
use domain_keys::{
    clamp_key_length, generate_api_key, generate_webhook_secret, KeyFormat, KeyGenInput,
    SecretFormat, WebhookAlgorithm, WebhookSecretInput, DEFAULT_SECRET_LENGTH,
};
use domain_uuid::{resolve_namespace, NamespacePreset, UuidGenerator, UuidInput, UuidVersion};

use crate::config::ToolkitConfig;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "toolkit",
    version,
    about = "Loan and investment simulators plus API key, webhook secret and UUID generators."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fixed monthly installment of an amortizing loan
    Loan {
        /// Financed amount
        #[arg(long)]
        amount: String,
        /// Monthly interest rate in percent
        #[arg(long, default_value = "0")]
        rate: String,
        /// Number of installments
        #[arg(long)]
        months: String,
    },

    /// Future value of an initial amount plus monthly contributions
    Invest {
        /// Amount invested at month 0
        #[arg(long, default_value = "0")]
        initial: String,
        /// Amount added every month
        #[arg(long, default_value = "0")]
        contribution: String,
        /// Monthly return in percent
        #[arg(long, default_value = "0")]
        rate: String,
        /// Investment horizon in months
        #[arg(long)]
        months: String,
        /// Include the month-by-month series
        #[arg(long)]
        series: bool,
    },

    /// Random API key, optionally prefixed and paired with a secret
    ApiKey {
        #[arg(long, default_value = "alphanumeric")]
        format: KeyFormat,
        /// Characters excluding the prefix, clamped to 8..=256
        #[arg(long)]
        length: Option<String>,
        #[arg(long)]
        prefix: Option<String>,
        /// Also generate an unprefixed secret
        #[arg(long)]
        pair: bool,
    },

    /// Webhook signing secret with verification snippets
    WebhookSecret {
        #[arg(long, default_value = "HMAC-SHA256")]
        algorithm: WebhookAlgorithm,
        #[arg(long, default_value = "hex")]
        format: SecretFormat,
        /// Characters, clamped to 8..=256
        #[arg(long)]
        length: Option<String>,
    },

    /// One or more UUIDs of a given version
    Uuid {
        #[arg(long, default_value = "v4")]
        version: UuidVersion,
        /// Namespace preset for v3/v5: dns, url, oid, x500 or custom
        #[arg(long, default_value = "dns")]
        namespace: NamespacePreset,
        /// Namespace UUID used with `--namespace custom`
        #[arg(long)]
        custom_namespace: Option<String>,
        /// Name hashed by v3/v5
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "1")]
        count: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Loan { .. } => "loan",
            Command::Invest { .. } => "invest",
            Command::ApiKey { .. } => "api-key",
            Command::WebhookSecret { .. } => "webhook-secret",
            Command::Uuid { .. } => "uuid",
        }
    }
}

fn non_negative(raw: &str) -> f64 {
    parse_number(raw).max(0.0)
}

fn months(raw: &str) -> u32 {
    u32::try_from(parse_whole_number(raw).max(0)).unwrap_or(u32::MAX)
}

/// Resolves an optional length argument; absent or zero means `default`
fn length_or(raw: Option<&str>, default: usize) -> usize {
    match raw.map(parse_whole_number) {
        None | Some(0) => default,
        Some(n) => clamp_key_length(n),
    }
}

/// Runs a command with the OS random source and the system clock
///
/// # Errors
///
/// Returns an error if a custom namespace is malformed or the output cannot
/// be serialized
pub fn run(cli: &Cli, config: &ToolkitConfig) -> Result<Value, CliError> {
    execute(&cli.command, config, OsRandom, SystemClock)
}

/// Runs a command with explicit random source and clock
pub fn execute<R, C>(command: &Command, config: &ToolkitConfig, mut rng: R, clock: C) -> Result<Value, CliError>
where
    R: RandomSource,
    C: Clock,
{
    info!(command = command.name(), "running command");

    match command {
        Command::Loan { amount, rate, months: term } => {
            let input = LoanInput::new(non_negative(amount), non_negative(rate), months(term));
            let result = calculate_loan(&input);

            Ok(json!({
                "input": input,
                "result": result,
                "display": {
                    "installment": format_currency(result.installment),
                    "total_paid": format_currency(result.total_paid),
                    "total_interest": format_currency(result.total_interest),
                    "monthly_rate": format_percent(input.monthly_rate),
                },
            }))
        }

        Command::Invest { initial, contribution, rate, months: horizon, series } => {
            let input = InvestmentInput::new(
                non_negative(initial),
                non_negative(contribution),
                non_negative(rate),
                months(horizon),
            );
            let result = calculate_investment(&input);

            let mut output = json!({
                "input": input,
                "result": result,
                "display": {
                    "final_value": format_currency(result.final_value),
                    "total_invested": format_currency(result.total_invested),
                    "total_interest": format_currency(result.total_interest),
                    "monthly_rate": format_percent(input.monthly_rate),
                },
            });
            if *series {
                let series = build_investment_series(&input);
                output["series"] = serde_json::to_value(series.points())?;
            }
            Ok(output)
        }

        Command::ApiKey { format, length, prefix, pair } => {
            let length = length_or(length.as_deref(), config.key_length());
            let mut input = KeyGenInput::new(*format, length).with_pair(*pair);
            if let Some(prefix) = prefix {
                input = input.with_prefix(prefix.as_str());
            }
            let result = generate_api_key(&input, &mut rng);

            let mut output = serde_json::to_value(&result)?;
            output["entropy_label"] = json!(result.entropy_label());
            output["entropy_description"] = json!(result.entropy_description());
            output["format"] = json!(format);
            Ok(output)
        }

        Command::WebhookSecret { algorithm, format, length } => {
            let length = length_or(length.as_deref(), DEFAULT_SECRET_LENGTH);
            let input = WebhookSecretInput::new(*algorithm, *format, length);
            Ok(serde_json::to_value(generate_webhook_secret(&input, &mut rng))?)
        }

        Command::Uuid { version, namespace, custom_namespace, name, count } => {
            let limit = i64::try_from(config.max_uuid_count).unwrap_or(i64::MAX);
            let count = parse_whole_number(count).clamp(1, limit.max(1)) as usize;

            let mut input = UuidInput::new(*version, count);
            if version.is_name_based() {
                let namespace = resolve_namespace(*namespace, custom_namespace.as_deref())?;
                input = input.with_name(namespace, name.clone().unwrap_or_default());
            }
            debug!(version = %version, count, "resolved uuid request");

            let result = UuidGenerator::new(rng, clock).generate_batch(&input);
            let mut output = serde_json::to_value(&result)?;
            output["description"] = json!(version.description());
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_or_default() {
        assert_eq!(length_or(None, 32), 32);
        assert_eq!(length_or(Some("0"), 40), 40);
        assert_eq!(length_or(Some("abc"), 40), 40);
        assert_eq!(length_or(Some("3"), 32), 8);
        assert_eq!(length_or(Some("64"), 32), 64);
        assert_eq!(length_or(Some("9000"), 32), 256);
    }

    #[test]
    fn test_months_parsing() {
        assert_eq!(months("12"), 12);
        assert_eq!(months("-3"), 0);
        assert_eq!(months("12,7"), 12);
        assert_eq!(months("x"), 0);
    }

    #[test]
    fn test_command_names() {
        let command = Command::Invest {
            initial: "0".into(),
            contribution: "0".into(),
            rate: "0".into(),
            months: "0".into(),
            series: false,
        };
        assert_eq!(command.name(), "invest");
    }
}
