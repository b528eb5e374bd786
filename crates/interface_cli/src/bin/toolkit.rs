//! Toolkit command line binary
//!
//! # Usage
//!
//! ```bash
//! toolkit loan --amount 100000 --rate 1 --months 12
//! toolkit invest --initial 1000 --contribution 500 --rate 1 --months 24 --series
//! toolkit api-key --format base64url --length 40 --prefix sk_live_ --pair
//! toolkit webhook-secret --algorithm HMAC-SHA512 --format base64
//! toolkit uuid --version v5 --namespace url --name https://example.com
//! ```
//!
//! # Environment Variables
//!
//! * `TOOLKIT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `TOOLKIT_DEFAULT_KEY_LENGTH` - Key length when `--length` is absent (default: 32)
//! * `TOOLKIT_MAX_UUID_COUNT` - Upper bound for `uuid --count` (default: 100)
//! * `TOOLKIT_PRETTY_OUTPUT` - Pretty-print JSON (default: true)
//!
//! Logs go to stderr so stdout stays valid JSON.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{run, Cli, ToolkitConfig};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ToolkitConfig::from_env().context("loading toolkit configuration")?;

    init_tracing(&config.log_level);

    let output = run(&cli, &config).with_context(|| format!("running {}", cli.command.name()))?;
    let text = if config.pretty_output {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
