//! Command Line Interface Layer
//!
//! This crate exposes the calculators and generators as `toolkit`
//! subcommands that print JSON.
//!
//! # Architecture
//!
//! - **Commands**: clap definitions and dispatch to the domain crates
//! - **Config**: environment driven settings with range validation
//! - **Error Handling**: one error type wrapping the fallible layers
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use interface_cli::{run, Cli, ToolkitConfig};
//!
//! let cli = Cli::try_parse_from(["toolkit", "loan", "--amount", "100000", "--rate", "1", "--months", "12"]).unwrap();
//! let output = run(&cli, &ToolkitConfig::default()).unwrap();
//! assert_eq!(output["display"]["installment"], "R$\u{a0}8.884,88");
//! ```

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{execute, run, Cli, Command};
pub use config::ToolkitConfig;
pub use error::CliError;
