//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! toolkit test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built inputs and published reference vectors
//! - `sources`: Deterministic random sources for exact-output tests
//! - `assertions`: Custom assertion helpers for generated values
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod sources;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use sources::*;
pub use assertions::*;
pub use generators::*;
