//! Core Kernel - Foundational building blocks for the toolkit
//!
//! This crate provides the low-level pieces shared by the generators:
//! - Random byte sources behind the `RandomSource` port
//! - Clocks for time-based identifiers
//! - Alphabet and base64 encoders
//! - Entropy estimation

pub mod random;
pub mod clock;
pub mod encoding;
pub mod entropy;
pub mod error;

pub use random::{RandomSource, OsRandom, SeededRandom, secure_random_bytes};
pub use clock::{Clock, SystemClock, FixedClock};
pub use encoding::{
    Alphabet, Base64Variant, encode_from_alphabet, generate_from_alphabet,
    encode_base64, generate_base64, base64_byte_length, generate_base64_of_length,
};
pub use entropy::{estimate_entropy_bits, EntropyStrength};
pub use error::CoreError;
