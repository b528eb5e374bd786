//! Character-set and base64 encoders over random bytes
//!
//! # Alphabet encoding
//!
//! Each random byte maps to `alphabet[byte % alphabet.len()]`. For the 62 and
//! 10 symbol alphabets 256 is not a multiple of the alphabet size, so the
//! first `256 % size` symbols are slightly more likely than the rest. The bias
//! is kept so generated values stay compatible with existing keys; entropy
//! estimates ignore it.
//!
//! # Base64 encoding
//!
//! Requests for a character length draw `ceil(length * 3 / 4)` bytes and cut
//! the encoded text at `length`, which may split the last base64 group.

use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::random::RandomSource;

const ALPHANUMERIC: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const HEX: &[u8; 16] = b"0123456789abcdef";
const NUMERIC: &[u8; 10] = b"0123456789";

/// Fixed symbol sets used for charset encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// `A-Z`, `a-z`, `0-9`
    Alphanumeric,
    /// Lowercase hexadecimal digits
    Hex,
    /// Decimal digits
    Numeric,
}

impl Alphabet {
    /// Returns the ordered symbols of this alphabet
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Alphanumeric => ALPHANUMERIC,
            Alphabet::Hex => HEX,
            Alphabet::Numeric => NUMERIC,
        }
    }

    /// Returns the number of symbols
    pub fn size(&self) -> usize {
        self.symbols().len()
    }

    /// Returns true if `c` belongs to the alphabet
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.symbols().contains(&(c as u8))
    }
}

impl FromStr for Alphabet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphanumeric" => Ok(Alphabet::Alphanumeric),
            "hex" => Ok(Alphabet::Hex),
            "numeric" => Ok(Alphabet::Numeric),
            _ => Err(CoreError::unknown_variant("alphabet", s)),
        }
    }
}

/// Base64 flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base64Variant {
    /// RFC 4648 alphabet with `=` padding
    Standard,
    /// URL-safe alphabet (`-` and `_`) without padding
    UrlSafe,
}

/// Maps every byte to `alphabet[byte % size]`
pub fn encode_from_alphabet(bytes: &[u8], alphabet: Alphabet) -> String {
    let symbols = alphabet.symbols();
    bytes
        .iter()
        .map(|b| char::from(symbols[usize::from(*b) % symbols.len()]))
        .collect()
}

/// Generates `length` random characters drawn from `alphabet`
pub fn generate_from_alphabet<R>(rng: &mut R, length: usize, alphabet: Alphabet) -> String
where
    R: RandomSource + ?Sized,
{
    encode_from_alphabet(&rng.random_bytes(length), alphabet)
}

/// Encodes bytes as base64
pub fn encode_base64(bytes: &[u8], variant: Base64Variant) -> String {
    match variant {
        Base64Variant::Standard => STANDARD.encode(bytes),
        Base64Variant::UrlSafe => URL_SAFE_NO_PAD.encode(bytes),
    }
}

/// Generates the base64 encoding of `byte_length` random bytes
pub fn generate_base64<R>(rng: &mut R, byte_length: usize, variant: Base64Variant) -> String
where
    R: RandomSource + ?Sized,
{
    encode_base64(&rng.random_bytes(byte_length), variant)
}

/// Number of random bytes needed to yield at least `length` base64 characters
pub fn base64_byte_length(length: usize) -> usize {
    (length * 3).div_ceil(4)
}

/// Generates exactly `length` base64 characters
///
/// The encoded text is truncated, never padded, so the result carries no `=`.
pub fn generate_base64_of_length<R>(rng: &mut R, length: usize, variant: Base64Variant) -> String
where
    R: RandomSource + ?Sized,
{
    let mut encoded = generate_base64(rng, base64_byte_length(length), variant);
    encoded.truncate(length);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Alphanumeric.size(), 62);
        assert_eq!(Alphabet::Hex.size(), 16);
        assert_eq!(Alphabet::Numeric.size(), 10);
    }

    #[test]
    fn test_alphabet_from_str() {
        assert_eq!("HEX".parse::<Alphabet>(), Ok(Alphabet::Hex));
        assert_eq!(
            "base32".parse::<Alphabet>(),
            Err(CoreError::unknown_variant("alphabet", "base32"))
        );
    }

    #[test]
    fn test_encode_from_alphabet_wraps_with_modulo() {
        let encoded = encode_from_alphabet(&[0, 9, 10, 255], Alphabet::Numeric);
        assert_eq!(encoded, "0905");
    }

    #[test]
    fn test_encode_hex_low_nibble() {
        assert_eq!(encode_from_alphabet(&[0x00, 0x1f, 0xab], Alphabet::Hex), "0fb");
    }

    #[test]
    fn test_encode_alphanumeric_positions() {
        // 62 -> 'A', 61 -> '9', 26 -> 'a'
        assert_eq!(encode_from_alphabet(&[62, 61, 26], Alphabet::Alphanumeric), "A9a");
    }

    #[test]
    fn test_base64_byte_length() {
        assert_eq!(base64_byte_length(0), 0);
        assert_eq!(base64_byte_length(4), 3);
        assert_eq!(base64_byte_length(5), 4);
        assert_eq!(base64_byte_length(32), 24);
        assert_eq!(base64_byte_length(33), 25);
    }

    #[test]
    fn test_encode_base64_variants() {
        let bytes = [0xfb, 0xff, 0xfe];
        assert_eq!(encode_base64(&bytes, Base64Variant::Standard), "+//+");
        assert_eq!(encode_base64(&bytes, Base64Variant::UrlSafe), "-__-");
        assert_eq!(encode_base64(&[0xff], Base64Variant::Standard), "/w==");
        assert_eq!(encode_base64(&[0xff], Base64Variant::UrlSafe), "_w");
    }

    #[test]
    fn test_generate_base64_of_length_is_exact() {
        let mut rng = SeededRandom::new(3);
        for length in [1, 7, 8, 9, 31, 32, 33, 256] {
            let standard = generate_base64_of_length(&mut rng, length, Base64Variant::Standard);
            let url = generate_base64_of_length(&mut rng, length, Base64Variant::UrlSafe);
            assert_eq!(standard.len(), length);
            assert_eq!(url.len(), length);
            assert!(!standard.contains('='));
        }
    }

    #[test]
    fn test_generate_from_alphabet_length_and_symbols() {
        let mut rng = SeededRandom::new(11);
        let value = generate_from_alphabet(&mut rng, 100, Alphabet::Hex);
        assert_eq!(value.len(), 100);
        assert!(value.chars().all(|c| Alphabet::Hex.contains(c)));
    }
}
