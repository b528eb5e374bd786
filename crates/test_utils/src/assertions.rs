//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for calculator results and
//! generated values that give more meaningful error messages than standard
//! assertions.

use core_kernel::Alphabet;
use uuid::{Uuid, Variant};

/// Asserts that two floats are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that every character of `value` belongs to `alphabet`
pub fn assert_drawn_from(value: &str, alphabet: Alphabet) {
    if let Some(bad) = value.chars().find(|c| !alphabet.contains(*c)) {
        panic!("Character {:?} in {:?} is not part of the {:?} alphabet", bad, value, alphabet);
    }
}

/// Asserts that `value` is a lowercase, hyphenated 36 character UUID
///
/// # Returns
///
/// The parsed UUID
pub fn assert_canonical_uuid(value: &str) -> Uuid {
    assert_eq!(value.len(), 36, "UUID {:?} is not 36 characters long", value);
    for (index, ch) in value.char_indices() {
        if matches!(index, 8 | 13 | 18 | 23) {
            assert_eq!(ch, '-', "UUID {:?} is missing a hyphen at {}", value, index);
        } else {
            assert!(
                Alphabet::Hex.contains(ch),
                "UUID {:?} has non-lowercase-hex character {:?} at {}",
                value,
                ch,
                index
            );
        }
    }
    Uuid::parse_str(value).unwrap_or_else(|e| panic!("UUID {:?} failed to parse: {}", value, e))
}

/// Asserts the version nibble and the RFC 4122 variant bits of a UUID string
pub fn assert_uuid_version(value: &str, version: usize) {
    let uuid = assert_canonical_uuid(value);
    assert_eq!(
        uuid.get_version_num(),
        version,
        "UUID {} has version {}, expected {}",
        value,
        uuid.get_version_num(),
        version
    );
    assert_eq!(
        uuid.get_variant(),
        Variant::RFC4122,
        "UUID {} does not carry the RFC 4122 variant",
        value
    );
    assert_eq!(uuid.as_bytes()[8] >> 6, 0b10);
}

/// Extracts the 48-bit Unix millisecond prefix of a v7 UUID
pub fn v7_millis(uuid: &Uuid) -> u64 {
    let bytes = uuid.as_bytes();
    bytes[..6].iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

/// Reassembles the 60-bit timestamp of a v1 UUID
pub fn v1_ticks(uuid: &Uuid) -> u64 {
    let b = uuid.as_bytes();
    let time_low = u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
    let time_mid = u64::from(u16::from_be_bytes([b[4], b[5]]));
    let time_hi = u64::from(u16::from_be_bytes([b[6], b[7]]) & 0x0fff);
    (time_hi << 48) | (time_mid << 32) | time_low
}
