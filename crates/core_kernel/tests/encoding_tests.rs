//! Unit tests for the encoding and entropy helpers
//!
//! Tests cover alphabet encoding, base64 truncation, entropy bands and the
//! behaviour of the random sources through the public API.

use core_kernel::{
    Alphabet, Base64Variant, EntropyStrength, RandomSource, SeededRandom,
    encode_from_alphabet, estimate_entropy_bits, generate_base64_of_length,
    generate_from_alphabet,
};

/// Returns bytes 0, 1, 2, ... wrapping at 256
struct CountingSource {
    next: u8,
}

impl RandomSource for CountingSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
    }
}

mod alphabet_encoding {
    use super::*;

    #[test]
    fn test_full_byte_range_covers_every_symbol() {
        let bytes: Vec<u8> = (0..=255).collect();
        for alphabet in [Alphabet::Alphanumeric, Alphabet::Hex, Alphabet::Numeric] {
            let encoded = encode_from_alphabet(&bytes, alphabet);
            for symbol in alphabet.symbols() {
                assert!(encoded.contains(char::from(*symbol)));
            }
        }
    }

    #[test]
    fn test_modulo_bias_is_preserved() {
        // 256 = 25 * 10 + 6, so digits 0..=5 appear 26 times and 6..=9 appear 25 times
        let bytes: Vec<u8> = (0..=255).collect();
        let encoded = encode_from_alphabet(&bytes, Alphabet::Numeric);
        assert_eq!(encoded.matches('0').count(), 26);
        assert_eq!(encoded.matches('5').count(), 26);
        assert_eq!(encoded.matches('6').count(), 25);
        assert_eq!(encoded.matches('9').count(), 25);
    }

    #[test]
    fn test_generate_uses_injected_source() {
        let mut source = CountingSource { next: 0 };
        let value = generate_from_alphabet(&mut source, 12, Alphabet::Numeric);
        assert_eq!(value, "012345678901");
    }

    #[test]
    fn test_contains_rejects_foreign_symbols() {
        assert!(!Alphabet::Hex.contains('g'));
        assert!(!Alphabet::Hex.contains('A'));
        assert!(!Alphabet::Numeric.contains('a'));
        assert!(!Alphabet::Alphanumeric.contains('-'));
        assert!(!Alphabet::Alphanumeric.contains('é'));
    }
}

mod base64_encoding {
    use super::*;

    #[test]
    fn test_url_safe_never_contains_standard_symbols() {
        let mut rng = SeededRandom::new(99);
        for _ in 0..50 {
            let value = generate_base64_of_length(&mut rng, 64, Base64Variant::UrlSafe);
            assert!(!value.contains('+'));
            assert!(!value.contains('/'));
            assert!(!value.contains('='));
        }
    }

    #[test]
    fn test_truncation_keeps_prefix_of_full_encoding() {
        let mut first = SeededRandom::new(5);
        let mut second = SeededRandom::new(5);
        let truncated = generate_base64_of_length(&mut first, 10, Base64Variant::Standard);
        let full = core_kernel::generate_base64(&mut second, 8, Base64Variant::Standard);
        assert!(full.starts_with(&truncated));
    }
}

mod entropy {
    use super::*;

    #[test]
    fn test_documented_example() {
        assert_eq!(estimate_entropy_bits(32, 62), 190);
        assert_eq!(EntropyStrength::from_bits(190), EntropyStrength::Strong);
    }

    #[test]
    fn test_labels_and_descriptions() {
        assert_eq!(EntropyStrength::Weak.label(), "weak");
        assert_eq!(EntropyStrength::VeryStrong.to_string(), "very strong");
        assert!(EntropyStrength::Exceptional.description().starts_with("Exceptional"));
    }

    #[test]
    fn test_bands_are_ordered() {
        assert!(EntropyStrength::Weak < EntropyStrength::Moderate);
        assert!(EntropyStrength::VeryStrong < EntropyStrength::Exceptional);
    }
}
