//! Random byte sources
//!
//! Every generated key, secret and random UUID draws its bytes through the
//! [`RandomSource`] port. Production code uses [`OsRandom`], which reads from
//! the operating system CSPRNG. [`SeededRandom`] gives reproducible output
//! and is intended for tests and demos only.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// A source of random bytes
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Returns `len` freshly drawn random bytes
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

/// Operating system backed CSPRNG
///
/// Stateless, so it can be shared freely between threads by copying it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Deterministic source seeded from a `u64`
///
/// Produces the same byte stream for the same seed. Never use it for
/// secrets handed to end users.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: StdRng,
}

impl SeededRandom {
    /// Creates a source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }
}

/// Draws `len` bytes from the operating system CSPRNG
pub fn secure_random_bytes(len: usize) -> Vec<u8> {
    OsRandom.random_bytes(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_random_bytes_length() {
        assert_eq!(secure_random_bytes(0).len(), 0);
        assert_eq!(secure_random_bytes(16).len(), 16);
        assert_eq!(secure_random_bytes(257).len(), 257);
    }

    #[test]
    fn test_os_random_draws_differ() {
        let a = secure_random_bytes(32);
        let b = secure_random_bytes(32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        assert_eq!(a.random_bytes(64), b.random_bytes(64));
    }

    #[test]
    fn test_seeded_random_differs_per_seed() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        assert_ne!(a.random_bytes(32), b.random_bytes(32));
    }

    #[test]
    fn test_random_source_as_trait_object() {
        let mut source: Box<dyn RandomSource> = Box::new(SeededRandom::new(7));
        assert_eq!(source.random_bytes(10).len(), 10);
    }
}
