//! Deterministic Random Sources
//!
//! Scripted byte streams for tests that need to predict generated output
//! exactly. None of these are suitable outside tests.

use core_kernel::RandomSource;

/// Replays a fixed byte pattern, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    pattern: Vec<u8>,
    position: usize,
}

impl ScriptedRandom {
    /// Creates a source that repeats `pattern`
    ///
    /// # Panics
    ///
    /// Panics if the pattern is empty
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        let pattern = pattern.into();
        assert!(!pattern.is_empty(), "pattern must not be empty");
        Self { pattern, position: 0 }
    }

    /// Yields 0, 1, 2, ..., 255, 0, 1, ...
    pub fn counting() -> Self {
        Self::new((0..=255).collect::<Vec<u8>>())
    }

    /// Yields the same byte forever
    pub fn constant(byte: u8) -> Self {
        Self::new(vec![byte])
    }

    /// Total bytes handed out so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.position % self.pattern.len()];
            self.position += 1;
        }
    }
}
