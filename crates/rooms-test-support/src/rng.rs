//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use rooms_core::rng::DeterministicRng;

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific offset draws,
/// including draws that must be rejected and repeated.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
    requested_ranges: Vec<(u32, u32)>,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            requested_ranges: Vec::new(),
        }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }

    /// The `(min, max)` bounds of every draw, in call order.
    #[must_use]
    pub fn requested_ranges(&self) -> &[(u32, u32)] {
        &self.requested_ranges
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        self.requested_ranges.push((min, max));
        val
    }
}
