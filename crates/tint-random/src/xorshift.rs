//! Xorshift32 — a minimal deterministic PRNG.
//!
//! Same seed, same sequence, on every platform. No external `rand` crate
//! needed.

/// Marsaglia's 32-bit xorshift generator (shift triple 13, 17, 5).
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator. A zero seed would stay zero forever, so it is
    /// replaced by 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random channel value, uniform over 0..=255.
    ///
    /// Takes the top byte; the high bits of xorshift output mix better
    /// than the low ones.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn channel(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}
