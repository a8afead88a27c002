//! Small deterministic random source for the sparkle effects
//!
//! The driver owns the generator and passes it to `render` by mutable
//! reference, so two channels seeded the same way produce identical frames.

/// Xorshift32 generator tuned for per-frame 8-bit draws
#[derive(Debug, Clone)]
pub struct Rng8 {
    state: u32,
}

impl Rng8 {
    /// Create a generator from `seed`; a zero seed is remapped since
    /// xorshift has no escape from the all-zero state
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next random byte
    #[allow(clippy::cast_possible_truncation)]
    pub fn random8(&mut self) -> u8 {
        (self.next() >> 24) as u8
    }

    /// Next random 16-bit value
    #[allow(clippy::cast_possible_truncation)]
    pub fn random16(&mut self) -> u16 {
        (self.next() >> 16) as u16
    }

    /// Random value in `[0, bound)`; returns 0 for a zero bound
    pub fn below(&mut self, bound: u16) -> u16 {
        if bound == 0 {
            return 0;
        }
        self.random16() % bound
    }

    /// Random byte in `[low, high]`
    #[allow(clippy::cast_possible_truncation)]
    pub fn range8(&mut self, low: u8, high: u8) -> u8 {
        let span = u16::from(high - low) + 1;
        low + self.below(span) as u8
    }

    /// Bernoulli draw: true with probability `threshold / 256`
    pub fn chance(&mut self, threshold: u8) -> bool {
        self.random8() < threshold
    }
}
