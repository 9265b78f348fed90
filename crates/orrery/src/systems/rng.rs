//! xorshift64 generator for twinkle parameters and body tilts.

/// Seedable xorshift64 stream.
/// Same seed, same sequence: scenes built from the same config are identical.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// A zero seed would lock xorshift at zero forever, so it maps to 1.
    pub fn new(seed: u64) -> Self {
        Rng {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, so 1.0 is never produced.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in [min, min + span).
    pub fn range_f32(&mut self, min: f32, span: f32) -> f32 {
        min + self.next_f32() * span
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_f32() >= 0.5
    }
}
