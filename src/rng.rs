//! Small non-cryptographic PRNG for decorative randomness.
//!
//! Floaters only need "looks random" positions, so a 64-bit LCG is plenty.
//! The seed comes from `crypto.getRandomValues` with the `rng` feature and from
//! `performance.now()` otherwise.

pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn with_seed(seed: u64) -> Self {
        // Avoid the all-zero state producing a short first run.
        Self { state: seed ^ 0x9E37_79B9_7F4A_7C15 }
    }

    /// Seed from the browser.
    pub fn from_entropy() -> Self {
        Self::with_seed(entropy_seed())
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // top 53 bits
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform float in the half-open range `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index in `0..len`; `0` for an empty range.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => crate::platform::now_ms().to_bits(),
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    crate::platform::now_ms().to_bits()
}
