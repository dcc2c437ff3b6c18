//! Random sources for board generation and refill.
//!
//! The engine only ever asks for a uniform value in `[0, 1)`, so any source
//! can be injected: the `SmallRng` wrapper below, a closure in tests, or
//! `Math.random` from the JS side.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A uniform random source over `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// A seedable RNG wrapper for WASM.
///
/// Can be seeded for deterministic replay, or created from system entropy.
pub struct WasmRng {
    inner: SmallRng,
}

impl WasmRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for WasmRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for WasmRng {
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Draw a token kind in `[0, kinds)` as `floor(r * kinds)`.
///
/// Out-of-range draws (1.0, negatives, NaN) are clamped into range.
#[inline]
pub(crate) fn random_kind<R: RandomSource + ?Sized>(rng: &mut R, kinds: usize) -> u8 {
    let scaled = (rng.next_unit() * kinds as f64) as usize;
    scaled.min(kinds - 1) as u8
}
