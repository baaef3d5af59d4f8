//! Injectable random sources.
//!
//! The raffle depends on a single primitive: "draw a uniformly distributed
//! integer in `[0, n)`". `RandomSource` is that primitive; everything else in
//! the engine is deterministic given the sequence of draws.
//!
//! Implementations:
//! - `SeededSource`: ChaCha20 with an explicit 32-byte seed. Reproducible.
//! - `EntropySource`: operating-system CSPRNG. Not seed-controllable.
//! - `ScriptedSource`: replays a recorded list of draws (tests, audit replay).
//!
//! Bit-exact reproducibility of a seeded raffle requires the same generator
//! (ChaCha20 from `rand_chacha` 0.3), the same seed mapping, and the same
//! rejection-sampling rule below. Other generators only preserve the
//! structural properties of the output.

use alloc::vec::Vec;

use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

/// A uniform integer source.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. Returns `None` if `n == 0`.
    fn gen_index(&mut self, n: usize) -> Option<usize>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn gen_index(&mut self, n: usize) -> Option<usize> {
        (**self).gen_index(n)
    }
}

/// Unbiased integer in [0, n) using rejection sampling with the standard
/// "threshold" trick. Returns `None` if `n == 0`.
///
/// Let `threshold = 2^64 mod n` (computed via `wrapping_neg() % n`).
/// Accept `x` if `x >= threshold`; then `x % n` is uniformly distributed.
#[inline]
pub fn gen_below<R: RngCore + ?Sized>(rng: &mut R, n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    let threshold = n.wrapping_neg() % n;
    loop {
        let x = rng.next_u64();
        if x >= threshold {
            return Some(x % n);
        }
    }
}

/// Deterministic source for reproducible raffles.
///
/// Internally uses ChaCha20 with an explicit 32-byte seed. `from_seed_u64`
/// places `seed.to_le_bytes()` in the first 8 bytes; the rest are zero.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha20Rng,
    words_consumed: u128,
}

impl SeededSource {
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self::from_seed_bytes(seed32)
    }

    #[inline]
    pub fn from_seed_bytes(seed: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
            words_consumed: 0,
        }
    }

    /// Total number of 64-bit words drawn so far, rejected draws included.
    #[inline]
    pub fn words_consumed(&self) -> u128 {
        self.words_consumed
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn gen_index(&mut self, n: usize) -> Option<usize> {
        gen_below(self, n as u64).map(|v| v as usize)
    }
}

/// High-entropy default: every draw comes straight from the OS CSPRNG.
///
/// Holds no state, so constructing one per raffle is free and no entropy
/// source is ever shared between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl EntropySource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for EntropySource {
    #[inline]
    fn gen_index(&mut self, n: usize) -> Option<usize> {
        gen_below(&mut OsRng, n as u64).map(|v| v as usize)
    }
}

/// Replays a fixed list of draws. Each recorded value is reduced modulo the
/// requested bound, so a draw recorded against one hat size stays in range.
/// Once the script is exhausted every further draw is `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self { draws: draws.into(), pos: 0 }
    }

    /// Number of draws served so far.
    pub fn served(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedSource {
    fn gen_index(&mut self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        let raw = self.draws.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        Some(raw % n)
    }
}
