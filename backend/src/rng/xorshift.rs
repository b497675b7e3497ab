//! xorshift32 random number generator
//!
//! Small, fast, deterministic PRNG suitable for game-tuning draws. It is not
//! of cryptographic quality.
//!
//! # Algorithm
//!
//! Marsaglia's xorshift32 with the (13, 17, 5) shift triple. The state is a
//! single non-zero `u32`; a zero state would lock the generator at zero, so
//! the constructor substitutes [`FALLBACK_STATE`].
//!
//! # Determinism
//!
//! Same seed + same sequence of operations → same outputs, same final state
//! and same [`DeterministicRng::draw_count`]. The draw count is what pipeline
//! checkpoints record, so every operation documents exactly how many raw
//! draws it consumes.

use serde::{Deserialize, Serialize};

/// State substituted when a seed maps to the all-zero state.
pub const FALLBACK_STATE: u32 = 0xA3C5_9AC3;

/// 2^24, the precision of [`DeterministicRng::next_uniform_float`].
const MANTISSA_PRECISION: f32 = 16_777_216.0;

/// Deterministic random source using xorshift32
///
/// # Example
/// ```
/// use portday_core::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let roll = rng.range_int(0, 6); // [0, 6)
/// assert!((0..6).contains(&roll));
/// assert_eq!(rng.draw_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    /// Internal state (never zero)
    state: u32,

    /// Raw 32-bit draws consumed since construction
    draws: u64,
}

impl DeterministicRng {
    /// Create a new random source from an integer seed
    ///
    /// The seed's bit pattern becomes the initial state. Seed `0` maps to
    /// [`FALLBACK_STATE`].
    ///
    /// # Example
    /// ```
    /// use portday_core::rng::{DeterministicRng, FALLBACK_STATE};
    ///
    /// assert_eq!(DeterministicRng::new(0).state(), FALLBACK_STATE);
    /// assert_eq!(DeterministicRng::new(-1).state(), u32::MAX);
    /// ```
    pub fn new(seed: i32) -> Self {
        let bits = seed as u32;
        let state = if bits == 0 { FALLBACK_STATE } else { bits };
        Self { state, draws: 0 }
    }

    /// Advance the state and return the next raw 32-bit value
    ///
    /// Every other operation is built on this one; it is the only place the
    /// draw counter moves.
    pub fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform `f32` in `[0.0, 1.0)`
    ///
    /// Uses the top 24 bits of one raw draw, which an `f32` mantissa holds
    /// exactly. Consumes one draw.
    pub fn next_uniform_float(&mut self) -> f32 {
        let value = self.next_u32() >> 8;
        value as f32 / MANTISSA_PRECISION
    }

    /// Uniform integer in `[min_inclusive, max_exclusive)`
    ///
    /// Returns `min_inclusive` without drawing when the range is empty or
    /// inverted. Otherwise consumes one draw and reduces it modulo the span.
    ///
    /// # Example
    /// ```
    /// use portday_core::DeterministicRng;
    ///
    /// let mut rng = DeterministicRng::new(7);
    /// assert_eq!(rng.range_int(5, 5), 5);
    /// assert_eq!(rng.range_int(9, 2), 9);
    /// assert_eq!(rng.draw_count(), 0);
    /// ```
    pub fn range_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min_inclusive {
            return min_inclusive;
        }

        let span = (i64::from(max_exclusive) - i64::from(min_inclusive)) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min_inclusive) + offset as i64) as i32
    }

    /// Weighted coin flip
    ///
    /// `probability <= 0` is always false and `probability >= 1` always true;
    /// neither boundary consumes a draw. NaN is treated as zero. Anything in
    /// between consumes exactly one draw.
    pub fn chance(&mut self, probability: f32) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.next_uniform_float() < probability
    }

    /// Fisher-Yates shuffle in place
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly drawn index in `[0, i]`. Consumes `len - 1` draws; slices of
    /// length 0 or 1 are left untouched without drawing.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        if items.len() <= 1 {
            return;
        }

        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }

    /// Pick one element uniformly
    ///
    /// Returns `None` without drawing on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index_below(items.len());
        items.get(index)
    }

    /// Total raw draws consumed since construction
    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// Current raw state (for diagnostics)
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Uniform index in `[0, len)`; callers guarantee `len >= 1`.
    fn index_below(&mut self, len: usize) -> usize {
        let upper = i32::try_from(len).unwrap_or(i32::MAX);
        self.range_int(0, upper).max(0) as usize
    }
}
