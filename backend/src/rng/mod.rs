//! Deterministic random number generation
//!
//! Uses a 32-bit xorshift generator with a draw counter for auditing.
//! CRITICAL: All randomness in the generator MUST go through this module.

mod xorshift;

pub use xorshift::{DeterministicRng, FALLBACK_STATE};
