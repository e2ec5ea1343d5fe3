//! Addressable seeded draws
//!
//! The whole generator is built on one scalar hash: a seed maps to a value
//! in [0, 1) with no internal state, so any draw can be recomputed from its
//! seed alone. This is what makes classification embarrassingly parallel -
//! there is no stream to advance, only addresses to evaluate.

/// Seed substituted for non-finite inputs (NaN from corrupted data must not
/// propagate into noise or classification).
pub const FALLBACK_SEED: f64 = 0.0;

/// Deterministic scalar draw in [0, 1).
///
/// `frac(sin(seed * 9999) * 10000)` evaluated in IEEE-754 double precision.
/// Total over all finite seeds; non-finite seeds normalize to
/// [`FALLBACK_SEED`].
pub fn seeded_uniform(seed: f64) -> f64 {
    let seed = if seed.is_finite() { seed } else { FALLBACK_SEED };
    let x = (seed * 9999.0).sin() * 10000.0;
    x - x.floor()
}
