//! Seeding and the few scalar distributions the generators draw from.
//!
//! All draws go through a single `StdRng` per run, in a fixed order, so a seed
//! fully determines the output of a generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed actually used for a run: the requested one, or a fresh one from OS entropy.
///
/// Callers record the returned value so an unseeded run can be replayed later.
pub fn resolve_seed(requested: Option<u64>) -> u64 {
    requested.unwrap_or_else(rand::random)
}

#[inline]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform in `[lo, hi)`; degenerate ranges collapse to `lo` without consuming a draw.
#[inline]
pub(crate) fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    lo + (hi - lo) * rng.gen::<f64>()
}

/// Normal draw `N(mean, std_dev²)` via Box–Muller (one of the pair is used).
pub(crate) fn gaussian<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the log argument in (0, 1].
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + std_dev * z
}

/// Round half away from zero to `digits` fractional digits.
#[inline]
pub(crate) fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let r = (x * scale).round() / scale;
    // Normalize -0.0 so it never prints as "-0".
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
