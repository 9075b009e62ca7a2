//! Simple polygons around a center by bounded angular jitter.
//!
//! Model
//! - Split [0, 2π) into `n` equal sectors of width Δ; sector `k` picks the angle
//!   `kΔ + u Δ` with `u ∈ [-0.3, 0.3]`. Since |uΔ| < Δ/2, neighbouring angles can
//!   never swap, so the angle-sorted ring is star-shaped around the center and
//!   therefore simple.
//! - Radii are `max(0.5, N(r, (0.2 r)²))`; coordinates are rounded to 6 digits.

use rand::Rng;

use super::context::GenContext;
use super::types::{Point, VertexId};
use crate::error::GenError;
use crate::rng::{gaussian, round_to, uniform};

/// Angular jitter as a fraction of the sector width.
pub const ANGLE_JITTER_FRAC: f64 = 0.3;
/// Radial standard deviation relative to the target radius.
pub const RADIUS_SIGMA_FRAC: f64 = 0.2;
/// Lower clamp on sampled radii, keeps vertices away from the center.
pub const MIN_RADIUS: f64 = 0.5;
/// Fractional digits kept in generated coordinates.
pub const COORD_DIGITS: i32 = 6;

/// Build an `n`-gon around `center` and register its vertices in `ctx`.
///
/// Returns the new vertex ids in counter-clockwise (ascending angle) order.
/// `n < 3` is rejected before any id is consumed.
pub fn build_polygon<R: Rng>(
    ctx: &mut GenContext,
    rng: &mut R,
    center: Point,
    n: usize,
    radius: f64,
) -> Result<Vec<VertexId>, GenError> {
    if n < 3 {
        return Err(GenError::precondition(format!(
            "polygon needs at least 3 vertices, got {n}"
        )));
    }
    let delta = std::f64::consts::TAU / n as f64;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = uniform(rng, -ANGLE_JITTER_FRAC, ANGLE_JITTER_FRAC) * delta;
            k as f64 * delta + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    let ids = angles
        .into_iter()
        .map(|th| {
            let r = gaussian(rng, radius, radius * RADIUS_SIGMA_FRAC).max(MIN_RADIUS);
            let p = Point::new(
                round_to(center.x + r * th.cos(), COORD_DIGITS),
                round_to(center.y + r * th.sin(), COORD_DIGITS),
            );
            ctx.mint_vertex(p)
        })
        .collect();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn rejects_degenerate_counts() {
        let mut ctx = GenContext::new();
        let mut rng = seeded(0);
        for n in [0, 1, 2] {
            let err = build_polygon(&mut ctx, &mut rng, Point::zeros(), n, 5.0);
            assert!(matches!(err, Err(GenError::Precondition { .. })));
        }
        assert_eq!(ctx.vertex_count(), 0);
    }

    #[test]
    fn mints_consecutive_ids() {
        let mut ctx = GenContext::new();
        let mut rng = seeded(1);
        let a = build_polygon(&mut ctx, &mut rng, Point::zeros(), 5, 5.0).unwrap();
        let b = build_polygon(&mut ctx, &mut rng, Point::new(50.0, 0.0), 3, 5.0).unwrap();
        let ids: Vec<u32> = a.iter().chain(&b).map(|v| v.0).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn radii_respect_clamp_and_rounding() {
        let mut ctx = GenContext::new();
        let mut rng = seeded(2);
        let c = Point::new(10.0, -4.0);
        // Tiny target radius: most draws fall below the clamp.
        let ring = build_polygon(&mut ctx, &mut rng, c, 12, 0.1).unwrap();
        for id in ring {
            let p = ctx.point(id).unwrap();
            assert!((p - c).norm() >= MIN_RADIUS - 1e-5);
            for x in [p.x, p.y] {
                let scaled = x * 1e6;
                assert!((scaled - scaled.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn ring_is_counter_clockwise() {
        let mut ctx = GenContext::new();
        let mut rng = seeded(3);
        let ring = build_polygon(&mut ctx, &mut rng, Point::zeros(), 7, 4.0).unwrap();
        let pts: Vec<Point> = ring.iter().map(|&v| ctx.point(v).unwrap()).collect();
        let twice_area: f64 = (0..pts.len())
            .map(|i| {
                let p = pts[i];
                let q = pts[(i + 1) % pts.len()];
                p.x * q.y - q.x * p.y
            })
            .sum();
        assert!(twice_area > 0.0);
    }
}
