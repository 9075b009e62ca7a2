//! Face assembly and the full multi-face run.

use rand::Rng;

use super::context::GenContext;
use super::layout::layout_centers;
use super::polygon::build_polygon;
use super::types::{Face, FaceGenParams, FaceId, Point};
use crate::error::GenError;
use crate::rng::{resolve_seed, seeded, uniform};

/// Hole radius relative to `radius_mean`.
pub const HOLE_RADIUS_FRAC: f64 = 0.35;
/// Lower bound on the hole radius.
pub const MIN_HOLE_RADIUS: f64 = 0.8;
/// Max per-axis offset of a hole center from its face center.
pub const HOLE_CENTER_JITTER: f64 = 1.0;

/// Outcome of a run: the filled context plus the seed that reproduces it.
#[derive(Clone, Debug)]
pub struct Generated {
    pub seed: u64,
    pub ctx: GenContext,
}

/// Build one face around `center`: outer ring, then maybe one hole.
///
/// The hole is placed near the center with a smaller radius than the outer
/// ring; containment inside the outer ring is not checked. A face whose
/// hole roll succeeds but that is too small for `min_hole` is a precondition
/// error (`FaceGenParams::validate` rules this out for `generate`).
pub fn assemble_face<R: Rng>(
    ctx: &mut GenContext,
    rng: &mut R,
    params: &FaceGenParams,
    id: FaceId,
    center: Point,
) -> Result<Face, GenError> {
    let n_outer = rng.gen_range(params.min_outer..=params.max_outer);
    let outer = build_polygon(ctx, rng, center, n_outer, params.radius_mean)?;
    ctx.connect_ring(&outer);

    let mut inner = Vec::new();
    // Always drawn, even when the face is too small for a hole.
    let roll: f64 = rng.gen();
    if roll < params.hole_probability && n_outer >= 4 {
        let hi = params.max_hole.min(n_outer - 1);
        if params.min_hole > hi {
            return Err(GenError::precondition(format!(
                "face {id} has {n_outer} vertices, too few for a hole of at least {}",
                params.min_hole
            )));
        }
        let n_hole = rng.gen_range(params.min_hole..=hi);
        let hole_center = Point::new(
            center.x + uniform(rng, -HOLE_CENTER_JITTER, HOLE_CENTER_JITTER),
            center.y + uniform(rng, -HOLE_CENTER_JITTER, HOLE_CENTER_JITTER),
        );
        let hole_radius = (params.radius_mean * HOLE_RADIUS_FRAC).max(MIN_HOLE_RADIUS);
        inner = build_polygon(ctx, rng, hole_center, n_hole, hole_radius)?;
        ctx.connect_ring(&inner);
    }
    tracing::debug!(
        face = id.0,
        outer = outer.len(),
        hole = inner.len(),
        "face assembled"
    );
    Ok(Face { id, outer, inner })
}

/// Run the generator with an explicit RNG. Draw order: all centers, then faces in id order.
pub fn generate_with_rng<R: Rng>(
    params: &FaceGenParams,
    rng: &mut R,
) -> Result<GenContext, GenError> {
    params.validate()?;
    let mut ctx = GenContext::new();
    let centers = layout_centers(
        rng,
        params.face_count,
        params.radius_mean,
        params.radius_variation,
    );
    for (fid, center) in (1u32..).zip(centers) {
        let face = assemble_face(&mut ctx, rng, params, FaceId(fid), center)?;
        ctx.push_face(face);
    }
    Ok(ctx)
}

/// Run the generator from `params.seed` (or a fresh seed if unset).
pub fn generate(params: &FaceGenParams) -> Result<Generated, GenError> {
    let seed = resolve_seed(params.seed);
    let mut rng = seeded(seed);
    let ctx = generate_with_rng(params, &mut rng)?;
    tracing::debug!(seed, summary = ?ctx.summary(), "generation finished");
    Ok(Generated { seed, ctx })
}
