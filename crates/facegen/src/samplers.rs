//! Single-shot samplers for the other exercise inputs.
//!
//! Each sampler draws from a caller-supplied RNG and returns plain data;
//! `render_*` turns it into the line format the matching solver reads.
//! - half-planes: `a b c` per line, meaning `a x + b y + c <= 0`.
//! - LP: objective line, blank line, then `a_1 .. a_d b` rows (`A x <= b`).
//! - star-shaped polygon and y-monotone polygon: `x y` per vertex, in boundary order.

use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::rng::{round_to, uniform};

/// Coefficients below this magnitude count as zero when rejecting degenerate lines.
const ZERO_NORMAL_EPS: f64 = 1e-9;

/// Random half-planes `a x + b y + c <= 0` with coefficients in `[-range, range]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalfPlaneParams {
    pub count: usize,
    pub range: f64,
}

impl Default for HalfPlaneParams {
    fn default() -> Self {
        Self {
            count: 5,
            range: 10.0,
        }
    }
}

/// Half-plane `a x + b y + c <= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

pub fn sample_halfplanes<R: Rng>(
    params: &HalfPlaneParams,
    rng: &mut R,
) -> Result<Vec<HalfPlane>, GenError> {
    // `uniform` spans 2 * range, which must stay finite; a range at or below
    // the zero threshold could never yield a usable normal.
    if !(params.range > ZERO_NORMAL_EPS && (2.0 * params.range).is_finite()) {
        return Err(GenError::invalid(format!(
            "range must lie in ({ZERO_NORMAL_EPS:e}, f64::MAX / 2], got {}",
            params.range
        )));
    }
    let r = params.range;
    let planes = (0..params.count)
        .map(|_| {
            let (a, b) = loop {
                let a = uniform(rng, -r, r);
                let b = uniform(rng, -r, r);
                if a.abs() > ZERO_NORMAL_EPS || b.abs() > ZERO_NORMAL_EPS {
                    break (a, b);
                }
            };
            let c = uniform(rng, -r, r);
            HalfPlane { a, b, c }
        })
        .collect();
    Ok(planes)
}

pub fn render_halfplanes(planes: &[HalfPlane]) -> String {
    planes
        .iter()
        .map(|h| format!("{} {} {}\n", h.a, h.b, h.c))
        .collect()
}

/// Random LP `min cᵀx  s.t.  A x <= b` with `b > 0`, so the origin is always feasible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LpParams {
    pub dims: usize,
    pub constraints: usize,
}

impl Default for LpParams {
    fn default() -> Self {
        Self {
            dims: 2,
            constraints: 15,
        }
    }
}

const LP_COEFF_RANGE: f64 = 10.0;
const LP_RHS_MIN: f64 = 1.0;
const LP_RHS_MAX: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LpRow {
    pub a: Vec<f64>,
    pub b: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LpInstance {
    pub objective: Vec<f64>,
    pub rows: Vec<LpRow>,
}

pub fn sample_lp<R: Rng>(params: &LpParams, rng: &mut R) -> Result<LpInstance, GenError> {
    if params.dims == 0 {
        return Err(GenError::invalid("dims must be >= 1"));
    }
    let coeffs = |rng: &mut R| -> Vec<f64> {
        (0..params.dims)
            .map(|_| uniform(rng, -LP_COEFF_RANGE, LP_COEFF_RANGE))
            .collect()
    };
    let objective = coeffs(&mut *rng);
    let rows = (0..params.constraints)
        .map(|_| {
            let a = coeffs(&mut *rng);
            let b = uniform(rng, LP_RHS_MIN, LP_RHS_MAX);
            LpRow { a, b }
        })
        .collect();
    Ok(LpInstance { objective, rows })
}

/// The dimension is implied by the length of the objective line.
pub fn render_lp(lp: &LpInstance) -> String {
    let fmt_row = |xs: &[f64]| {
        xs.iter()
            .map(|x| format!("{x:.4}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let mut out = fmt_row(&lp.objective);
    out.push_str("\n\n");
    for row in &lp.rows {
        out.push_str(&fmt_row(&row.a));
        out.push_str(&format!(" {:.4}\n", row.b));
    }
    out
}

/// Star-shaped polygon around the origin: sorted uniform angles, uniform radii.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarPolygonParams {
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for StarPolygonParams {
    fn default() -> Self {
        Self {
            min_vertices: 4,
            max_vertices: 10,
            min_radius: 1.0,
            max_radius: 10.0,
        }
    }
}

/// Star-polygon coordinates keep two fractional digits.
const STAR_DIGITS: i32 = 2;
/// Y-monotone coordinates keep three fractional digits.
const MONOTONE_DIGITS: i32 = 3;

pub fn sample_star_polygon<R: Rng>(
    params: &StarPolygonParams,
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>, GenError> {
    if params.min_vertices < 3 || params.max_vertices < params.min_vertices {
        return Err(GenError::invalid("need 3 <= min_vertices <= max_vertices"));
    }
    if !(params.min_radius > 0.0 && params.min_radius <= params.max_radius)
        || !params.max_radius.is_finite()
    {
        return Err(GenError::invalid("need 0 < min_radius <= max_radius < inf"));
    }
    let n = rng.gen_range(params.min_vertices..=params.max_vertices);
    let mut angles: Vec<f64> = (0..n)
        .map(|_| rng.gen::<f64>() * std::f64::consts::TAU)
        .collect();
    angles.sort_by(f64::total_cmp);
    let radii: Vec<f64> = (0..n)
        .map(|_| uniform(rng, params.min_radius, params.max_radius))
        .collect();
    Ok(angles
        .into_iter()
        .zip(radii)
        .map(|(th, r)| {
            Vector2::new(
                round_to(r * th.cos(), STAR_DIGITS),
                round_to(r * th.sin(), STAR_DIGITS),
            )
        })
        .collect())
}

/// Y-monotone polygon from `n` uniform points in `[0, spread]²`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonotoneParams {
    pub vertices: usize,
    pub spread: f64,
}

impl Default for MonotoneParams {
    fn default() -> Self {
        Self {
            vertices: 8,
            spread: 10.0,
        }
    }
}

/// Points sorted by `(y, x)`; the first `n / 2` form the left chain (bottom to
/// top), the rest the right chain (top to bottom, equal heights left to right).
pub fn sample_monotone_polygon<R: Rng>(
    params: &MonotoneParams,
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>, GenError> {
    if params.vertices < 3 {
        return Err(GenError::precondition(format!(
            "y-monotone polygon needs at least 3 vertices, got {}",
            params.vertices
        )));
    }
    if !(params.spread.is_finite() && params.spread > 0.0) {
        return Err(GenError::invalid("spread must be finite and > 0"));
    }
    let mut pts: Vec<Vector2<f64>> = (0..params.vertices)
        .map(|_| {
            let x = uniform(rng, 0.0, params.spread);
            let y = uniform(rng, 0.0, params.spread);
            Vector2::new(x, y)
        })
        .collect();
    pts.sort_by(|p, q| p.y.total_cmp(&q.y).then(p.x.total_cmp(&q.x)));
    Ok(monotone_chains(pts)
        .into_iter()
        .map(|p| Vector2::new(round_to(p.x, MONOTONE_DIGITS), round_to(p.y, MONOTONE_DIGITS)))
        .collect())
}

/// Split `(y, x)`-sorted points into the left chain (first `n / 2`, ascending)
/// and the right chain (descending `y`; the stable sort keeps ties x-ascending).
fn monotone_chains(mut pts: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut right = pts.split_off(pts.len() / 2);
    right.sort_by(|p, q| q.y.total_cmp(&p.y));
    pts.extend(right);
    pts
}

pub fn render_points(pts: &[Vector2<f64>]) -> String {
    pts.iter().map(|p| format!("{} {}\n", p.x, p.y)).collect()
}
