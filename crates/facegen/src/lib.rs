//! Randomized geometric test inputs for the weekly computational-geometry exercises.
//!
//! Contents
//! - `faces`: planar subdivisions (disjoint faces, optional holes) emitted as
//!   points / segments / regions artifacts.
//! - `samplers`: half-planes, LP constraint sets, star-shaped and y-monotone polygons.
//!
//! Every generator is deterministic given a seed; unseeded runs draw a seed
//! from OS entropy and report it so the output can be replayed.

pub mod error;
pub mod faces;
pub mod rng;
pub mod samplers;

pub use error::GenError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::faces::{
        generate, Artifacts, Face, FaceGenParams, FaceId, GenContext, Generated, RunSummary,
        Segment, VertexId,
    };
    pub use crate::rng::{resolve_seed, seeded};
    pub use crate::samplers::{
        render_halfplanes, render_lp, render_points, sample_halfplanes, sample_lp,
        sample_monotone_polygon, sample_star_polygon, HalfPlaneParams, LpParams, MonotoneParams,
        StarPolygonParams,
    };
    pub use crate::GenError;
}
