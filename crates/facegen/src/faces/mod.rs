//! Multi-face planar subdivisions: disjoint faces with optional holes.
//!
//! Purpose
//! - Produce a planar straight-line graph as three cross-referencing artifacts
//!   (points, segments, regions) for point-location and DCEL exercises.
//!
//! Pipeline
//! - `layout` places face centers on a jittered grid.
//! - `polygon` builds star-shaped rings and mints vertex ids.
//! - `assemble` builds each face (outer ring, maybe one hole) and registers
//!   its boundary edges in the `edges` registry.
//! - `serialize` renders the finished `GenContext`.
//!
//! Guarantees
//! - Vertex ids are never shared between faces; segments are unique as
//!   unordered pairs and keep the orientation of their first registration.
//! - Fixed seed + fixed params ⇒ byte-identical artifacts.
//! - Holes are placed near the face center with a smaller radius, but
//!   containment inside the outer ring is not verified.

mod assemble;
mod context;
mod edges;
mod layout;
mod polygon;
mod serialize;
mod types;

pub use assemble::{
    assemble_face, generate, generate_with_rng, Generated, HOLE_CENTER_JITTER, HOLE_RADIUS_FRAC,
    MIN_HOLE_RADIUS,
};
pub use context::{GenContext, RunSummary};
pub use edges::EdgeRegistry;
pub use layout::layout_centers;
pub use polygon::{build_polygon, ANGLE_JITTER_FRAC, COORD_DIGITS, MIN_RADIUS, RADIUS_SIGMA_FRAC};
pub use serialize::{
    Artifacts, PointsText, RegionsText, SegmentsText, POINTS_FILE, REGIONS_FILE, SEGMENTS_FILE,
};
pub use types::{ring_edges, Face, FaceGenParams, FaceId, Point, Segment, VertexId};
