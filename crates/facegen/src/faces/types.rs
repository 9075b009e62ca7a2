//! Data types for the face generator: ids, segments, faces, parameters.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Global vertex identifier (starts at 1, never reused within a run).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

/// Face identifier (starts at 1, in layout order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub u32);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected segment, stored in the orientation of its first registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub u: VertexId,
    pub v: VertexId,
}

impl Segment {
    /// Order-independent key used for deduplication.
    #[inline]
    pub fn key(&self) -> (VertexId, VertexId) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

/// One face: closed outer ring plus an optional hole ring (empty if none).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub id: FaceId,
    pub outer: Vec<VertexId>,
    pub inner: Vec<VertexId>,
}

impl Face {
    #[inline]
    pub fn has_hole(&self) -> bool {
        !self.inner.is_empty()
    }
}

/// Consecutive pairs of a closed ring, including the wrap-around pair.
pub fn ring_edges(ring: &[VertexId]) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

pub type Point = Vector2<f64>;

/// Parameters of a multi-face run.
///
/// Defaults match the reference generator: four faces of 3..=8 vertices,
/// 30% hole probability, holes of 3..=6 vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceGenParams {
    pub face_count: u32,
    pub min_outer: usize,
    pub max_outer: usize,
    pub hole_probability: f64,
    pub min_hole: usize,
    pub max_hole: usize,
    /// Recorded with the run; face placement is driven by the radii only.
    pub spread: f64,
    pub radius_mean: f64,
    pub radius_variation: f64,
    pub seed: Option<u64>,
}

impl Default for FaceGenParams {
    fn default() -> Self {
        Self {
            face_count: 4,
            min_outer: 3,
            max_outer: 8,
            hole_probability: 0.3,
            min_hole: 3,
            max_hole: 6,
            spread: 100.0,
            radius_mean: 6.0,
            radius_variation: 3.0,
            seed: None,
        }
    }
}

impl FaceGenParams {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.min_outer < 3 {
            return Err(GenError::invalid("min_outer must be >= 3"));
        }
        if self.max_outer < self.min_outer {
            return Err(GenError::invalid("min_outer <= max_outer required"));
        }
        if !(0.0..=1.0).contains(&self.hole_probability) {
            return Err(GenError::invalid("hole_probability must lie in [0, 1]"));
        }
        if self.min_hole < 3 {
            return Err(GenError::invalid("min_hole must be >= 3"));
        }
        if self.max_hole < self.min_hole {
            return Err(GenError::invalid("min_hole <= max_hole required"));
        }
        if !(self.radius_mean.is_finite() && self.radius_mean > 0.0) {
            return Err(GenError::invalid("radius_mean must be finite and > 0"));
        }
        if !(self.radius_variation.is_finite() && self.radius_variation >= 0.0) {
            return Err(GenError::invalid("radius_variation must be finite and >= 0"));
        }
        if !(self.spread.is_finite() && self.spread > 0.0) {
            return Err(GenError::invalid("spread must be finite and > 0"));
        }
        // Faces below 4 vertices never roll a hole; every other face must be
        // able to hold one, down to the smallest such face.
        let smallest_holed = self.min_outer.max(4);
        let hole_hi = self.max_hole.min(smallest_holed - 1);
        if self.hole_probability > 0.0 && self.max_outer >= 4 && self.min_hole > hole_hi {
            return Err(GenError::invalid(format!(
                "a {smallest_holed}-vertex face cannot hold a hole: \
                 min_hole={} exceeds min(max_hole, {smallest_holed} - 1)={hole_hi}",
                self.min_hole
            )));
        }
        Ok(())
    }
}
