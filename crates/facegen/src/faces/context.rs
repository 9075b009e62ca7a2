//! Per-run generation state.
//!
//! Replaces process-wide accumulators with one explicit object: builders take
//! `&mut GenContext`, tests inspect it afterwards, nothing outlives the run.

use std::collections::BTreeMap;

use super::edges::EdgeRegistry;
use super::types::{ring_edges, Face, Point, VertexId};

/// Counts reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub faces: usize,
    pub vertices: usize,
    pub segments: usize,
    pub faces_with_holes: usize,
}

/// Append-only accumulators of a single generation run.
#[derive(Clone, Debug)]
pub struct GenContext {
    next_vid: u32,
    points: BTreeMap<VertexId, Point>,
    edges: EdgeRegistry,
    faces: Vec<Face>,
}

impl Default for GenContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GenContext {
    pub fn new() -> Self {
        Self {
            next_vid: 1,
            points: BTreeMap::new(),
            edges: EdgeRegistry::default(),
            faces: Vec::new(),
        }
    }

    /// Register `p` under a fresh id.
    pub fn mint_vertex(&mut self, p: Point) -> VertexId {
        let id = VertexId(self.next_vid);
        self.next_vid += 1;
        self.points.insert(id, p);
        id
    }

    /// Register every edge of the closed ring; returns how many were new.
    pub fn connect_ring(&mut self, ring: &[VertexId]) -> usize {
        ring_edges(ring)
            .filter(|&(u, v)| self.edges.insert(u, v))
            .count()
    }

    pub(crate) fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Vertices in ascending id order.
    pub fn points(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.points.iter().map(|(&id, &p)| (id, p))
    }

    #[inline]
    pub fn point(&self, id: VertexId) -> Option<Point> {
        self.points.get(&id).copied()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn edges(&self) -> &EdgeRegistry {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            faces: self.faces.len(),
            vertices: self.points.len(),
            segments: self.edges.len(),
            faces_with_holes: self.faces.iter().filter(|f| f.has_hole()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut ctx = GenContext::new();
        let a = ctx.mint_vertex(vector![0.0, 0.0]);
        let b = ctx.mint_vertex(vector![1.0, 0.0]);
        assert_eq!((a, b), (VertexId(1), VertexId(2)));
        assert_eq!(ctx.point(b), Some(vector![1.0, 0.0]));
        assert_eq!(ctx.point(VertexId(3)), None);
    }

    #[test]
    fn ring_registration_counts_new_edges() {
        let mut ctx = GenContext::new();
        let ring: Vec<_> = (0..4)
            .map(|k| ctx.mint_vertex(vector![k as f64, 0.0]))
            .collect();
        assert_eq!(ctx.connect_ring(&ring), 4);
        let reversed: Vec<_> = ring.iter().rev().copied().collect();
        assert_eq!(ctx.connect_ring(&reversed), 0);
        assert_eq!(ctx.summary().segments, 4);
    }
}
