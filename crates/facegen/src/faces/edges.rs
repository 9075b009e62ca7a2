//! Append-only registry of undirected segments.

use std::collections::HashSet;

use super::types::{Segment, VertexId};

/// Set-backed segment registry.
///
/// Uniqueness is keyed on the unordered pair; the stored orientation is the
/// argument order of the first successful `insert`. Insertion order fixes the
/// segment ids assigned at serialization.
#[derive(Clone, Debug, Default)]
pub struct EdgeRegistry {
    seen: HashSet<(VertexId, VertexId)>,
    ordered: Vec<Segment>,
}

impl EdgeRegistry {
    /// Register `{u, v}`. Self-loops and already-known pairs are ignored.
    /// Returns whether a new segment was stored.
    pub fn insert(&mut self, u: VertexId, v: VertexId) -> bool {
        if u == v {
            return false;
        }
        let seg = Segment { u, v };
        if !self.seen.insert(seg.key()) {
            return false;
        }
        self.ordered.push(seg);
        true
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.ordered
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
