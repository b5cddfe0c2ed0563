//! Bit-matrix adjacency built once from the edge list.

use std::collections::BTreeSet;

use bitvec::prelude::*;

use super::types::Vertex;

/// Immutable adjacency derived from the edge list.
///
/// Row `v` carries one bit per vertex. By construction it also carries `v`'s
/// own bit; [`AdjacencyModel::neighbors_of`] skips it, while the engine's
/// color-compatibility intersection does not (the vertex under test is never
/// a member of the group being intersected, so the bit cannot match).
///
/// Precondition: edge endpoints form exactly the contiguous space `0..n`.
/// The model does not check this; ids with gaps index out of range. Vertices
/// that appear in no edge cannot be represented.
#[derive(Clone, Debug)]
pub struct AdjacencyModel {
    /// One neighbor row per vertex, own bit included.
    pub rows: Vec<BitVec>,
    /// Static incidence count per vertex, one per edge-list occurrence.
    pub degrees: Vec<usize>,
}

impl AdjacencyModel {
    /// Derive rows and static neighbor counts from an undirected edge list.
    pub fn from_edges(edges: &[(Vertex, Vertex)]) -> Self {
        let n = edges
            .iter()
            .flat_map(|&(u, v)| [u, v])
            .collect::<BTreeSet<_>>()
            .len();

        let mut rows: Vec<BitVec> = (0..n)
            .map(|v| {
                let mut row = bitvec![0; n];
                row.set(v, true);
                row
            })
            .collect();
        let mut degrees = vec![0usize; n];

        for &(u, v) in edges {
            rows[u].set(v, true);
            rows[v].set(u, true);
            degrees[u] += 1;
            degrees[v] += 1;
        }

        Self { rows, degrees }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Lazy, restartable scan of `v`'s true neighbors (own bit excluded).
    #[inline]
    pub fn neighbors_of(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.rows[v].iter_ones().filter(move |&u| u != v)
    }
}
