//! Incremental saturation bookkeeping for DSATUR vertex selection.

use bitvec::prelude::*;

use super::adjacency::AdjacencyModel;
use super::types::{Color, Vertex};

/// Per-vertex record of the colors currently held by its neighbors.
///
/// `neighbor_colors[v]` has one bit per color. `per_color[v][c]` counts how
/// many neighbors of `v` hold `c`, so the bit can be cleared exactly when the
/// last such neighbor is uncolored. `distinct[v]` is the derived saturation
/// degree.
///
/// [`retract_color`](Self::retract_color) is the exact inverse of
/// [`apply_color`](Self::apply_color) when undone in LIFO order, which the
/// search guarantees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaturationState {
    neighbor_colors: Vec<BitVec>,
    per_color: Vec<Vec<usize>>,
    distinct: Vec<usize>,
}

impl SaturationState {
    /// All-zero state for `n` vertices and at most `color_bound` colors.
    pub fn new(n: usize, color_bound: usize) -> Self {
        Self {
            neighbor_colors: (0..n).map(|_| bitvec![0; color_bound]).collect(),
            per_color: vec![vec![0; color_bound]; n],
            distinct: vec![0; n],
        }
    }

    /// Saturation degree of `v`: distinct colors among its neighbors.
    #[inline]
    pub fn saturation(&self, v: Vertex) -> usize {
        self.distinct[v]
    }

    /// Record that `v` took color `c`: update every true neighbor's view.
    pub fn apply_color(&mut self, adj: &AdjacencyModel, v: Vertex, c: Color) {
        for u in adj.neighbors_of(v) {
            if !self.neighbor_colors[u][c] {
                self.neighbor_colors[u].set(c, true);
                self.distinct[u] += 1;
            }
            self.per_color[u][c] += 1;
        }
    }

    /// Record that `v` gave up color `c`.
    pub fn retract_color(&mut self, adj: &AdjacencyModel, v: Vertex, c: Color) {
        for u in adj.neighbors_of(v) {
            self.per_color[u][c] -= 1;
            if self.per_color[u][c] == 0 {
                self.neighbor_colors[u].set(c, false);
                self.distinct[u] -= 1;
            }
        }
    }
}
