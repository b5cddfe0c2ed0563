//! Random graph edge lists (G(n, p) with replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic instance sampler for tests and benches.
//!   Draws are parameterizable, reproducible, and land directly on the
//!   contiguous `0..n` vertex space the coloring engine requires.
//!
//! Model
//! - Wire every vertex to its successor first, then include each remaining
//!   unordered pair with probability `edge_prob`. The backbone guarantees the
//!   sample never contains an isolated vertex, which the edge-list-derived
//!   vertex space cannot represent.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coloring::Vertex;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Erdős–Rényi sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GnpCfg {
    pub vertices: usize,
    /// Inclusion probability for each non-backbone pair. Clamped to [0, 1].
    pub edge_prob: f64,
}

impl Default for GnpCfg {
    fn default() -> Self {
        Self {
            vertices: 32,
            edge_prob: 0.5,
        }
    }
}

/// Draw an undirected edge list on the contiguous vertex space `0..n`.
///
/// No self-loops, no parallel edges. For fewer than two vertices there is no
/// representable graph and the list is empty.
pub fn draw_gnp(cfg: GnpCfg, tok: ReplayToken) -> Vec<(Vertex, Vertex)> {
    let n = cfg.vertices;
    if n < 2 {
        return Vec::new();
    }
    let p = cfg.edge_prob.clamp(0.0, 1.0);
    let mut rng = tok.to_std_rng();

    // Path backbone: keeps every vertex representable.
    let mut edges: Vec<(Vertex, Vertex)> = (0..n - 1).map(|v| (v, v + 1)).collect();
    for u in 0..n {
        for v in u + 2..n {
            if rng.gen::<f64>() < p {
                edges.push((u, v));
            }
        }
    }
    edges
}
