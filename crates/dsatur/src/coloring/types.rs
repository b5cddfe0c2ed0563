//! Data types for the coloring search.
//!
//! Kept small and explicit to make `search` and `driver` easy to read.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Vertex id in the contiguous `0..n` space the engine requires.
pub type Vertex = usize;

/// Color index; colors are produced on demand starting from zero.
pub type Color = usize;

/// A complete proper coloring: the number of distinct colors used and the
/// per-vertex assignment, indexed by vertex id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    pub color_count: usize,
    pub assignment: Vec<Color>,
}

impl Coloring {
    /// True iff no edge joins two vertices of the same color.
    pub fn is_proper(&self, edges: &[(Vertex, Vertex)]) -> bool {
        edges
            .iter()
            .all(|&(u, v)| self.assignment[u] != self.assignment[v])
    }

    /// Number of distinct colors actually present in the assignment.
    pub fn distinct_colors(&self) -> usize {
        let mut seen = vec![false; self.assignment.len()];
        let mut count = 0;
        for &c in &self.assignment {
            if !seen[c] {
                seen[c] = true;
                count += 1;
            }
        }
        count
    }
}

/// Configuration for one engine run.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Initial upper bound on colors; also sizes the color-group table and
    /// the per-vertex neighbor-color sets.
    pub initial_bound: usize,
    /// Stop as soon as the incumbent's color count reaches this value.
    pub target: usize,
    /// Wall-clock deadline sampled once per loop iteration. `None` disables
    /// the time check entirely.
    pub deadline: Option<Instant>,
    /// Stop at the first complete coloring instead of searching on for
    /// strictly better ones.
    pub accept_first: bool,
}

/// One backtracking stack entry: the vertex being decided, the color
/// currently tried (none on first visit), and the number of distinct colors
/// committed at this depth.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub vertex: Vertex,
    pub color: Option<Color>,
    pub colors_used: usize,
}

/// Run mode for [`color_graph`](super::color_graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One greedy DSATUR pass; the first complete coloring wins.
    Heuristic,
    /// Greedy pass to seed an upper bound, then branch-and-bound refinement.
    ///
    /// `improve: None` searches to the proven optimum; `Some(k)` stops once
    /// the seeded bound has been improved by `k` colors.
    ExactWithBound { improve: Option<usize> },
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Mode::Heuristic),
            "bnb" => Ok(Mode::ExactWithBound { improve: None }),
            other => Err(ModeParseError(other.to_string())),
        }
    }
}

/// Rejected mode selector; surfaced before any computation starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeParseError(pub String);

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mode {:?}; available modes are: greedy, bnb (branch-and-bound)",
            self.0
        )
    }
}

impl std::error::Error for ModeParseError {}
