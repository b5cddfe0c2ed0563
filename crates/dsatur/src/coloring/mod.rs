//! DSATUR coloring: adjacency model, saturation bookkeeping, and the
//! branch-and-bound engine.
//!
//! Purpose
//! - Compute proper vertex colorings of an undirected graph, either as a
//!   single greedy DSATUR pass or as a bounded branch-and-bound refinement
//!   of the greedy upper bound, under an optional shared wall-clock budget.
//!
//! Why this design
//! - Adjacency rows, color groups, and per-vertex neighbor-color sets are all
//!   bit vectors, so conflict tests are word-wide intersections instead of
//!   neighbor scans.
//! - Backtracking runs on an explicit frame stack (at most one frame per
//!   vertex) owned by a single runner value, never recursion and never
//!   closed-over mutable state.
//!
//! Layout
//! - `types.rs` (configuration and results), `adjacency.rs` (model
//!   construction), `saturation.rs` (incremental DSATUR bookkeeping),
//!   `search.rs` (the engine), `driver.rs` (mode composition).

mod adjacency;
mod driver;
mod saturation;
mod search;
mod types;

pub use adjacency::AdjacencyModel;
pub use driver::color_graph;
pub use saturation::SaturationState;
pub use search::search;
pub use types::{Color, Coloring, Mode, ModeParseError, SearchCfg, Vertex};

#[cfg(test)]
mod tests;
