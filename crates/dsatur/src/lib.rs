//! Vertex coloring of undirected graphs.
//!
//! The crate centers on one algorithm: the DSATUR vertex ordering combined
//! with a stack-based branch-and-bound search over partial colorings, backed
//! by bit-vector adjacency and conflict tests. Around it sit the pieces a
//! caller needs to feed it: id normalization onto the contiguous `0..n`
//! vertex space the engine requires, and a deterministic random-instance
//! generator for tests and benches.
//!
//! The engine assumes its precondition (edge endpoints form exactly `0..n`)
//! is already met and does not validate it; run [`normalize::normalize_edges`]
//! first when ids come from the outside world. Vertices that appear in no
//! edge cannot be represented at all, since the vertex set is derived from
//! the edge list.

pub mod coloring;
pub mod gen;
pub mod normalize;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coloring::{
        color_graph, search, AdjacencyModel, Color, Coloring, Mode, ModeParseError,
        SaturationState, SearchCfg, Vertex,
    };
    pub use crate::gen::{draw_gnp, GnpCfg, ReplayToken};
    pub use crate::normalize::normalize_edges;
}
