//! Composition of heuristic and exact runs under one shared time budget.

use std::time::{Duration, Instant};

use super::adjacency::AdjacencyModel;
use super::search::search;
use super::types::{Coloring, Mode, SearchCfg, Vertex};

/// Color the graph described by `edges`.
///
/// Endpoints must form the contiguous id space `0..n`; see
/// [`crate::normalize`] for the preprocessing step that establishes this.
///
/// [`Mode::Heuristic`] runs one greedy DSATUR pass. [`Mode::ExactWithBound`]
/// first runs the same pass to seed an upper bound `U`, then refines it by
/// branch-and-bound down to the proven optimum (or until the bound has
/// improved by `improve` colors); when the refinement records nothing before
/// time runs out, the seeded coloring is returned instead. The wall-clock
/// budget is computed once and shared across both runs; it is not restarted
/// between them.
///
/// Returns `None` only when the budget expires before any complete coloring
/// is produced.
pub fn color_graph(
    edges: &[(Vertex, Vertex)],
    mode: Mode,
    timeout: Option<Duration>,
) -> Option<Coloring> {
    let deadline = timeout.map(|t| Instant::now() + t);
    let adj = AdjacencyModel::from_edges(edges);

    let greedy = search(
        &adj,
        SearchCfg {
            initial_bound: adj.vertex_count(),
            target: 1,
            deadline,
            accept_first: true,
        },
    );

    let improve = match mode {
        Mode::Heuristic => return greedy,
        Mode::ExactWithBound { improve } => improve,
    };

    let upper = greedy.as_ref()?.color_count;
    let refined = search(
        &adj,
        SearchCfg {
            initial_bound: upper,
            // A target of 0 is unreachable and simply lets the search run to
            // exhaustion, same as asking for the proven optimum.
            target: improve.map_or(1, |by| upper.saturating_sub(by)),
            deadline,
            accept_first: false,
        },
    );
    refined.or(greedy)
}
