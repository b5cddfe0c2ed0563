//! Id normalization: map arbitrary vertex labels onto the contiguous `0..n`
//! space the coloring engine requires.
//!
//! The engine derives its vertex set from edge endpoints and indexes arrays
//! by id, so callers with sparse or non-numeric labels run this step first
//! and use the returned table to translate results back.

use std::collections::HashMap;
use std::hash::Hash;

use crate::coloring::Vertex;

/// Rewrite `edges` onto contiguous ids assigned in first-appearance order.
///
/// Returns the rewritten edge list and the label table: `labels[id]` is the
/// original label of normalized vertex `id`.
pub fn normalize_edges<L>(edges: &[(L, L)]) -> (Vec<(Vertex, Vertex)>, Vec<L>)
where
    L: Clone + Eq + Hash,
{
    let mut ids: HashMap<L, Vertex> = HashMap::new();
    let mut labels: Vec<L> = Vec::new();
    let mut out = Vec::with_capacity(edges.len());

    for (u, v) in edges {
        let mut id_of = |label: &L| -> Vertex {
            if let Some(&id) = ids.get(label) {
                return id;
            }
            let id = labels.len();
            ids.insert(label.clone(), id);
            labels.push(label.clone());
            id
        };
        let a = id_of(u);
        let b = id_of(v);
        out.push((a, b));
    }
    (out, labels)
}
