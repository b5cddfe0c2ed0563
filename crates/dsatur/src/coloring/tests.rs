//! Tests for the coloring module: small structured graphs with known
//! chromatic numbers, undo discipline, determinism, time-budget behavior,
//! and randomized checks over normalized edge lists.

use std::time::Duration;

use proptest::prelude::*;

use super::adjacency::AdjacencyModel;
use super::color_graph;
use super::saturation::SaturationState;
use super::search::{search, SearchRunner};
use super::types::{Coloring, Mode, SearchCfg};
use crate::gen::{draw_gnp, GnpCfg, ReplayToken};
use crate::normalize::normalize_edges;

const TRIANGLE: &[(usize, usize)] = &[(0, 1), (1, 2), (0, 2)];
const PATH4: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 3)];
const STAR4: &[(usize, usize)] = &[(0, 1), (0, 2), (0, 3)];
const K4: &[(usize, usize)] = &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
const K22: &[(usize, usize)] = &[(0, 2), (0, 3), (1, 2), (1, 3)];

fn greedy(edges: &[(usize, usize)]) -> Coloring {
    color_graph(edges, Mode::Heuristic, None).unwrap()
}

fn exact(edges: &[(usize, usize)]) -> Coloring {
    color_graph(edges, Mode::ExactWithBound { improve: None }, None).unwrap()
}

fn assert_proper(coloring: &Coloring, edges: &[(usize, usize)]) {
    assert!(coloring.is_proper(edges));
    assert_eq!(coloring.color_count, coloring.distinct_colors());
}

#[test]
fn adjacency_rows_carry_the_self_bit_but_neighbor_scans_skip_it() {
    let adj = AdjacencyModel::from_edges(PATH4);
    assert_eq!(adj.vertex_count(), 4);
    for v in 0..4 {
        assert!(adj.rows[v][v]);
        assert!(adj.neighbors_of(v).all(|u| u != v));
    }
    assert_eq!(adj.neighbors_of(1).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(adj.degrees, vec![1, 2, 2, 1]);
}

#[test]
fn triangle_needs_three_colors() {
    for coloring in [greedy(TRIANGLE), exact(TRIANGLE)] {
        assert_eq!(coloring.color_count, 3);
        assert_proper(&coloring, TRIANGLE);
    }
}

#[test]
fn path_of_four_is_two_colorable() {
    let coloring = exact(PATH4);
    assert_eq!(coloring.color_count, 2);
    assert_proper(&coloring, PATH4);
}

#[test]
fn star_is_two_colorable() {
    let coloring = exact(STAR4);
    assert_eq!(coloring.color_count, 2);
    assert_proper(&coloring, STAR4);
}

#[test]
fn complete_graph_needs_four_colors_even_greedily() {
    for coloring in [greedy(K4), exact(K4)] {
        assert_eq!(coloring.color_count, 4);
        assert_proper(&coloring, K4);
    }
}

#[test]
fn complete_bipartite_k22_is_two_colorable() {
    let coloring = exact(K22);
    assert_eq!(coloring.color_count, 2);
    assert_proper(&coloring, K22);
}

#[test]
fn greedy_assignment_follows_saturation_then_degree_order() {
    // Selection order on the path is 1 (degree), 2 (saturation+degree),
    // 0 (id tie-break), 3; colors reuse smallest-first.
    let coloring = greedy(PATH4);
    assert_eq!(coloring.assignment, vec![1, 0, 1, 0]);
    assert_eq!(coloring.color_count, 2);
}

#[test]
fn empty_edge_list_yields_the_empty_coloring() {
    for mode in [Mode::Heuristic, Mode::ExactWithBound { improve: None }] {
        let coloring = color_graph(&[], mode, None).unwrap();
        assert_eq!(coloring.color_count, 0);
        assert!(coloring.assignment.is_empty());
    }
}

#[test]
fn repeated_runs_are_identical_without_a_budget() {
    let big = draw_gnp(
        GnpCfg {
            vertices: 30,
            edge_prob: 0.4,
        },
        ReplayToken { seed: 11, index: 0 },
    );
    assert_eq!(
        color_graph(&big, Mode::Heuristic, None),
        color_graph(&big, Mode::Heuristic, None)
    );

    let small = draw_gnp(
        GnpCfg {
            vertices: 14,
            edge_prob: 0.5,
        },
        ReplayToken { seed: 11, index: 1 },
    );
    let mode = Mode::ExactWithBound { improve: None };
    assert_eq!(
        color_graph(&small, mode, None),
        color_graph(&small, mode, None)
    );
}

#[test]
fn refinement_never_exceeds_the_seeded_bound() {
    for index in 0..5 {
        let edges = draw_gnp(
            GnpCfg {
                vertices: 14,
                edge_prob: 0.5,
            },
            ReplayToken { seed: 23, index },
        );
        let seed = greedy(&edges);
        let refined = exact(&edges);
        assert!(refined.color_count <= seed.color_count);
        assert_proper(&refined, &edges);
    }
}

#[test]
fn improve_request_degrades_to_seed_when_unreachable() {
    // K4 admits no 3-coloring, so asking to improve the bound by one leaves
    // the refinement empty-handed and the seeded coloring wins.
    let coloring = color_graph(K4, Mode::ExactWithBound { improve: Some(1) }, None).unwrap();
    assert_eq!(coloring.color_count, 4);
    assert_proper(&coloring, K4);
}

#[test]
fn expired_budget_degrades_to_none_or_a_valid_coloring() {
    let edges = draw_gnp(
        GnpCfg {
            vertices: 40,
            edge_prob: 0.5,
        },
        ReplayToken { seed: 5, index: 0 },
    );
    for timeout in [Duration::ZERO, Duration::from_nanos(1)] {
        for mode in [Mode::Heuristic, Mode::ExactWithBound { improve: None }] {
            if let Some(coloring) = color_graph(&edges, mode, Some(timeout)) {
                assert_proper(&coloring, &edges);
            }
        }
    }
}

#[test]
fn undo_restores_engine_state_exactly() {
    let adj = AdjacencyModel::from_edges(K22);
    let cfg = SearchCfg {
        initial_bound: 4,
        target: 1,
        deadline: None,
        accept_first: true,
    };
    let fresh = SearchRunner::new(&adj, cfg);
    let mut probed = SearchRunner::new(&adj, cfg);

    probed.color(0, 0);
    probed.color(2, 1);
    probed.uncolor(2, 1);
    probed.uncolor(0, 0);

    assert_eq!(probed.assignment, fresh.assignment);
    assert_eq!(probed.groups, fresh.groups);
    assert_eq!(probed.saturation, fresh.saturation);
}

#[test]
fn saturation_bit_clears_only_with_the_last_colored_neighbor() {
    let adj = AdjacencyModel::from_edges(STAR4);
    let mut sat = SaturationState::new(4, 4);
    sat.apply_color(&adj, 1, 0);
    sat.apply_color(&adj, 2, 0);
    assert_eq!(sat.saturation(0), 1);
    sat.retract_color(&adj, 2, 0);
    assert_eq!(sat.saturation(0), 1);
    sat.retract_color(&adj, 1, 0);
    assert_eq!(sat.saturation(0), 0);
}

#[test]
fn self_bit_in_adjacency_rows_never_changes_results() {
    for edges in [TRIANGLE, PATH4, STAR4, K4, K22] {
        let adj = AdjacencyModel::from_edges(edges);
        let mut scrubbed = adj.clone();
        for v in 0..scrubbed.vertex_count() {
            scrubbed.rows[v].set(v, false);
        }

        let n = adj.vertex_count();
        let heuristic = SearchCfg {
            initial_bound: n,
            target: 1,
            deadline: None,
            accept_first: true,
        };
        let seed = search(&adj, heuristic);
        assert_eq!(seed, search(&scrubbed, heuristic));

        let refine = SearchCfg {
            initial_bound: seed.as_ref().unwrap().color_count,
            target: 1,
            deadline: None,
            accept_first: false,
        };
        assert_eq!(search(&adj, refine), search(&scrubbed, refine));
    }
}

#[test]
fn mode_selectors_parse_or_reject() {
    assert_eq!("greedy".parse::<Mode>().unwrap(), Mode::Heuristic);
    assert_eq!(
        "bnb".parse::<Mode>().unwrap(),
        Mode::ExactWithBound { improve: None }
    );
    let err = "fastest".parse::<Mode>().unwrap_err();
    assert!(err.to_string().contains("available modes"));
}

fn labeled_edges(max_label: u64, max_len: usize) -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0..max_label, 0..max_label), 1..max_len)
        .prop_map(|pairs| pairs.into_iter().filter(|(u, v)| u != v).collect::<Vec<_>>())
        .prop_filter("needs at least one edge", |edges: &Vec<_>| !edges.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn greedy_colorings_are_proper_and_consistent(edges in labeled_edges(40, 60)) {
        let (normalized, _) = normalize_edges(&edges);
        let coloring = color_graph(&normalized, Mode::Heuristic, None).unwrap();
        prop_assert!(coloring.is_proper(&normalized));
        prop_assert_eq!(coloring.color_count, coloring.distinct_colors());
    }

    #[test]
    fn refined_colorings_are_proper_and_no_worse(edges in labeled_edges(12, 30)) {
        let (normalized, _) = normalize_edges(&edges);
        let seed = color_graph(&normalized, Mode::Heuristic, None).unwrap();
        let refined =
            color_graph(&normalized, Mode::ExactWithBound { improve: None }, None).unwrap();
        prop_assert!(refined.is_proper(&normalized));
        prop_assert!(refined.color_count <= seed.color_count);
    }
}
