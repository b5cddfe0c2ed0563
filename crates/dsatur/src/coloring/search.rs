//! DSATUR vertex ordering driving a stack-based branch-and-bound search.

use std::time::Instant;

use bitvec::prelude::*;

use super::adjacency::AdjacencyModel;
use super::saturation::SaturationState;
use super::types::{Color, Coloring, Frame, SearchCfg, Vertex};

/// Run one search over `adj` under `cfg`.
///
/// Returns the incumbent (the best complete coloring recorded), or `None`
/// when the deadline fired before any complete coloring was produced. With
/// `accept_first` set, the first complete coloring is returned immediately;
/// otherwise the search keeps going until the stack empties, the incumbent
/// reaches `cfg.target`, or time runs out.
pub fn search(adj: &AdjacencyModel, cfg: SearchCfg) -> Option<Coloring> {
    SearchRunner::new(adj, cfg).run()
}

/// Search engine owning all per-run mutable state: the partial coloring, the
/// color-group table, the saturation record, and the frame stack.
///
/// Backtracking uses the explicit stack (at most one frame per vertex)
/// rather than recursion, so call depth never scales with graph size. State
/// is private to one run and discarded with it.
pub(crate) struct SearchRunner<'a> {
    adj: &'a AdjacencyModel,
    cfg: SearchCfg,
    /// Current upper bound; shrinks each time an incumbent is recorded.
    best_found: usize,
    best_coloring: Option<Vec<Color>>,
    /// Partial coloring, `None` = uncolored.
    pub(crate) assignment: Vec<Option<Color>>,
    /// Which vertices currently hold each color; one row per candidate color.
    pub(crate) groups: Vec<BitVec>,
    pub(crate) saturation: SaturationState,
    stack: Vec<Frame>,
    /// Reused intersection buffer for conflict tests.
    scratch: BitVec,
}

impl<'a> SearchRunner<'a> {
    pub(crate) fn new(adj: &'a AdjacencyModel, cfg: SearchCfg) -> Self {
        let n = adj.vertex_count();
        Self {
            adj,
            cfg,
            best_found: cfg.initial_bound,
            best_coloring: None,
            assignment: vec![None; n],
            groups: (0..cfg.initial_bound).map(|_| bitvec![0; n]).collect(),
            saturation: SaturationState::new(n, cfg.initial_bound),
            stack: Vec::with_capacity(n),
            scratch: bitvec![0; n],
        }
    }

    fn run(mut self) -> Option<Coloring> {
        if self.adj.vertex_count() == 0 {
            // Only reachable from an empty edge list: the empty coloring is
            // complete and uses no colors.
            return Some(Coloring {
                color_count: 0,
                assignment: Vec::new(),
            });
        }

        if let Some(first) = self.select_vertex() {
            self.stack.push(Frame {
                vertex: first,
                color: None,
                colors_used: 0,
            });
        }

        while let Some(&frame) = self.stack.last() {
            if self.out_of_time() {
                break;
            }
            let Frame {
                vertex,
                color,
                mut colors_used,
            } = frame;

            // Revisit: undo the previous trial and resume past it.
            let start_color = match color {
                Some(c) => {
                    self.uncolor(vertex, c);
                    c + 1
                }
                None => 0,
            };

            // Smallest already-committed color first; a brand-new color only
            // as a last resort.
            let mut chosen = colors_used;
            for c in start_color..colors_used {
                if self.color_is_free(vertex, c) {
                    chosen = c;
                    break;
                }
            }
            if chosen == colors_used {
                colors_used += 1;
            }

            // Sole bound check; fires before the trial color is applied.
            if colors_used >= self.best_found {
                self.stack.pop();
                continue;
            }

            if let Some(top) = self.stack.last_mut() {
                top.color = Some(chosen);
                top.colors_used = colors_used;
            }
            self.color(vertex, chosen);

            match self.select_vertex() {
                Some(next) => self.stack.push(Frame {
                    vertex: next,
                    color: None,
                    colors_used,
                }),
                None => {
                    // Complete coloring: new incumbent.
                    self.best_found = colors_used;
                    self.best_coloring = self.assignment.iter().copied().collect();
                    if self.cfg.accept_first || self.best_found <= self.cfg.target {
                        break;
                    }
                    // Discard the deepest frame so only strictly better
                    // colorings can complete from here on.
                    self.stack.pop();
                }
            }
        }

        self.best_coloring.map(|assignment| Coloring {
            color_count: self.best_found,
            assignment,
        })
    }

    /// DSATUR rule: among uncolored vertices, maximize (saturation degree,
    /// static degree) lexicographically; the ascending scan with a strict
    /// comparison keeps the smallest id on ties.
    fn select_vertex(&self) -> Option<Vertex> {
        let mut best: Option<(Vertex, (usize, usize))> = None;
        for v in 0..self.adj.vertex_count() {
            if self.assignment[v].is_some() {
                continue;
            }
            let score = (self.saturation.saturation(v), self.adj.degrees[v]);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((v, score)),
            }
        }
        best.map(|(v, _)| v)
    }

    /// True iff no vertex in color group `c` is adjacent to `v`.
    ///
    /// The adjacency row still carries `v`'s own bit here; `v` is uncolored
    /// at every call site, so it sits in no group and the bit cannot match.
    fn color_is_free(&mut self, v: Vertex, c: Color) -> bool {
        self.scratch.clone_from(&self.adj.rows[v]);
        self.scratch &= self.groups[c].as_bitslice();
        self.scratch.not_any()
    }

    pub(crate) fn color(&mut self, v: Vertex, c: Color) {
        self.assignment[v] = Some(c);
        self.groups[c].set(v, true);
        self.saturation.apply_color(self.adj, v, c);
    }

    pub(crate) fn uncolor(&mut self, v: Vertex, c: Color) {
        self.assignment[v] = None;
        self.groups[c].set(v, false);
        self.saturation.retract_color(self.adj, v, c);
    }

    fn out_of_time(&self) -> bool {
        self.cfg.deadline.map_or(false, |d| Instant::now() >= d)
    }
}
