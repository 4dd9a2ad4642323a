//! Degree-based edge elimination.
//!
//! Each branch carries two edge bitsets and two per-vertex counters:
//!
//! - `committed`: edges every completion of this branch must use.
//! - `removed`: edges no completion of this branch can use.
//! - `degree_remaining[v]`: incident edges not yet removed.
//! - `committed_count[v]`: incident committed edges.
//!
//! A vertex uses one path edge if it ends the path and two otherwise.
//! The start's multiplicity is always 1; a fixed finish's is 1; every
//! visited or wrong-coloured vertex is certainly interior at 2. The
//! finish colour class is known from the start colour and the cell
//! count, so "wrong-coloured" is decided up front.
//!
//! Two rules run to fixpoint over a work queue:
//!
//! - **Saturate**: when `degree_remaining[v]` equals the least
//!   multiplicity `v` can have, all of its live edges are committed.
//! - **Prune**: when `committed_count[v]` reaches the most edges `v` can
//!   use, its other live edges are removed.
//!
//! A removal dropping an unvisited vertex to a single live edge makes it
//! a leaf that must end the path: it is accepted as the finish when none
//! is fixed and parity permits, and prunes the branch otherwise. After
//! the fixpoint the head walks along committed edges, and the walk and
//! rules alternate until neither moves.

use alloc::collections::vec_deque::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::graph::bitset::BitSet;
use crate::graph::grid_graph::GridGraph;
use crate::solver::feasibility::parity_allows;
use crate::solver::pruning::Propagation;
use crate::solver::state::SearchState;

/// Branch-local elimination bookkeeping. Snapshotted with the rest of
/// the search state when the driver forks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ElimState {
    start: usize,
    /// Colour class the finish must sit on, fixed by the start colour
    /// and the cell count.
    finish_color: u8,
    pub removed: BitSet,
    pub committed: BitSet,
    pub degree_remaining: Vec<usize>,
    pub committed_count: Vec<usize>,
}

impl ElimState {
    pub fn new(graph: &GridGraph, start: usize) -> Self {
        let n = graph.vertex_count();
        let start_color = graph.cell(start).color();
        let finish_color = if n % 2 == 0 {
            1 - start_color
        } else {
            start_color
        };
        Self {
            start,
            finish_color,
            removed: BitSet::with_capacity(graph.edge_count()),
            committed: BitSet::with_capacity(graph.edge_count()),
            degree_remaining: (0..n).map(|v| graph.degree(v)).collect(),
            committed_count: vec![0; n],
        }
    }

    /// Most path edges `v` can carry.
    pub fn need_max(&self, v: usize, finish: Option<usize>) -> usize {
        if v == self.start || finish == Some(v) {
            1
        } else {
            2
        }
    }

    /// Mark the edge `u`-`v` as part of the path. Fails on a removed
    /// edge or when an endpoint exceeds its multiplicity.
    pub fn commit(&mut self, edge: usize, u: usize, v: usize, finish: Option<usize>) -> bool {
        if self.removed.contains(edge) {
            return false;
        }
        if self.committed.insert(edge) {
            self.committed_count[u] += 1;
            self.committed_count[v] += 1;
            if self.committed_count[u] > self.need_max(u, finish)
                || self.committed_count[v] > self.need_max(v, finish)
            {
                return false;
            }
        }
        true
    }
}

/// Fewest path edges `v` must carry on this branch.
fn need_min(elim: &ElimState, graph: &GridGraph, state: &SearchState, v: usize) -> usize {
    if v == elim.start || state.finish == Some(v) {
        return 1;
    }
    if state.visited.contains(v) || state.finish.is_some() {
        return 2;
    }
    // unvisited, no finish yet: only the finish colour class may end the path
    if graph.cell(v).color() == elim.finish_color {
        1
    } else {
        2
    }
}

/// A removal left `w` with one live edge: it must end the path, unless
/// the head is about to walk onto it over a committed edge.
fn accept_leaf(
    graph: &GridGraph,
    state: &mut SearchState,
    elim: &ElimState,
    w: usize,
) -> bool {
    if state.finish == Some(w) {
        return true;
    }
    let walk_target = graph
        .neighbors(state.current)
        .iter()
        .any(|n| n.vertex == w && elim.committed.contains(n.edge));
    if walk_target {
        return true;
    }
    if state.finish.is_none() && parity_allows(graph, state.current, w, state.remaining(graph)) {
        state.finish = Some(w);
        return true;
    }
    false
}

fn rules(graph: &GridGraph, state: &mut SearchState, elim: &mut ElimState) -> Propagation {
    let total = graph.vertex_count();
    let mut queue: VecDeque<usize> = (0..total).collect();
    let mut queued = BitSet::with_capacity(total);
    for v in 0..total {
        queued.insert(v);
    }

    while let Some(v) = queue.pop_front() {
        queued.remove(v);

        let max = elim.need_max(v, state.finish);
        if elim.committed_count[v] > max {
            return Propagation::Pruned;
        }
        let min = need_min(elim, graph, state, v);
        if !state.visited.contains(v) && elim.degree_remaining[v] < min {
            return Propagation::Pruned;
        }

        let schedule = |queue: &mut VecDeque<usize>, queued: &mut BitSet, w: usize| {
            if queued.insert(w) {
                queue.push_back(w);
            }
        };

        // Saturate: every live edge at v is forced into the path
        if elim.degree_remaining[v] == min && elim.committed_count[v] < min {
            for n in graph.neighbors(v) {
                if elim.removed.contains(n.edge) || !elim.committed.insert(n.edge) {
                    continue;
                }
                elim.committed_count[v] += 1;
                elim.committed_count[n.vertex] += 1;
                if elim.committed_count[n.vertex] > elim.need_max(n.vertex, state.finish) {
                    return Propagation::Pruned;
                }
                schedule(&mut queue, &mut queued, n.vertex);
            }
        }

        // Prune: v has all its path edges, the rest are unusable
        if elim.committed_count[v] == max && elim.degree_remaining[v] > elim.committed_count[v] {
            for n in graph.neighbors(v) {
                if elim.removed.contains(n.edge) || elim.committed.contains(n.edge) {
                    continue;
                }
                elim.removed.insert(n.edge);
                elim.degree_remaining[v] -= 1;
                elim.degree_remaining[n.vertex] -= 1;
                let w = n.vertex;
                if !state.visited.contains(w) {
                    match elim.degree_remaining[w] {
                        0 => return Propagation::Pruned,
                        1 => {
                            if !accept_leaf(graph, state, elim, w) {
                                return Propagation::Pruned;
                            }
                        }
                        _ => {}
                    }
                }
                schedule(&mut queue, &mut queued, w);
            }
        }
    }
    Propagation::Continue
}

pub(crate) fn propagate(graph: &GridGraph, state: &mut SearchState) -> Propagation {
    let total = graph.vertex_count();
    loop {
        if state.path.len() == total {
            return Propagation::Solved;
        }

        let Some(mut elim) = state.elim.take() else {
            return Propagation::Continue;
        };
        let verdict = rules(graph, state, &mut elim);
        state.elim = Some(elim);
        if verdict == Propagation::Pruned {
            return Propagation::Pruned;
        }

        // walk a committed edge out of the head
        let step = graph
            .neighbors(state.current)
            .iter()
            .find(|n| {
                !state.visited.contains(n.vertex)
                    && state
                        .elim
                        .as_ref()
                        .is_some_and(|elim| elim.committed.contains(n.edge))
            })
            .map(|n| (n.vertex, n.edge));
        let Some((vertex, edge)) = step else {
            return Propagation::Continue;
        };
        if !state.advance(graph, vertex, edge) {
            return Propagation::Pruned;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::graph_from_matrix;
    use crate::solver::feasibility::static_check;

    fn state_for(matrix: &[Vec<u8>]) -> (GridGraph, SearchState) {
        let (graph, start) = graph_from_matrix(matrix).unwrap();
        let start = graph.id(start).unwrap();
        let finish = static_check(&graph, start).unwrap().forced_finish;
        let state = SearchState::new(&graph, start, finish, true);
        (graph, state)
    }

    #[test]
    fn test_corridor_walks_to_the_end() {
        let (graph, mut state) = state_for(&[vec![2, 1, 1, 1]]);
        assert_eq!(propagate(&graph, &mut state), Propagation::Solved);
        assert_eq!(state.path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_square_commits_only_certain_edges() {
        // 2x2: only the wrong-coloured corner (1,1) is certainly
        // interior, so exactly its two edges are committed
        let (graph, mut state) = state_for(&[vec![2, 1], vec![1, 1]]);
        assert_eq!(propagate(&graph, &mut state), Propagation::Continue);
        let elim = state.elim.as_ref().unwrap();
        assert_eq!(elim.committed.count(), 2);
        assert_eq!(elim.removed.count(), 0);
        let interior = graph.id(crate::Cell::new(1, 1)).unwrap();
        assert_eq!(elim.committed_count[interior], 2);
    }

    #[test]
    fn test_wrong_colour_leaf_is_pruned() {
        // 4 cells: both leaves sit on the start's colour class, but an
        // even count needs an opposite-coloured finish
        let (graph, start) = graph_from_matrix(&[vec![1, 1, 1], vec![0, 2, 0]]).unwrap();
        let start = graph.id(start).unwrap();
        let mut state = SearchState::new(&graph, start, None, true);
        assert_eq!(propagate(&graph, &mut state), Propagation::Pruned);
    }

    #[test]
    fn test_second_run_is_identical() {
        let (graph, mut state) = state_for(&[vec![2, 1], vec![1, 1]]);
        assert_eq!(propagate(&graph, &mut state), Propagation::Continue);
        let snapshot = state.clone();
        assert_eq!(propagate(&graph, &mut state), Propagation::Continue);
        assert_eq!(state.path, snapshot.path);
        assert_eq!(state.elim, snapshot.elim);
    }

    #[test]
    fn test_committed_and_removed_stay_disjoint() {
        let (graph, mut state) = state_for(&[
            vec![2, 1, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
            vec![1, 1, 0, 1, 1],
        ]);
        propagate(&graph, &mut state);
        let elim = state.elim.as_ref().unwrap();
        for edge in 0..graph.edge_count() {
            assert!(!(elim.committed.contains(edge) && elim.removed.contains(edge)));
        }
    }
}
