//! Forced-move propagation.
//!
//! Two rules run to fixpoint on the path head:
//!
//! - **Single exit**: while the head has exactly one live unvisited
//!   neighbour, take it without branching.
//! - **Pinned leaves**: an unvisited neighbour whose own induced degree
//!   is 1 would become an unreachable dead end if bypassed, so it must
//!   be entered immediately or end the path. With a finish already
//!   fixed, one such non-finish neighbour is entered at once and a
//!   second kills the branch. With no finish fixed, two pinned leaves
//!   mean one is entered and the other becomes the finish (both sit
//!   adjacent to the head, so reversing the tail of any completion maps
//!   the two choices onto each other, and entering the lower id loses
//!   nothing); three or more kill the branch.
//!
//! A leaf surfacing this way is accepted as finish only when none is
//! fixed yet and the parity rule permits it.

use crate::graph::grid_graph::GridGraph;
use crate::solver::feasibility::parity_allows;
use crate::solver::pruning::Propagation;
use crate::solver::state::SearchState;

pub(crate) fn propagate(graph: &GridGraph, state: &mut SearchState) -> Propagation {
    let total = graph.vertex_count();
    loop {
        if state.path.len() == total {
            return Propagation::Solved;
        }

        let exits = state.live_neighbors(graph, state.current);
        if exits.is_empty() {
            return Propagation::Pruned;
        }
        if let [(vertex, edge)] = exits[..] {
            if !state.advance(graph, vertex, edge) {
                return Propagation::Pruned;
            }
            continue;
        }

        let pinned: alloc::vec::Vec<(usize, usize)> = exits
            .iter()
            .copied()
            .filter(|&(v, _)| state.live_degree(graph, v) == 1)
            .collect();

        let step = if let Some(finish) = state.finish {
            let mut free = pinned.iter().filter(|&&(v, _)| v != finish);
            let first = free.next().copied();
            if free.next().is_some() {
                return Propagation::Pruned;
            }
            first
        } else {
            match pinned[..] {
                [] => None,
                [entry] => Some(entry),
                [entry, (finish, _)] => {
                    if !parity_allows(graph, state.current, finish, state.remaining(graph)) {
                        return Propagation::Pruned;
                    }
                    state.finish = Some(finish);
                    Some(entry)
                }
                _ => return Propagation::Pruned,
            }
        };

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

    fn state_for(matrix: &[alloc::vec::Vec<u8>]) -> (GridGraph, SearchState) {
        let (graph, start) = graph_from_matrix(matrix).unwrap();
        let start = graph.id(start).unwrap();
        let state = SearchState::new(&graph, start, None, false);
        (graph, state)
    }

    #[test]
    fn test_corridor_collapses_without_branching() {
        let (graph, mut state) = state_for(&[vec![2, 1, 1, 1, 1]]);
        assert_eq!(propagate(&graph, &mut state), Propagation::Solved);
        assert_eq!(state.path.len(), 5);
    }

    #[test]
    fn test_dead_end_is_pruned() {
        // head boxed in after the forced first move
        let (graph, start) = graph_from_matrix(&[vec![2, 1, 0, 1, 1]]).unwrap();
        let start = graph.id(start).unwrap();
        let mut state = SearchState::new(&graph, start, None, false);
        assert_eq!(propagate(&graph, &mut state), Propagation::Pruned);
    }

    #[test]
    fn test_second_run_is_identical() {
        let (graph, mut state) = state_for(&[vec![2, 1, 1], vec![1, 1, 1]]);
        let first = propagate(&graph, &mut state);
        let snapshot = state.path.clone();
        let second = propagate(&graph, &mut state);
        assert_eq!(first, second);
        assert_eq!(state.path, snapshot);
    }
}
