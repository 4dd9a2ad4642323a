//! Explicit-stack backtracking driver.
//!
//! Frames own a full snapshot of branch state, so unwinding is a pop
//! and nothing is shared between branches. On each pop the driver runs
//! the strategy's kernels to fixpoint, applies its feasibility prunes,
//! and pushes one child per live unvisited neighbour of the head.
//!
//! Ordering is Warnsdorff in reverse: children are pushed
//! highest-degree first, so the most constrained neighbour is on top of
//! the stack and explored first. Ties break on vertex id, keeping the
//! returned path reproducible.

use alloc::vec::Vec;

use crate::graph::grid_graph::GridGraph;
use crate::solver::feasibility;
use crate::solver::pruning::{elimination, forced_move, Propagation};
use crate::solver::state::SearchState;

/// Neighbour exploration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NeighborOrdering {
    /// Adjacency order: lowest cell first.
    AsAdjacent,
    /// Fewest onward options first (Warnsdorff).
    FewestOptionsFirst,
}

/// Per-strategy driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchOptions {
    pub ordering: NeighborOrdering,
    pub forced_move: bool,
    pub edge_elimination: bool,
    /// Block-cut feasibility test on the remaining subgraph.
    pub validation: bool,
    /// Reject frames whose unvisited region is disconnected.
    pub connectivity: bool,
}

fn apply_kernels(
    graph: &GridGraph,
    state: &mut SearchState,
    options: SearchOptions,
) -> Propagation {
    loop {
        let before = state.path.len();
        if options.edge_elimination {
            match elimination::propagate(graph, state) {
                Propagation::Continue => {}
                other => return other,
            }
        }
        if options.forced_move {
            match forced_move::propagate(graph, state) {
                Propagation::Continue => {}
                other => return other,
            }
        }
        if state.path.len() == before {
            return Propagation::Continue;
        }
    }
}

/// Run the search. Returns the complete path as dense vertex ids, or
/// `None` once the frame stack is exhausted.
pub(crate) fn run(
    graph: &GridGraph,
    start: usize,
    forced_finish: Option<usize>,
    options: SearchOptions,
) -> Option<Vec<usize>> {
    let total = graph.vertex_count();
    let mut stack: Vec<SearchState> = Vec::new();
    stack.push(SearchState::new(
        graph,
        start,
        forced_finish,
        options.edge_elimination,
    ));
    let mut expanded: u64 = 0;

    while let Some(mut state) = stack.pop() {
        expanded += 1;

        match apply_kernels(graph, &mut state, options) {
            Propagation::Pruned => continue,
            Propagation::Solved => {
                tracing::debug!(expanded, "path found");
                return Some(state.path);
            }
            Propagation::Continue => {}
        }
        if state.path.len() == total {
            tracing::debug!(expanded, "path found");
            return Some(state.path);
        }

        if options.connectivity
            && (graph.component_count(&state.visited) > 1
                || graph.leaf_count_excluding(state.current, &state.visited) > 1)
        {
            continue;
        }
        if options.validation
            && !feasibility::remaining_traversable(graph, &state.visited, state.current)
        {
            continue;
        }

        let mut exits = state.live_neighbors(graph, state.current);
        match options.ordering {
            // pushed in reverse so the lowest id pops first
            NeighborOrdering::AsAdjacent => exits.reverse(),
            // pushed widest first so the most constrained pops first
            NeighborOrdering::FewestOptionsFirst => {
                exits.sort_unstable_by(|a, b| {
                    let da = state.live_degree(graph, a.0);
                    let db = state.live_degree(graph, b.0);
                    db.cmp(&da).then(b.0.cmp(&a.0))
                });
            }
        }
        for (vertex, edge) in exits {
            let mut child = state.clone();
            if child.advance(graph, vertex, edge) {
                stack.push(child);
            }
        }
    }

    tracing::debug!(expanded, "search exhausted");
    None
}
