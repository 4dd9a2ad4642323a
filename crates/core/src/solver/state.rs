//! Branch-local search state.

use alloc::vec;
use alloc::vec::Vec;

use crate::graph::bitset::BitSet;
use crate::graph::grid_graph::GridGraph;
use crate::solver::feasibility::parity_allows;
use crate::solver::pruning::elimination::ElimState;

/// One live branch of the search.
///
/// Frames snapshot the whole struct when the driver forks, so cloning
/// must stay cheap: bitsets and flat vectors only.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    /// Head of the path.
    pub current: usize,
    pub path: Vec<usize>,
    pub visited: BitSet,
    /// Fixed terminal vertex, once one is known.
    pub finish: Option<usize>,
    /// Edge-elimination bookkeeping, on elimination strategies only.
    pub elim: Option<ElimState>,
}

impl SearchState {
    pub fn new(
        graph: &GridGraph,
        start: usize,
        finish: Option<usize>,
        with_elimination: bool,
    ) -> Self {
        let mut visited = BitSet::with_capacity(graph.vertex_count());
        visited.insert(start);
        Self {
            current: start,
            path: vec![start],
            visited,
            finish,
            elim: with_elimination.then(|| ElimState::new(graph, start)),
        }
    }

    /// Number of path vertices still to place, the head included.
    pub fn remaining(&self, graph: &GridGraph) -> usize {
        graph.vertex_count() - self.path.len() + 1
    }

    /// Unvisited neighbours of `v` reachable over live edges, as
    /// `(vertex, edge)` pairs in adjacency order.
    pub fn live_neighbors(&self, graph: &GridGraph, v: usize) -> Vec<(usize, usize)> {
        graph
            .neighbors(v)
            .iter()
            .filter(|n| !self.visited.contains(n.vertex))
            .filter(|n| {
                self.elim
                    .as_ref()
                    .map_or(true, |elim| !elim.removed.contains(n.edge))
            })
            .map(|n| (n.vertex, n.edge))
            .collect()
    }

    /// Induced degree of `v`, counting only live edges.
    pub fn live_degree(&self, graph: &GridGraph, v: usize) -> usize {
        graph
            .neighbors(v)
            .iter()
            .filter(|n| !self.visited.contains(n.vertex))
            .filter(|n| {
                self.elim
                    .as_ref()
                    .map_or(true, |elim| !elim.removed.contains(n.edge))
            })
            .count()
    }

    /// Append `vertex` to the path via `edge`.
    ///
    /// Fails when the move runs into a fixed finish early, breaks the
    /// parity rule against it, or overcommits an endpoint in the
    /// elimination state.
    pub fn advance(&mut self, graph: &GridGraph, vertex: usize, edge: usize) -> bool {
        if self.finish == Some(vertex) && self.path.len() + 1 < graph.vertex_count() {
            return false;
        }
        if let Some(elim) = self.elim.as_mut() {
            if !elim.commit(edge, self.current, vertex, self.finish) {
                return false;
            }
        }
        self.visited.insert(vertex);
        self.path.push(vertex);
        self.current = vertex;

        if let Some(finish) = self.finish {
            if finish != vertex && !parity_allows(graph, self.current, finish, self.remaining(graph))
            {
                return false;
            }
        }
        true
    }
}
