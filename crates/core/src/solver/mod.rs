//! Strategy selection and solve entry points.

use alloc::vec::Vec;

use crate::graph::cell_graph::CellGraph;
use crate::graph::grid_graph::GridGraph;
use crate::grid::{self, Cell};

use self::error::{Error, InputError};
use self::search::{NeighborOrdering, SearchOptions};

pub mod error;
pub mod feasibility;
pub mod report;

pub(crate) mod pruning;
pub(crate) mod search;
pub(crate) mod state;

/// Search strategies, ordered roughly by pruning power.
///
/// Every strategy agrees on whether a path exists; they differ in how
/// much of the search tree they expand.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Depth-first backtracking in adjacency order.
    Backtracking,
    /// Warnsdorff ordering: the most constrained neighbour first.
    Greedy,
    /// Warnsdorff plus forced-move propagation.
    ForcedMove,
    /// Warnsdorff plus degree-based edge elimination.
    EdgeElimination,
    /// `ForcedMove` plus the block-cut feasibility test at every frame.
    ValidationForcedMove,
    /// `EdgeElimination` plus the block-cut feasibility test.
    ValidationEdgeElimination,
    /// Everything at once: forced moves, elimination, block-cut
    /// validation, and a connectivity prune at each expansion.
    Optimized,
}

impl Strategy {
    pub(crate) const fn options(self) -> SearchOptions {
        let warnsdorff = NeighborOrdering::FewestOptionsFirst;
        match self {
            Self::Backtracking => SearchOptions {
                ordering: NeighborOrdering::AsAdjacent,
                forced_move: false,
                edge_elimination: false,
                validation: false,
                connectivity: false,
            },
            Self::Greedy => SearchOptions {
                ordering: warnsdorff,
                forced_move: false,
                edge_elimination: false,
                validation: false,
                connectivity: false,
            },
            Self::ForcedMove => SearchOptions {
                ordering: warnsdorff,
                forced_move: true,
                edge_elimination: false,
                validation: false,
                connectivity: false,
            },
            Self::EdgeElimination => SearchOptions {
                ordering: warnsdorff,
                forced_move: false,
                edge_elimination: true,
                validation: false,
                connectivity: false,
            },
            Self::ValidationForcedMove => SearchOptions {
                ordering: warnsdorff,
                forced_move: true,
                edge_elimination: false,
                validation: true,
                connectivity: false,
            },
            Self::ValidationEdgeElimination => SearchOptions {
                ordering: warnsdorff,
                forced_move: false,
                edge_elimination: true,
                validation: true,
                connectivity: false,
            },
            Self::Optimized => SearchOptions {
                ordering: warnsdorff,
                forced_move: true,
                edge_elimination: true,
                validation: true,
                connectivity: true,
            },
        }
    }
}

/// A Hamiltonian path over the walkable cells.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Every walkable cell exactly once, beginning at the start cell.
    pub path: Vec<Cell>,
    /// Last cell of the path.
    pub finish: Cell,
}

/// Solve a pre-built dense graph from `start`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] when `start` is not a vertex of `graph`.
/// - [`Error::Infeasible`] when the static pre-check rejects the
///   instance.
/// - [`Error::NoSolution`] when the search exhausts without a full path.
pub fn solve(graph: &GridGraph, start: Cell, strategy: Strategy) -> Result<Solution, Error> {
    let Some(start_id) = graph.id(start) else {
        return Err(Error::InvalidInput(InputError::StartNotInGraph { start }));
    };
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        ?strategy,
        "solving"
    );

    let feasibility = feasibility::static_check(graph, start_id)?;
    let path = search::run(graph, start_id, feasibility.forced_finish, strategy.options())
        .ok_or(Error::NoSolution)?;

    let path: Vec<Cell> = path.into_iter().map(|v| graph.cell(v)).collect();
    let finish = *path.last().expect("a found path contains at least the start");
    Ok(Solution { path, finish })
}

/// Solve a `{0,1,2}` matrix: 0 blocked, 1 walkable, 2 the start.
///
/// # Errors
///
/// As [`solve`], plus [`Error::InvalidInput`] for malformed matrices.
pub fn solve_matrix(matrix: &[Vec<u8>], strategy: Strategy) -> Result<Solution, Error> {
    let (graph, start) = grid::graph_from_matrix(matrix)?;
    solve(&graph, start, strategy)
}

/// Solve the adjacency-map input form.
///
/// # Errors
///
/// As [`solve`].
pub fn solve_graph(graph: &CellGraph, start: Cell, strategy: Strategy) -> Result<Solution, Error> {
    let dense = GridGraph::from_cell_graph(graph);
    solve(&dense, start, strategy)
}
