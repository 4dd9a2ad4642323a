//! Hamiltonian path search on grid graphs.
//!
//! `gridpath_core` decides whether a rectangular grid of walkable and
//! blocked cells admits a path that starts at a marked cell and visits
//! every walkable cell exactly once, moving between 4-neighbours. Seven
//! strategies are exposed, ordered roughly by pruning power:
//!
//! 1. **backtracking** -- depth-first search in adjacency order.
//! 2. **greedy** -- Warnsdorff ordering: the most constrained neighbour
//!    is explored first.
//! 3. **forced_move** -- Warnsdorff plus forced-move propagation:
//!    single exits are taken without branching, and a neighbour that
//!    would otherwise become a dead end is entered immediately or fixes
//!    the finish cell.
//! 4. **edge_elimination** -- Warnsdorff plus degree-based edge
//!    elimination: per-vertex multiplicity counters commit the edges
//!    every completion must use and strip the rest, to a fixpoint.
//! 5. **validation_forced_move** -- forced_move plus a block-cut
//!    feasibility test on the remaining subgraph at every frame.
//! 6. **validation_edge_elimination** -- edge_elimination plus the same
//!    test.
//! 7. **optimized** -- everything at once, plus a connectivity prune at
//!    each expansion.
//!
//! Every strategy agrees on solvability; they differ in how much of the
//! search tree they expand. All searches and the articulation-point
//! scan run on explicit frame stacks, so deep grids cannot overflow the
//! call stack.
//!
//! # Entry points
//!
//! The main entry point is [`solve_matrix`], which takes a `{0,1,2}`
//! matrix (blocked / walkable / start) and a [`Strategy`], and returns
//! either a [`Solution`] or an [`Error`] explaining why none exists.
//! [`solve`] takes a pre-built [`GridGraph`]; [`solve_graph`] accepts
//! the [`CellGraph`] adjacency-map form. With the `std` feature,
//! [`solve_timed`] and [`solve_matrix_timed`] also report wall-clock
//! duration as an [`Elapsed`].
//!
//! ```rust,ignore
//! use gridpath_core::{solve_matrix, Strategy};
//!
//! let matrix = vec![vec![2, 1], vec![1, 1]];
//! match solve_matrix(&matrix, Strategy::Optimized) {
//!     Ok(solution) => println!("finish at {:?}", solution.finish),
//!     Err(err) => println!("unsolvable: {err:?}"),
//! }
//! ```
//!
//! # Crate features
//!
//! - **`std`** -- timed solving via `std::time::Instant`.
//! - **`serde`** -- `Serialize`/`Deserialize` derives on core types
//!   (`Cell`, `Solution`, `Strategy`, errors).
//! - **`schemars`** -- JSON Schema derives (implies `std`).
//! - **`parser`** -- logos token kinds for the grid text format.
//!
//! This crate is `no_std` compatible (requires `alloc`). The text
//! format parser lives in the separate `gridpath_parser` crate.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
extern crate alloc;

pub mod graph;
pub mod grid;
pub mod solver;

pub use graph::cell_graph::CellGraph;
pub use graph::grid_graph::GridGraph;
pub use grid::Cell;
pub use solver::error::Error;
pub use solver::report::Elapsed;
#[cfg(feature = "std")]
pub use solver::report::{solve_matrix_timed, solve_timed, TimedSolve};
pub use solver::{solve, solve_graph, solve_matrix, Solution, Strategy};
