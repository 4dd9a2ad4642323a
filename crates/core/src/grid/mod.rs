//! Grid input: cell identity, matrix codes, and the grid-to-graph builder.

#[cfg(feature = "parser")]
pub mod lexer;

use alloc::vec::Vec;

use crate::graph::grid_graph::GridGraph;
use crate::solver::error::InputError;

/// Matrix code for a blocked cell.
pub const BLOCKED: u8 = 0;
/// Matrix code for a walkable cell.
pub const WALKABLE: u8 = 1;
/// Matrix code for the start cell. Walkable; the path begins here.
pub const START: u8 = 2;

/// A walkable cell, identified by its grid coordinates.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Two-colouring of the 4-connected grid: `(row + col) mod 2`.
    /// Adjacent cells always carry opposite colours, so colours
    /// alternate along any path.
    #[must_use]
    pub const fn color(self) -> u8 {
        ((self.row + self.col) % 2) as u8
    }
}

/// Build the adjacency graph of a `{0,1,2}` matrix.
///
/// One vertex per non-zero cell; an edge joins every pair of walkable
/// 4-neighbours. Exactly one cell must carry the start code.
///
/// # Errors
///
/// Returns [`InputError`] when the matrix is empty or ragged, contains
/// an unknown code, or does not have exactly one start cell.
#[allow(clippy::cast_possible_truncation)]
pub fn graph_from_matrix(matrix: &[Vec<u8>]) -> Result<(GridGraph, Cell), InputError> {
    if matrix.is_empty() || matrix[0].is_empty() {
        return Err(InputError::EmptyGrid);
    }

    let cols = matrix[0].len();
    let mut start = None;
    let mut cells = Vec::new();

    for (r, row) in matrix.iter().enumerate() {
        if row.len() != cols {
            return Err(InputError::RaggedRow {
                row: r,
                expected: cols,
                got: row.len(),
            });
        }
        for (c, &code) in row.iter().enumerate() {
            let cell = Cell::new(r as u32, c as u32);
            match code {
                BLOCKED => {}
                WALKABLE => cells.push(cell),
                START => {
                    if let Some(first) = start {
                        return Err(InputError::MultipleStarts {
                            first,
                            second: cell,
                        });
                    }
                    start = Some(cell);
                    cells.push(cell);
                }
                other => return Err(InputError::UnknownCode { cell, code: other }),
            }
        }
    }

    let Some(start) = start else {
        return Err(InputError::NoStart);
    };

    Ok((GridGraph::from_cells(cells), start))
}
