#![allow(dead_code)]

use std::collections::HashSet;

use gridpath_core::{Cell, Solution, Strategy};

/// Parse a compact picture into a `{0,1,2}` matrix.
///
/// `#` is blocked, `.` walkable, `S` the start; one row per
/// whitespace-separated token:
///
/// ```ignore
/// let matrix = grid(
///     "S..
///      .#.
///      ...",
/// );
/// ```
pub fn grid(picture: &str) -> Vec<Vec<u8>> {
    picture
        .split_whitespace()
        .map(|row| {
            row.chars()
                .map(|cell| match cell {
                    '#' => 0,
                    '.' => 1,
                    'S' => 2,
                    other => panic!("unknown cell picture {other:?}"),
                })
                .collect()
        })
        .collect()
}

/// All seven strategies, weakest first.
pub const ALL_STRATEGIES: [Strategy; 7] = [
    Strategy::Backtracking,
    Strategy::Greedy,
    Strategy::ForcedMove,
    Strategy::EdgeElimination,
    Strategy::ValidationForcedMove,
    Strategy::ValidationEdgeElimination,
    Strategy::Optimized,
];

/// Assert that `solution` is a Hamiltonian path of `matrix`: one entry
/// per walkable cell, starting at the start cell, no repeats, every
/// step between 4-neighbours, finish at the end.
pub fn assert_hamiltonian(matrix: &[Vec<u8>], solution: &Solution) {
    let mut walkable = 0usize;
    let mut start = None;
    for (r, row) in matrix.iter().enumerate() {
        for (c, &code) in row.iter().enumerate() {
            if code != 0 {
                walkable += 1;
            }
            if code == 2 {
                start = Some(Cell::new(r as u32, c as u32));
            }
        }
    }
    let start = start.expect("matrix has a start cell");

    assert_eq!(
        solution.path.len(),
        walkable,
        "path must visit every walkable cell"
    );
    assert_eq!(solution.path[0], start, "path must begin at the start");
    assert_eq!(
        solution.finish,
        *solution.path.last().unwrap(),
        "finish must be the last path entry"
    );

    let distinct: HashSet<Cell> = solution.path.iter().copied().collect();
    assert_eq!(distinct.len(), solution.path.len(), "no cell repeats");

    for cell in &solution.path {
        let code = matrix[cell.row as usize][cell.col as usize];
        assert_ne!(code, 0, "path may only use walkable cells: {cell:?}");
    }
    for pair in solution.path.windows(2) {
        let manhattan = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
        assert_eq!(manhattan, 1, "steps must join 4-neighbours: {pair:?}");
    }
}
