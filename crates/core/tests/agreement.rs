//! Cross-strategy laws: every strategy agrees on solvability, paths
//! reverse into paths, and colour classes balance along any path.

mod common;

use common::{assert_hamiltonian, grid, ALL_STRATEGIES};
use gridpath_core::{solve_matrix, Strategy};

fn instances() -> Vec<Vec<Vec<u8>>> {
    vec![
        grid("S"),
        grid("S."),
        grid("S....."),
        grid(
            "S.
             ..",
        ),
        grid(
            "S..
             ...
             ...",
        ),
        grid(
            "S...
             ###.
             ....
             .###",
        ),
        grid(
            "S....
             .....
             ..#..
             .....
             .....",
        ),
        grid(
            "...
             .#.
             ..S",
        ),
        // unsolvable beyond the static rules
        grid(
            "S.#
             ...
             #..",
        ),
        // rejected statically
        grid(
            "S..
             .#.",
        ),
        grid(".S."),
    ]
}

#[test]
fn every_strategy_agrees_with_backtracking() {
    for matrix in instances() {
        let reference = solve_matrix(&matrix, Strategy::Backtracking).is_ok();
        for strategy in ALL_STRATEGIES {
            assert_eq!(
                solve_matrix(&matrix, strategy).is_ok(),
                reference,
                "{strategy:?} disagrees on {matrix:?}"
            );
        }
    }
}

#[test]
fn solving_twice_returns_the_same_path() {
    for matrix in instances() {
        for strategy in ALL_STRATEGIES {
            let first = solve_matrix(&matrix, strategy);
            let second = solve_matrix(&matrix, strategy);
            assert_eq!(first, second, "{strategy:?}");
        }
    }
}

#[test]
fn reversed_path_solves_from_the_finish() {
    for matrix in instances() {
        let Ok(solution) = solve_matrix(&matrix, Strategy::Optimized) else {
            continue;
        };

        // re-mark the grid with the start moved to the old finish
        let mut reversed = matrix.clone();
        for row in &mut reversed {
            for code in row.iter_mut() {
                if *code == 2 {
                    *code = 1;
                }
            }
        }
        reversed[solution.finish.row as usize][solution.finish.col as usize] = 2;

        for strategy in ALL_STRATEGIES {
            let back = solve_matrix(&reversed, strategy).unwrap_or_else(|e| {
                panic!("{strategy:?} failed on the reversed instance: {e:?}")
            });
            assert_hamiltonian(&reversed, &back);
            assert_eq!(back.path.len(), solution.path.len());
        }
    }
}

#[test]
fn colour_classes_balance_along_the_path() {
    for matrix in instances() {
        let Ok(solution) = solve_matrix(&matrix, Strategy::Greedy) else {
            continue;
        };
        let evens = solution.path.iter().filter(|c| c.color() == 0).count();
        let odds = solution.path.len() - evens;
        assert!(evens.abs_diff(odds) <= 1);
        if solution.path.len() % 2 == 1 {
            // odd length: both endpoints sit on the majority colour
            let majority = if evens > odds { 0 } else { 1 };
            assert_eq!(solution.path[0].color(), majority);
            assert_eq!(solution.finish.color(), majority);
        } else {
            assert_eq!(evens, odds);
            assert_ne!(solution.path[0].color(), solution.finish.color());
        }
    }
}
