mod common;

use common::{assert_hamiltonian, grid, ALL_STRATEGIES};
use gridpath_core::{solve_matrix, Cell, Strategy};

#[test]
fn single_cell_is_its_own_path() {
    let matrix = grid("S");
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_eq!(solution.path, vec![Cell::new(0, 0)]);
        assert_eq!(solution.finish, Cell::new(0, 0));
    }
}

#[test]
fn two_adjacent_cells() {
    let matrix = grid("S.");
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_eq!(solution.path, vec![Cell::new(0, 0), Cell::new(0, 1)]);
        assert_eq!(solution.finish, Cell::new(0, 1));
    }
}

#[test]
fn full_square() {
    let matrix = grid(
        "S.
         ..",
    );
    let clockwise = vec![
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(1, 1),
        Cell::new(1, 0),
    ];
    let counterclockwise = vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(1, 1),
        Cell::new(0, 1),
    ];
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_hamiltonian(&matrix, &solution);
        assert!(
            solution.path == clockwise || solution.path == counterclockwise,
            "{strategy:?} returned {:?}",
            solution.path
        );
    }
}

#[test]
fn full_three_by_three() {
    let matrix = grid(
        "S..
         ...
         ...",
    );
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_hamiltonian(&matrix, &solution);
    }
}

#[test]
fn corridor_has_a_unique_path() {
    let matrix = grid("S.....");
    let expected: Vec<Cell> = (0..6).map(|c| Cell::new(0, c)).collect();
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_eq!(solution.path, expected, "{strategy:?}");
        assert_eq!(solution.finish, Cell::new(0, 5));
    }
}

#[test]
fn serpentine_corridor_collapses_under_forced_moves() {
    // ten cells with a unique winding path
    let matrix = grid(
        "S...
         ###.
         ....
         .###",
    );
    let greedy = solve_matrix(&matrix, Strategy::Greedy).unwrap();
    let forced = solve_matrix(&matrix, Strategy::ForcedMove).unwrap();
    assert_hamiltonian(&matrix, &greedy);
    assert_hamiltonian(&matrix, &forced);
    assert_eq!(greedy.path, forced.path);
    assert_eq!(forced.finish, Cell::new(3, 0));
}

#[test]
fn pillar_grid_solved_by_every_strategy() {
    // 5x5 room, corner start, one interior pillar
    let matrix = grid(
        "S....
         .....
         ..#..
         .....
         .....",
    );
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_hamiltonian(&matrix, &solution);
    }
}

#[test]
fn six_by_six_room() {
    let matrix = grid(
        "S.....
         ......
         ......
         ......
         ......
         ......",
    );
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_hamiltonian(&matrix, &solution);
    }
}

#[test]
fn ring_around_a_pillar() {
    let matrix = grid(
        "...
         .#.
         ..S",
    );
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_hamiltonian(&matrix, &solution);
        assert_eq!(solution.path.len(), 8);
    }
}

#[test]
fn forced_finish_is_honoured() {
    // the lone pendant cell must terminate the path
    let matrix = grid(
        "S..
         ...
         ...
         .##",
    );
    for strategy in ALL_STRATEGIES {
        let solution = solve_matrix(&matrix, strategy).unwrap();
        assert_hamiltonian(&matrix, &solution);
        assert_eq!(solution.finish, Cell::new(3, 0), "{strategy:?}");
    }
}
