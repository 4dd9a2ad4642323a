//! Solve timing for display.

use core::fmt::{self, Display, Formatter};
use core::time::Duration;

/// Wall-clock duration of a solve, displayed with microsecond
/// resolution as `"<s>.<us> s (<ms>.<us> ms)"`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Elapsed(pub Duration);

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let micros = self.0.as_micros();
        write!(
            f,
            "{}.{:06} s ({}.{:03} ms)",
            micros / 1_000_000,
            micros % 1_000_000,
            micros / 1_000,
            micros % 1_000
        )
    }
}

#[cfg(feature = "std")]
pub use timed::{solve_matrix_timed, solve_timed, TimedSolve};

#[cfg(feature = "std")]
mod timed {
    use std::time::Instant;

    use alloc::vec::Vec;

    use super::Elapsed;
    use crate::graph::grid_graph::GridGraph;
    use crate::grid::Cell;
    use crate::solver::error::Error;
    use crate::solver::{solve, solve_matrix, Solution, Strategy};

    /// Outcome of a solve together with its wall-clock duration.
    #[derive(Debug)]
    pub struct TimedSolve {
        pub outcome: Result<Solution, Error>,
        pub elapsed: Elapsed,
    }

    /// [`solve`] under a wall clock.
    pub fn solve_timed(graph: &GridGraph, start: Cell, strategy: Strategy) -> TimedSolve {
        let clock = Instant::now();
        let outcome = solve(graph, start, strategy);
        TimedSolve {
            outcome,
            elapsed: Elapsed(clock.elapsed()),
        }
    }

    /// [`solve_matrix`] under a wall clock.
    pub fn solve_matrix_timed(matrix: &[Vec<u8>], strategy: Strategy) -> TimedSolve {
        let clock = Instant::now();
        let outcome = solve_matrix(matrix, strategy);
        TimedSolve {
            outcome,
            elapsed: Elapsed(clock.elapsed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_microsecond_resolution() {
        let elapsed = Elapsed(Duration::from_micros(1_234));
        assert_eq!(alloc::format!("{elapsed}"), "0.001234 s (1.234 ms)");
    }

    #[test]
    fn test_display_whole_seconds() {
        let elapsed = Elapsed(Duration::from_micros(2_500_000));
        assert_eq!(alloc::format!("{elapsed}"), "2.500000 s (2500.000 ms)");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_timed_solve_reports_outcome() {
        let matrix = vec![vec![2, 1], vec![1, 1]];
        let timed = solve_matrix_timed(&matrix, crate::Strategy::Greedy);
        assert!(timed.outcome.is_ok());
    }
}
