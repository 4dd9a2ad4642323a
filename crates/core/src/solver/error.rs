use ::derive_more::From;

use crate::grid::Cell;

/// The input matrix or graph is malformed.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// No rows, or rows with no columns.
    EmptyGrid,
    /// A row whose width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A matrix entry outside `{0, 1, 2}`.
    UnknownCode { cell: Cell, code: u8 },
    /// No cell carries the start code.
    NoStart,
    /// More than one cell carries the start code.
    MultipleStarts { first: Cell, second: Cell },
    /// The start vertex is missing from a pre-built graph.
    StartNotInGraph { start: Cell },
}

/// The static pre-check rejected the instance: no Hamiltonian path can
/// exist, whatever the strategy.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infeasible {
    /// The walkable cells do not form a single component.
    Disconnected { components: usize },
    /// More than one non-start vertex of degree 1. A simple path has a
    /// single free endpoint, so at most one leaf can be the finish.
    ExtraLeaves { count: usize },
    /// The forced finish sits on the wrong colour class for the cell
    /// count.
    ParityMismatch { start: Cell, finish: Cell },
    /// The start is a cut vertex; leaving it strands one of its sides.
    StartIsCut { start: Cell },
    /// Removing a cut vertex leaves more than two sides; a path crosses
    /// each cut vertex only once.
    CutSplitsThree { cut: Cell, components: usize },
}

/// Error returned when an instance has no Hamiltonian path.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum Error {
    /// The input itself is malformed.
    InvalidInput(InputError),
    /// The static pre-check rejected the instance.
    Infeasible(Infeasible),
    /// The search exhausted every branch without completing a path.
    #[from(ignore)]
    NoSolution,
}
