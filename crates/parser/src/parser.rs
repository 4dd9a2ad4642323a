//! Winnow-based parser for the grid text format.
//!
//! Grammar:
//! ```text
//! grid    = line*
//! line    = (comment | row)? NEWLINE
//! comment = "//" REST_OF_LINE
//! row     = cell (WHITESPACE? cell)*  WHITESPACE?  comment?
//! cell    = "#" | "0"   -- blocked
//!         | "." | "1"   -- walkable
//!         | "S" | "s" | "2"   -- start
//! ```
//!
//! Cells may sit flush (`S..#`) or spaced (`S . . #`); blank lines and
//! comment-only lines are skipped. The parser checks syntax only --
//! rectangularity and the one-start rule are enforced by the core
//! builder, which [`parse_graph`] runs as a second step.

use gridpath_core::{Cell, GridGraph};
use winnow::ascii::{newline, till_line_ending};
use winnow::combinator::{alt, opt, repeat};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};
use winnow::ModalResult;

use gridpath_core::solver::error::InputError;

// ---------------------------------------------------------------------------
// Public error types
// ---------------------------------------------------------------------------

/// A parse error with human-readable location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Error from [`parse_graph`]: either the text does not scan, or the
/// scanned matrix is structurally invalid.
#[derive(Debug)]
pub enum GridTextError {
    Syntax(ParseError),
    Structure(InputError),
}

impl core::fmt::Display for GridTextError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Structure(e) => write!(f, "invalid grid: {e:?}"),
        }
    }
}

impl std::error::Error for GridTextError {}

impl From<ParseError> for GridTextError {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<InputError> for GridTextError {
    fn from(e: InputError) -> Self {
        Self::Structure(e)
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse a grid text into a `{0,1,2}` matrix.
///
/// # Errors
///
/// Returns a [`ParseError`] with 1-based line/column information when
/// the input does not conform to the grammar.
pub fn parse_grid(input: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let original = input;
    let mut stream: &str = input;
    match grid_parser.parse_next(&mut stream) {
        Ok(rows) => Ok(rows),
        Err(e) => {
            // Compute how many bytes were consumed before the error.
            let remaining_len = stream.len();
            let consumed = original.len().saturating_sub(remaining_len);
            let (line, column) = offset_to_line_col(original, consumed);
            Err(ParseError {
                message: e.to_string(),
                line,
                column,
            })
        }
    }
}

/// Parse a grid text and build the cell graph in one step.
///
/// # Errors
///
/// Returns [`GridTextError::Syntax`] when the text does not scan and
/// [`GridTextError::Structure`] when the matrix violates the input
/// rules (ragged rows, zero or multiple starts).
pub fn parse_graph(input: &str) -> Result<(GridGraph, Cell), GridTextError> {
    let matrix = parse_grid(input)?;
    let (graph, start) = gridpath_core::grid::graph_from_matrix(&matrix)?;
    Ok((graph, start))
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = &input[..safe_offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.len() + 1, |pos| prefix.len() - pos);
    (line, column)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Optional inline whitespace: spaces and tabs only (no newlines).
fn opt_inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// One cell character, mapped to its matrix code.
fn cell(input: &mut &str) -> ModalResult<u8> {
    alt((
        one_of(['#', '0']).value(0u8),
        one_of(['.', '1']).value(1u8),
        one_of(['S', 's', '2']).value(2u8),
    ))
    .parse_next(input)
}

/// A comment: `"//" <rest-of-line>`.
fn comment(input: &mut &str) -> ModalResult<()> {
    literal("//").parse_next(input)?;
    till_line_ending.void().parse_next(input)
}

/// One row of cells, optionally spaced, with an optional trailing comment.
fn row(input: &mut &str) -> ModalResult<Vec<u8>> {
    let first = cell.parse_next(input)?;
    let rest: Vec<u8> = repeat(0.., |input: &mut &str| {
        opt_inline_ws.parse_next(input)?;
        cell.parse_next(input)
    })
    .parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    let _ = opt(comment).parse_next(input)?;

    let mut cells = vec![first];
    cells.extend(rest);
    Ok(cells)
}

// ---------------------------------------------------------------------------
// Grid parser
// ---------------------------------------------------------------------------

/// The whole input: rows, comments, and blank lines up to end-of-input.
fn grid_parser(input: &mut &str) -> ModalResult<Vec<Vec<u8>>> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    loop {
        opt_inline_ws.parse_next(input)?;
        if opt(comment).parse_next(input)?.is_none() {
            if let Some(cells) = opt(row).parse_next(input)? {
                rows.push(cells);
            }
        }
        if opt(newline).parse_next(input)?.is_none() {
            break;
        }
    }

    // Verify we are at end-of-input.
    if !input.is_empty() {
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
