//! Logos-based lexer for the grid text format.
//!
//! The format describes one grid cell per character: `#` or `0` for a
//! blocked cell, `.` or `1` for a walkable cell, `S` (or `s`, `2`) for
//! the start. Cells may be separated by spaces, rows by newlines, and
//! `//` starts a line comment.
//!
//! # Example input
//!
//! ```text
//! // 3x4 room, one pillar
//! S . . .
//! . # . .
//! . . . .
//! ```
//!
//! The grammar-level parser lives in the `gridpath_parser` crate; these
//! tokens exist for editors and the web shell, where whitespace and
//! comment spans matter for highlighting.

use alloc::vec::Vec;
use core::ops::Range;

/// All token kinds produced by the grid lexer.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(::logos::Logos, Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A line comment starting with `//` and running to end of line.
    #[regex(r"//[^\n]*")]
    Comment,

    /// A blocked cell: `#` or `0`.
    #[regex(r"[#0]")]
    Blocked,

    /// A walkable cell: `.` or `1`.
    #[regex(r"[.1]")]
    Walkable,

    /// The start cell: `S`, `s`, or `2`.
    #[regex(r"[Ss2]")]
    Start,

    /// A newline (`\n` or `\r\n`).
    #[regex(r"\r?\n")]
    Newline,

    /// Spaces or tabs. Emitted so the tokenizer can be used for syntax
    /// highlighting where whitespace positioning matters.
    #[regex(r"[ \t]+")]
    Whitespace,
}

/// A single token with its kind and the byte-offset span in the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    /// Construct a new [`Token`].
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Return the source text for this token given the original input.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input`, skipping characters no rule matches.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use ::logos::Logos;

    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(kind, span)| kind.ok().map(|kind| Token::new(kind, span)))
        .collect()
}
