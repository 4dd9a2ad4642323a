//! wasm library for gridpath
//! compiled binary is uploaded as github action artifact

#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use gridpath_core::grid::lexer::{tokenize, TokenKind};
use gridpath_core::{solve_matrix, Cell, Strategy};
use wasm_bindgen::prelude::*;

fn parse_strategy(strategy: &str) -> Option<Strategy> {
    match strategy {
        "backtracking" => Some(Strategy::Backtracking),
        "greedy" => Some(Strategy::Greedy),
        "forced-move" => Some(Strategy::ForcedMove),
        "edge-elimination" => Some(Strategy::EdgeElimination),
        "validation-forced-move" => Some(Strategy::ValidationForcedMove),
        "validation-edge-elimination" => Some(Strategy::ValidationEdgeElimination),
        "optimized" => Some(Strategy::Optimized),
        _ => None,
    }
}

fn cell_to_json(cell: Cell) -> serde_json::Value {
    serde_json::json!([cell.row, cell.col])
}

const fn token_class(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Comment => "comment",
        TokenKind::Blocked => "blocked",
        TokenKind::Walkable => "walkable",
        TokenKind::Start => "start",
        TokenKind::Newline => "newline",
        TokenKind::Whitespace => "whitespace",
    }
}

/// Tokenize a grid text for editor highlighting.
///
/// Returns a JSON array of spans the web shell maps onto CSS classes:
/// `[{"kind":"start","start":0,"end":1}, ...]`. Byte offsets index the
/// original input.
#[must_use]
#[wasm_bindgen]
pub fn tokenize_grid(grid_text: &str) -> String {
    let spans: Vec<serde_json::Value> = tokenize(grid_text)
        .iter()
        .map(|token| {
            serde_json::json!({
                "kind": token_class(&token.kind),
                "start": token.span.start,
                "end": token.span.end,
            })
        })
        .collect();
    serde_json::json!(spans).to_string()
}

/// Parse a grid text and solve it with the named strategy.
///
/// Returns a JSON string:
/// - On success: `{"ok":true,"path":[[r,c],...],"finish":[r,c]}`
/// - On an unsolvable instance: `{"ok":false,"error":{...}}`
/// - On invalid input: `{"ok":false,"error":"<description>"}`
#[must_use]
#[wasm_bindgen]
pub fn solve_grid(grid_text: &str, strategy: &str) -> String {
    let Some(strategy) = parse_strategy(strategy) else {
        return serde_json::json!({"ok": false, "error": "unknown strategy"}).to_string();
    };

    let matrix = match gridpath_parser::parse_grid(grid_text) {
        Ok(matrix) => matrix,
        Err(e) => {
            return serde_json::json!({"ok": false, "error": e.to_string()}).to_string();
        }
    };

    match solve_matrix(&matrix, strategy) {
        Ok(solution) => {
            let path: Vec<serde_json::Value> =
                solution.path.iter().copied().map(cell_to_json).collect();
            serde_json::json!({
                "ok": true,
                "path": path,
                "finish": cell_to_json(solution.finish)
            })
            .to_string()
        }
        Err(error) => serde_json::json!({"ok": false, "error": error}).to_string(),
    }
}

fn find_start(matrix: &[Vec<u8>]) -> Option<(usize, usize)> {
    matrix.iter().enumerate().find_map(|(r, row)| {
        row.iter()
            .position(|&code| code == 2)
            .map(|c| (r, c))
    })
}

/// Solve and return a rich trace suitable for web rendering.
///
/// The drawing layer consumes `(matrix, path, start, finish)`; this call
/// hands all of it back in one JSON object, along with grid dimensions
/// and the walkable cell count.
///
/// On success:
/// ```json
/// {
///   "ok": true,
///   "strategy": "optimized",
///   "rows": 3,
///   "cols": 4,
///   "walkable": 11,
///   "matrix": [[2,1,1,1],[1,0,1,1],[1,1,1,1]],
///   "start": [0, 0],
///   "finish": [2, 3],
///   "path": [[0,0], [0,1], ...]
/// }
/// ```
///
/// On failure the `path`/`finish` fields are replaced by an `error`
/// object. On invalid input: `{"ok": false, "error": "..."}`
#[must_use]
#[wasm_bindgen]
pub fn solve_grid_trace(grid_text: &str, strategy: &str) -> String {
    let Some(parsed_strategy) = parse_strategy(strategy) else {
        return serde_json::json!({"ok": false, "error": "unknown strategy"}).to_string();
    };

    let matrix = match gridpath_parser::parse_grid(grid_text) {
        Ok(matrix) => matrix,
        Err(e) => {
            return serde_json::json!({"ok": false, "error": e.to_string()}).to_string();
        }
    };

    let rows = matrix.len();
    let cols = matrix.first().map(Vec::len).unwrap_or_default();
    let walkable: usize = matrix
        .iter()
        .flatten()
        .filter(|&&code| code != 0)
        .count();
    let start = find_start(&matrix);

    match solve_matrix(&matrix, parsed_strategy) {
        Ok(solution) => {
            let path: Vec<serde_json::Value> =
                solution.path.iter().copied().map(cell_to_json).collect();
            serde_json::json!({
                "ok": true,
                "strategy": strategy,
                "rows": rows,
                "cols": cols,
                "walkable": walkable,
                "matrix": matrix,
                "start": start,
                "finish": cell_to_json(solution.finish),
                "path": path
            })
            .to_string()
        }
        Err(error) => serde_json::json!({
            "ok": false,
            "strategy": strategy,
            "rows": rows,
            "cols": cols,
            "walkable": walkable,
            "matrix": matrix,
            "start": start,
            "error": error
        })
        .to_string(),
    }
}
