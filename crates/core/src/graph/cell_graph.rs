//! Adjacency-map input form for pre-built grids.
//!
//! Callers that already know their walkable cells and neighbour links
//! (rather than holding a matrix) describe them here and hand the
//! result to [`solve_graph`](crate::solve_graph). Links are stored in
//! both directions, so adjacency is symmetric by construction, and the
//! accessors iterate in (row, col) order so the dense re-indexing in
//! [`GridGraph::from_cell_graph`] matches the matrix-built graph.
//!
//! [`GridGraph::from_cell_graph`]: crate::graph::grid_graph::GridGraph::from_cell_graph

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::grid::Cell;

/// Walkable cells and the links between them.
#[derive(Default, Debug, Clone)]
pub struct CellGraph {
    adjacency: HashMap<Cell, HashSet<Cell>>,
}

impl CellGraph {
    /// Add a walkable cell with no links yet.
    pub fn add_cell(&mut self, row: u32, col: u32) {
        self.adjacency.entry(Cell::new(row, col)).or_default();
    }

    /// Link two cells, adding either if missing.
    pub fn link(&mut self, a: Cell, b: Cell) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Link the cells at two coordinate pairs.
    pub fn link_coords(&mut self, a: (u32, u32), b: (u32, u32)) {
        self.link(Cell::new(a.0, a.1), Cell::new(b.0, b.1));
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.adjacency.contains_key(&cell)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Every cell, in (row, col) order.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.adjacency.keys().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Cells linked to `cell`, in (row, col) order. Empty when the cell
    /// is unknown or isolated.
    #[must_use]
    pub fn links_of(&self, cell: Cell) -> Vec<Cell> {
        let mut links: Vec<Cell> = self
            .adjacency
            .get(&cell)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
            .collect();
        links.sort_unstable();
        links
    }
}
