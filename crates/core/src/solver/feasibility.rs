//! Feasibility oracle: the static pre-check run before every search and
//! the incremental block-cut test used by the validation strategies.
//!
//! # Static pre-check
//!
//! Run once per solve, on the full graph:
//!
//! 1. Connectivity -- the walkable cells must form one component.
//! 2. Leaf census -- at most one non-start vertex of degree 1; a unique
//!    one becomes the forced finish.
//! 3. Parity -- colours alternate along a path, so the forced finish
//!    must sit on the colour class matching the cell count.
//! 4. The start must not be a cut vertex.
//! 5. No cut vertex may split the graph into more than two sides.
//!
//! # Incremental test
//!
//! At an expanded frame, the remaining subgraph (unvisited vertices plus
//! the path head) must be connected, the head must not be a cut vertex
//! of it, and every biconnected block may hold at most two cut vertices
//! -- one if the block contains the head, since the remaining traversal
//! starts inside it. A path enters and leaves a block through cut
//! vertices, each crossed exactly once.

use alloc::vec::Vec;

use crate::graph::biconnected::BlockCut;
use crate::graph::bitset::BitSet;
use crate::graph::grid_graph::GridGraph;
use crate::solver::error::Infeasible;

/// Verdict of the static pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feasibility {
    /// Finish forced by a unique non-start leaf, if any.
    pub forced_finish: Option<usize>,
}

/// Parity rule between the path head and a prospective finish.
///
/// `remaining` counts the vertices of the remaining path, head and
/// finish included. Colours alternate along the path, so an even count
/// needs opposite endpoint colours and an odd count equal ones.
pub(crate) fn parity_allows(
    graph: &GridGraph,
    head: usize,
    finish: usize,
    remaining: usize,
) -> bool {
    let same = graph.cell(head).color() == graph.cell(finish).color();
    if remaining % 2 == 0 {
        !same
    } else {
        same
    }
}

/// Run the static pre-check.
///
/// # Errors
///
/// Returns the first [`Infeasible`] rule the instance violates.
pub fn static_check(graph: &GridGraph, start: usize) -> Result<Feasibility, Infeasible> {
    let n = graph.vertex_count();
    let scan = BlockCut::scan(graph, &BitSet::with_capacity(n));

    if scan.components > 1 {
        return Err(Infeasible::Disconnected {
            components: scan.components,
        });
    }

    let leaves: Vec<usize> = (0..n)
        .filter(|&v| v != start && graph.degree(v) == 1)
        .collect();
    if leaves.len() > 1 {
        return Err(Infeasible::ExtraLeaves {
            count: leaves.len(),
        });
    }
    let forced_finish = leaves.first().copied();
    if let Some(finish) = forced_finish {
        if !parity_allows(graph, start, finish, n) {
            return Err(Infeasible::ParityMismatch {
                start: graph.cell(start),
                finish: graph.cell(finish),
            });
        }
    }

    if scan.cut_vertices.contains(start) {
        return Err(Infeasible::StartIsCut {
            start: graph.cell(start),
        });
    }

    for v in 0..n {
        if !scan.cut_vertices.contains(v) {
            continue;
        }
        let mut mask = BitSet::with_capacity(n);
        mask.insert(v);
        let components = graph.component_count(&mask);
        if components > 2 {
            return Err(Infeasible::CutSplitsThree {
                cut: graph.cell(v),
                components,
            });
        }
    }

    tracing::trace!(vertices = n, ?forced_finish, "static pre-check passed");
    Ok(Feasibility { forced_finish })
}

/// Block-cut feasibility of the remaining subgraph at `head`.
#[must_use]
pub fn remaining_traversable(graph: &GridGraph, visited: &BitSet, head: usize) -> bool {
    let mut mask = visited.clone();
    mask.remove(head);
    let scan = BlockCut::scan(graph, &mask);

    if scan.components > 1 {
        return false;
    }
    if scan.cut_vertices.contains(head) {
        return false;
    }
    scan.blocks.iter().all(|block| {
        let cuts = block
            .iter()
            .filter(|&&v| scan.cut_vertices.contains(v))
            .count();
        let limit = if block.contains(&head) { 1 } else { 2 };
        cuts <= limit
    })
}
