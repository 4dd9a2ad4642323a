//! [Biconnected component](https://en.wikipedia.org/wiki/Biconnected_component)
//! decomposition of an induced subgraph.
//!
//! Tarjan's disc/low scheme with an explicit frame stack. Grid instances
//! routinely exceed 400 vertices, which blows the call stack of the
//! recursive formulation, so the walk keeps its own frames. A vertex
//! stack in discovery order emits one block each time an articulation is
//! found.

use alloc::vec;
use alloc::vec::Vec;

use crate::graph::bitset::BitSet;
use crate::graph::grid_graph::GridGraph;

const UNSET: usize = usize::MAX;

/// Result of scanning the subgraph induced by vertices outside a mask:
/// its cut vertices, its biconnected blocks as dense vertex lists, and
/// the number of connected components touched.
#[derive(Debug)]
pub struct BlockCut {
    pub cut_vertices: BitSet,
    pub blocks: Vec<Vec<usize>>,
    pub components: usize,
}

struct ScanFrame {
    vertex: usize,
    parent: usize,
    /// Cursor into the adjacency list of `vertex`.
    next: usize,
}

impl BlockCut {
    /// Scan the subgraph induced by vertices not in `masked`.
    #[must_use]
    pub fn scan(graph: &GridGraph, masked: &BitSet) -> Self {
        let n = graph.vertex_count();
        let mut disc = vec![UNSET; n];
        let mut low = vec![0usize; n];
        let mut cut_vertices = BitSet::with_capacity(n);
        let mut blocks: Vec<Vec<usize>> = Vec::new();
        let mut components = 0;
        let mut clock = 0usize;
        let mut vertex_stack: Vec<usize> = Vec::new();
        let mut frames: Vec<ScanFrame> = Vec::new();

        for root in 0..n {
            if masked.contains(root) || disc[root] != UNSET {
                continue;
            }
            components += 1;
            let mut root_children = 0usize;
            disc[root] = clock;
            low[root] = clock;
            clock += 1;
            vertex_stack.push(root);
            frames.push(ScanFrame {
                vertex: root,
                parent: UNSET,
                next: 0,
            });

            while let Some(frame) = frames.last_mut() {
                let v = frame.vertex;
                if let Some(entry) = graph.neighbors(v).get(frame.next) {
                    frame.next += 1;
                    let w = entry.vertex;
                    if masked.contains(w) || w == frame.parent {
                        continue;
                    }
                    if disc[w] == UNSET {
                        disc[w] = clock;
                        low[w] = clock;
                        clock += 1;
                        vertex_stack.push(w);
                        frames.push(ScanFrame {
                            vertex: w,
                            parent: v,
                            next: 0,
                        });
                    } else {
                        low[v] = low[v].min(disc[w]);
                    }
                    continue;
                }

                // every neighbour handled: fold this frame into its parent
                let parent = frame.parent;
                frames.pop();
                if parent == UNSET {
                    vertex_stack.pop();
                    continue;
                }
                if low[v] >= disc[parent] {
                    // parent separates v's subtree: emit the block
                    let mut block = Vec::new();
                    while let Some(&top) = vertex_stack.last() {
                        if disc[top] < disc[v] {
                            break;
                        }
                        vertex_stack.pop();
                        block.push(top);
                    }
                    block.push(parent);
                    blocks.push(block);
                    if parent != root {
                        cut_vertices.insert(parent);
                    }
                }
                low[parent] = low[parent].min(low[v]);
                if parent == root {
                    root_children += 1;
                }
            }

            if root_children > 1 {
                cut_vertices.insert(root);
            }
        }

        Self {
            cut_vertices,
            blocks,
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn graph_of(cells: &[(u32, u32)]) -> GridGraph {
        let mut cells: Vec<Cell> = cells.iter().map(|&(r, c)| Cell::new(r, c)).collect();
        cells.sort_unstable();
        GridGraph::from_cells(cells)
    }

    fn sorted_blocks(scan: &BlockCut) -> Vec<Vec<usize>> {
        let mut blocks: Vec<Vec<usize>> = scan
            .blocks
            .iter()
            .map(|b| {
                let mut b = b.clone();
                b.sort_unstable();
                b
            })
            .collect();
        blocks.sort();
        blocks
    }

    #[test]
    fn test_pair_has_no_cut() {
        let graph = graph_of(&[(0, 0), (0, 1)]);
        let scan = BlockCut::scan(&graph, &BitSet::with_capacity(2));
        assert_eq!(scan.components, 1);
        assert_eq!(scan.cut_vertices.count(), 0);
        assert_eq!(sorted_blocks(&scan), vec![vec![0, 1]]);
    }

    #[test]
    fn test_corridor_interior_is_cut() {
        // (0,0)-(0,1)-(0,2)-(0,3)
        let graph = graph_of(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let scan = BlockCut::scan(&graph, &BitSet::with_capacity(4));
        assert_eq!(scan.components, 1);
        assert!(scan.cut_vertices.contains(1));
        assert!(scan.cut_vertices.contains(2));
        assert!(!scan.cut_vertices.contains(0));
        assert!(!scan.cut_vertices.contains(3));
        assert_eq!(
            sorted_blocks(&scan),
            vec![vec![0, 1], vec![1, 2], vec![2, 3]]
        );
    }

    #[test]
    fn test_square_is_one_block() {
        let graph = graph_of(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let scan = BlockCut::scan(&graph, &BitSet::with_capacity(4));
        assert_eq!(scan.cut_vertices.count(), 0);
        assert_eq!(sorted_blocks(&scan), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_square_with_tail() {
        // 2x2 square plus a corridor hanging off (1,1):
        // ids: (0,0)=0 (0,1)=1 (1,0)=2 (1,1)=3 (1,2)=4 (1,3)=5
        let graph = graph_of(&[(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (1, 3)]);
        let scan = BlockCut::scan(&graph, &BitSet::with_capacity(6));
        assert_eq!(scan.components, 1);
        assert!(scan.cut_vertices.contains(3));
        assert!(scan.cut_vertices.contains(4));
        assert_eq!(scan.cut_vertices.count(), 2);
        assert_eq!(
            sorted_blocks(&scan),
            vec![vec![0, 1, 2, 3], vec![3, 4], vec![4, 5]]
        );
    }

    #[test]
    fn test_masked_vertices_split_components() {
        // corridor with its middle masked out
        let graph = graph_of(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let mut masked = BitSet::with_capacity(5);
        masked.insert(2);
        let scan = BlockCut::scan(&graph, &masked);
        assert_eq!(scan.components, 2);
        assert!(!scan.cut_vertices.contains(2));
    }

    #[test]
    fn test_isolated_vertex_is_a_component() {
        let graph = graph_of(&[(0, 0), (0, 2), (0, 3)]);
        let scan = BlockCut::scan(&graph, &BitSet::with_capacity(3));
        assert_eq!(scan.components, 2);
        assert_eq!(sorted_blocks(&scan), vec![vec![1, 2]]);
    }
}
