/*!
# Minimum Spanning Trees

Lazy variant of Prim's algorithm. The graph is always treated as undirected, i.e. a directed edge
`(u, v)` may be used to connect `u` and `v` in either direction.

The tree is grown from a single root, so for disconnected graphs only the component of the root
is spanned.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use log::warn;

use super::*;

/// Result of a minimum spanning tree computation
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Tree edges in the order they were chosen, oriented away from the root
    pub edges: Vec<WeightedEdge>,
    /// Sum of the weights of all tree edges
    pub total_weight: Weight,
    /// *true* if all edges were treated as having weight [`DEFAULT_WEIGHT`]
    pub weights_ignored: bool,
}

/// Edge leaving the tree; ties are broken by insertion order
#[derive(Debug, Copy, Clone, PartialEq)]
struct Frontier {
    weight: Weight,
    seq: usize,
    from: Node,
    to: Node,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub trait SpanningTrees: AdjacencyList + Sized {
    /// Computes a minimum spanning tree of the component containing `root` and returns its
    /// edges in the order they were added, each oriented as `Edge(tree node, new node, weight)`.
    /// If `use_weights` is *false*, all edges are treated as having weight [`DEFAULT_WEIGHT`].
    /// ** Panics if `root >= n` **
    fn prim(&self, root: Node, use_weights: bool) -> Vec<Edge> {
        let mut in_tree = vec![false; self.len()];
        let mut heap = BinaryHeap::new();
        let mut seq = 0;
        let mut tree = Vec::with_capacity(self.len().saturating_sub(1));

        let mut enqueue = |heap: &mut BinaryHeap<Frontier>, in_tree: &[bool], u: Node| {
            for arc in self.undirected_arcs_of(u) {
                if !in_tree[arc.target as usize] {
                    heap.push(Frontier {
                        weight: if use_weights { arc.weight } else { DEFAULT_WEIGHT },
                        seq,
                        from: u,
                        to: arc.target,
                    });
                    seq += 1;
                }
            }
        };

        in_tree[root as usize] = true;
        enqueue(&mut heap, &in_tree, root);

        while let Some(Frontier { weight, from, to, .. }) = heap.pop() {
            if in_tree[to as usize] {
                continue;
            }

            in_tree[to as usize] = true;
            tree.push(Edge(from, to, weight));
            enqueue(&mut heap, &in_tree, to);
        }

        tree
    }
}

impl<G> SpanningTrees for G where G: AdjacencyList + Sized {}

/// Computes a minimum spanning tree of the graph given by `edges`, ignoring edge orientation.
/// The tree is rooted at the first vertex of the edge list and spans its component.
///
/// If `weighted` is *false*, every edge is treated as having weight [`DEFAULT_WEIGHT`] and the
/// result reports `weights_ignored`. Returns `None` if there are no edges.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let edges = parse_edges("(a_b_4), (b_c_1), (a_c_2)", false);
/// let tree = minimum_spanning_tree(&edges, true).unwrap();
///
/// assert_eq!(tree.total_weight, 3.0);
/// assert_eq!(stringify_edges(&tree.edges), "(a_c_2), (c_b_1)");
/// ```
pub fn minimum_spanning_tree(edges: &[WeightedEdge], weighted: bool) -> Option<SpanningTree> {
    if !weighted {
        warn!("Graph is unweighted; every edge is treated as having weight {DEFAULT_WEIGHT}");
    }

    let graph = Adjacency::from_edges(edges, false);
    if graph.is_empty() {
        return None;
    }

    let tree = graph.prim(0, weighted);
    Some(SpanningTree {
        total_weight: tree.iter().map(|e| e.2).sum(),
        edges: tree.into_iter().map(|e| graph.labelled_edge(e)).collect(),
        weights_ignored: !weighted,
    })
}
