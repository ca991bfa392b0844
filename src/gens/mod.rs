/*!
# Graph Generators

This module provides random edge-list generators. Vertices are labelled `a`, `b`, ..., `z`, `aa`,
`ab`, ... (see [`index_to_label`]) and the generated edges can be fed directly into any algorithm
or written as an edge list with [`stringify_edges`](crate::io::stringify_edges).

Generators are configured with the *Builder* pattern before calling `generate()`:

1. Create a generator instance (e.g., `RandomEdgeList::new()`).
2. Set parameters using the setters (e.g., `.vertices(n).edges(m).connected(true)`).
3. Generate a graph via `generate(&mut rng)`.
*/

use rand::Rng;

use crate::prelude::*;

mod random_edges;

pub use random_edges::*;

/// Trait for generators that allow setting the number of vertices.
pub trait NumVerticesGen: Sized {
    /// Sets the number of vertices in the graph generator.
    fn set_vertices(&mut self, n: NumNodes);

    /// Builder variant of [`NumVerticesGen::set_vertices`]
    fn vertices(mut self, n: NumNodes) -> Self {
        self.set_vertices(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the (requested) number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Builder variant of [`NumEdgesGen::set_edges`]
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random graph generator.
pub trait GraphGenerator {
    /// Generates a random labelled graph
    fn generate<R>(&self, rng: &mut R) -> GeneratedGraph
    where
        R: Rng;
}

/// A generated graph: all vertex labels (including isolated vertices) and the edges
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedGraph {
    pub vertices: Vec<Label>,
    pub edges: Vec<WeightedEdge>,
}

impl GeneratedGraph {
    /// Edges in the EdgeList-Format
    pub fn edge_text(&self) -> String {
        stringify_edges(&self.edges)
    }

    /// Comma-separated vertex labels, readable by [`parse_vertices`]
    pub fn vertex_text(&self) -> String {
        self.vertices.join(", ")
    }
}

/// Converts a zero-based index into a spreadsheet-style label:
/// `0 -> a`, `25 -> z`, `26 -> aa`, `27 -> ab`, ..., `701 -> zz`, `702 -> aaa`.
pub fn index_to_label(index: usize) -> Label {
    let mut chars = Vec::new();
    let mut rem = index + 1;
    while rem > 0 {
        rem -= 1;
        chars.push((b'a' + (rem % 26) as u8) as char);
        rem /= 26;
    }
    chars.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(index_to_label(0), "a");
        assert_eq!(index_to_label(25), "z");
        assert_eq!(index_to_label(26), "aa");
        assert_eq!(index_to_label(27), "ab");
        assert_eq!(index_to_label(51), "az");
        assert_eq!(index_to_label(52), "ba");
        assert_eq!(index_to_label(701), "zz");
        assert_eq!(index_to_label(702), "aaa");
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels = (0..2000).map(index_to_label).collect::<Vec<_>>();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 2000);
    }
}
