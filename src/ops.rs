/*!
# Graph Operations

Traits describing what the algorithms in [`algo`](crate::algo) need from a graph. They are
implemented by [`Adjacency`](crate::repr::Adjacency); the algorithms themselves are provided as
extension traits with blanket implementations over these.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edges of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the edges in the order they were added.
    /// For undirected graphs each edge is reported once, in its declared orientation.
    fn edges(&self) -> &[Edge];

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Whether the edges of the graph have an orientation
pub trait GraphType {
    /// Returns *true* if `Edge(u, v, _)` and `Edge(v, u, _)` are distinct
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are traversable in both directions
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for (weighted) neighborhoods
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + GraphType + Sized {
    /// Returns the outgoing arcs of `u` in insertion order.
    /// For undirected graphs these are all incident edges.
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: Node) -> &[Arc];

    /// Returns the incoming arcs of `u` in insertion order; each arc's `target` is the
    /// source of the corresponding edge. For undirected graphs this equals [`AdjacencyList::arcs_of`].
    /// ** Panics if `u >= n` **
    fn in_arcs_of(&self, u: Node) -> &[Arc];

    /// Returns an iterator over the (out-)neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs_of(u).iter().map(|a| a.target)
    }

    /// Returns an iterator over the in-neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_arcs_of(u).iter().map(|a| a.target)
    }

    /// Returns all arcs incident to `u` ignoring orientation, ordered by the position of their
    /// edge in the input. A self-loop of a directed graph is reported twice.
    /// ** Panics if `u >= n` **
    fn undirected_arcs_of(&self, u: Node) -> impl Iterator<Item = Arc> + '_ {
        let incoming: &[Arc] = if self.is_directed() {
            self.in_arcs_of(u)
        } else {
            &[]
        };

        self.arcs_of(u)
            .iter()
            .merge_by(incoming.iter(), |a, b| a.edge_id <= b.edge_id)
            .copied()
    }

    /// Returns the number of outgoing arcs of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.arcs_of(u).len() as NumNodes
    }

    /// Returns the number of incoming arcs of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_arcs_of(u).len() as NumNodes
    }
}

/// Mapping between dense node indices and the caller's vertex labels
pub trait Labelled: GraphNodeOrder {
    /// Returns the label of `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns the node carrying `label` if there is one
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Like [`Labelled::node_of`] but reports a missing vertex as [`GraphError::VertexNotFound`]
    fn try_node_of(&self, label: &str) -> Result<Node> {
        self.node_of(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    /// Translates a sequence of nodes into owned labels
    fn labels_of<I>(&self, nodes: I) -> Vec<Label>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.label_of(u).to_string())
            .collect()
    }

    /// Converts an indexed edge back into a labelled one
    fn labelled_edge(&self, Edge(u, v, w): Edge) -> WeightedEdge {
        WeightedEdge::new(self.label_of(u), self.label_of(v), w)
    }
}
