use std::fmt::{Debug, Display};

use crate::{Label, Node};

/// Edge weights. Unweighted input uses weight `1`.
pub type Weight = f64;

/// Weight assigned to edges without (or with an unusable) weight
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A labelled edge `source -> target` with a weight.
/// It is up to the caller whether the edge is treated as directed or not.
#[derive(Clone, PartialEq)]
pub struct WeightedEdge {
    pub source: Label,
    pub target: Label,
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates a new edge
    pub fn new<S: Into<Label>, T: Into<Label>>(source: S, target: T, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Creates a new edge with [`DEFAULT_WEIGHT`]
    pub fn unweighted<S: Into<Label>, T: Into<Label>>(source: S, target: T) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
        }
    }

    /// Returns a copy of the edge with its weight replaced
    pub fn with_weight(&self, weight: Weight) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}

/// Renders as `(source_target_weight)`, the token understood by the edge-list parser
impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}_{}_{})", self.source, self.target, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<S: Into<Label>, T: Into<Label>> From<(S, T, Weight)> for WeightedEdge {
    fn from(value: (S, T, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<S: Into<Label>, T: Into<Label>> From<(S, T)> for WeightedEdge {
    fn from(value: (S, T)) -> Self {
        WeightedEdge::unweighted(value.0, value.1)
    }
}

/// An edge between two (indexed) nodes together with its weight.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge(pub Node, pub Node, pub Weight);

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0, self.2)
    }
}

/// An entry of an adjacency list: the neighbor, the weight of the connecting edge and the
/// position of that edge in the input edge list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub target: Node,
    pub weight: Weight,
    pub edge_id: NumEdges,
}

impl Arc {
    pub fn new(target: Node, weight: Weight, edge_id: NumEdges) -> Self {
        Self {
            target,
            weight,
            edge_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_parser_token() {
        assert_eq!(WeightedEdge::new("a", "b", 5.0).to_string(), "(a_b_5)");
        assert_eq!(WeightedEdge::new("a", "b", 2.5).to_string(), "(a_b_2.5)");
        assert_eq!(WeightedEdge::new("x", "y", -2.0).to_string(), "(x_y_-2)");
    }

    #[test]
    fn loops_and_reverse() {
        let e = WeightedEdge::from(("a", "b", 3.0));
        assert!(!e.is_loop());
        assert_eq!(e.reverse(), WeightedEdge::new("b", "a", 3.0));
        assert!(WeightedEdge::unweighted("c", "c").is_loop());
        assert_eq!(WeightedEdge::from(("c", "d")).weight, DEFAULT_WEIGHT);
    }
}
