/*!
# Errors

Two kinds of problems are distinguished:
- [`GraphError`] aborts a single algorithm invocation and produces no result.
- [`ParseIssue`] is a recoverable problem with one token of an edge list. The parser skips or
  repairs the token, records the issue and carries on with the remaining tokens.

Neither leaves any state behind; subsequent calls are unaffected.
*/

use thiserror::Error;

use crate::{Label, Weight};

/// Conditions under which an algorithm refuses to produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The requested start vertex is not part of the graph
    #[error("Vertex {0} not found.")]
    VertexNotFound(Label),

    /// Bellman-Ford found an edge that can still be relaxed after `|V| - 1` passes
    #[error("Graph contains a negative-weight cycle reachable from the source.")]
    NegativeCycle,

    /// Topological sort was asked to order a graph that is not a DAG
    #[error("Graph has at least one cycle.")]
    CycleDetected,

    /// An algorithm that needs a start vertex was dispatched without one
    #[error("{0} requires a start vertex.")]
    MissingStartVertex(&'static str),
}

/// Recoverable problems found while parsing an edge list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseIssue {
    /// The token matches none of the accepted shapes and was dropped
    #[error("Invalid edge format: {token}")]
    MalformedEdgeToken { token: String },

    /// The weight of the token could not be parsed and was replaced by `weight`
    #[error("Invalid weight in {token}; using {weight}")]
    InvalidWeight { token: String, weight: Weight },
}

impl ParseIssue {
    /// Returns the offending token
    pub fn token(&self) -> &str {
        match self {
            ParseIssue::MalformedEdgeToken { token } | ParseIssue::InvalidWeight { token, .. } => {
                token
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
