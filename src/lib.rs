/*!
`wgraphs` is a graph algorithms library for small graphs that are
- **w**eighted : Every edge carries an `f64` weight (`1` if none is given)
- labelled : Vertices are identified by arbitrary strings such as `"a"` or `"B12"`
- directed or undirected : Chosen per graph

Graphs are entered as comma-separated edge lists like `ab5, (b_c_2), (c_a_-1)` and the classic
textbook algorithms are run on them: traversals, shortest paths, spanning trees, topological
orders and components.

# Representation

At the boundary, an edge is a [`WeightedEdge`] with `String` labels. Internally, we represent
**nodes** as `u32` in the range `0..n`, assigned in order of first appearance, and store per-node
adjacency lists in [`Adjacency`](crate::repr::Adjacency). Every algorithm builds its own
adjacency from the edge list, so calls are independent of each other.

### Directed vs Undirected

- In an **undirected** graph, the edge `(u, v)` can be traversed in both directions.
- In a **directed** graph, the edge has orientation, so `(u, v)` and `(v, u)` are distinct.

Spanning trees and biconnected components always ignore orientation.

# Design

Algorithms are provided as traits that are implemented on graphs themselves, e.g.
`graph.bfs(start)` or `graph.dijkstra(source)`. In addition, every algorithm is available as a
free function taking an edge list and returning labels, e.g. `dijkstra(&edges, "a", &[], true)`.
Parsers, writers and generators are configurable structs using the *Builder* pattern.

Conditions under which an algorithm cannot produce a result (unknown start vertex, negative cycle,
cyclic input to a topological sort) are reported as [`GraphError`]. Problems with single tokens of
an edge list never abort parsing; they are collected as [`ParseIssue`]s and logged through the
[`log`] facade.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, the graph
  representation and the edge-list parser,
- [`algo`] includes all algorithms, the [`Algorithm`](algo::Algorithm) catalogue and
  [`run_algorithm`](algo::run_algorithm),
- [`gens`] includes a random edge-list generator,
- [`io`] includes the edge-list parser and writers for edge lists and algorithm results.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let edges = parse_edges("(a_b_1), (b_c_2), (a_c_5)", true);

assert_eq!(bfs(&edges, "a", true).unwrap(), vec!["a", "b", "c"]);
assert_eq!(dijkstra(&edges, "a", &[], true).unwrap().distance_to("c"), Some(3.0));
assert_eq!(bfs(&edges, "x", true), Err(GraphError::VertexNotFound("x".into())));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, ParseIssue, Result};
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits, the graph representation and the edge-list IO.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, ParseIssue},
        io::*,
        node::*,
        ops::*,
        repr::*,
    };
}
