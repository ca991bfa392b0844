/*!
# Graph Algorithms

This module provides the classic graph algorithms on top of [`Adjacency`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```

Every algorithm is available in two flavours:
- as a trait method on the graph itself working on dense [`Node`] indices
  (e.g. `graph.bfs(start)` or `graph.dijkstra(source)`), and
- as a free function that takes an edge list and vertex labels, builds its own [`Adjacency`]
  and returns labels (e.g. `bfs(&edges, "a", true)`).

If possible, results are provided as **iterators**, making it easy to consume them lazily.

The [`Algorithm`] catalogue together with [`run_algorithm`] runs any of the algorithms on a
parsed [`GraphSpec`].
*/

mod all_pairs;
mod biconnected;
mod catalogue;
mod connectivity;
mod run;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{Result, prelude::*};

pub use all_pairs::*;
pub use biconnected::*;
pub use catalogue::*;
pub use connectivity::*;
pub use run::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
