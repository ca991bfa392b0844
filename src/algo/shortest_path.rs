/*!
# Single-Source Shortest Paths

Dijkstra's algorithm for graphs with non-negative weights and Bellman-Ford for graphs that may
contain negative weights. Both produce a [`ShortestPaths`] table that stores, for every vertex of
the graph, its distance from the source and its predecessor on a shortest path.

Vertices that cannot be reached from the source report a distance of `None` and have no path.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use log::warn;

use super::*;

/// Distances and predecessors of all vertices with respect to a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    labels: Vec<Label>,
    distances: Vec<Weight>,
    predecessors: Vec<Node>,
}

/// One row of a [`ShortestPaths`] table.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry<'a> {
    pub vertex: &'a str,
    /// `None` if the vertex is unreachable
    pub distance: Option<Weight>,
    /// Vertices from the source to `vertex` (both inclusive); `None` if unreachable
    pub path: Option<Vec<&'a str>>,
}

impl ShortestPaths {
    fn new<G: Labelled>(graph: &G, source: Node) -> Self {
        let mut distances = vec![Weight::INFINITY; graph.len()];
        distances[source as usize] = 0.0;

        Self {
            source,
            labels: graph.labels_of(graph.vertices()),
            distances,
            predecessors: vec![INVALID_NODE; graph.len()],
        }
    }

    /// Sets the distance of `v` to `distance` via `u` if this is an improvement.
    /// Returns *true* on improvement.
    fn relax(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        let alt = self.distances[u as usize] + weight;
        if alt < self.distances[v as usize] {
            self.distances[v as usize] = alt;
            self.predecessors[v as usize] = u;
            true
        } else {
            false
        }
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|u| u as Node)
    }

    fn distance(&self, u: Node) -> Option<Weight> {
        let d = self.distances[u as usize];
        d.is_finite().then_some(d)
    }

    fn path(&self, u: Node) -> Option<Vec<&str>> {
        self.distance(u)?;

        let mut path = vec![self.labels[u as usize].as_str()];
        let mut current = u;
        while current != self.source && path.len() <= self.labels.len() {
            current = self.predecessors[current as usize];
            if current == INVALID_NODE {
                return None;
            }
            path.push(self.labels[current as usize].as_str());
        }

        if current != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the label of the source vertex
    pub fn source(&self) -> &str {
        &self.labels[self.source as usize]
    }

    /// Returns the number of vertices in the table
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if the table has no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the length of a shortest path from the source to `vertex`.
    /// Returns `None` if `vertex` is unknown or unreachable.
    pub fn distance_to(&self, vertex: &str) -> Option<Weight> {
        self.distance(self.node_of(vertex)?)
    }

    /// Returns the vertex preceding `vertex` on a shortest path from the source.
    pub fn predecessor_of(&self, vertex: &str) -> Option<&str> {
        let u = self.node_of(vertex)?;
        let p = self.predecessors[u as usize];
        (p != INVALID_NODE).then(|| self.labels[p as usize].as_str())
    }

    /// Reconstructs a shortest path from the source to `vertex` by following predecessors.
    pub fn path_to(&self, vertex: &str) -> Option<Vec<&str>> {
        self.path(self.node_of(vertex)?)
    }

    /// Iterates over all vertices in graph order together with their distance and path.
    pub fn entries(&self) -> impl Iterator<Item = PathEntry<'_>> + '_ {
        (0..self.labels.len() as Node).map(|u| PathEntry {
            vertex: &self.labels[u as usize],
            distance: self.distance(u),
            path: self.path(u),
        })
    }
}

/// Entry of the priority queue ordered by *smallest* distance first
#[derive(Debug, Copy, Clone, PartialEq)]
struct Candidate {
    distance: Weight,
    node: Node,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path computations from a single source node.
pub trait SingleSourceShortestPaths: AdjacencyList + Labelled {
    /// Computes shortest paths from `source` using Dijkstra's algorithm.
    ///
    /// Every node is settled exactly once, so the computation terminates even if the graph
    /// contains negative weights; the distances are then not guaranteed to be minimal.
    /// ** Panics if `source >= n` **
    fn dijkstra(&self, source: Node) -> ShortestPaths {
        if self.edges().iter().any(|e| e.2 < 0.0) {
            warn!("Dijkstra's algorithm on negative weights may report non-minimal distances");
        }

        let mut paths = ShortestPaths::new(self, source);
        let mut settled = vec![false; self.len()];
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            distance: 0.0,
            node: source,
        });

        while let Some(Candidate { node: u, .. }) = heap.pop() {
            if settled[u as usize] {
                continue;
            }
            settled[u as usize] = true;

            for arc in self.arcs_of(u) {
                if !settled[arc.target as usize] && paths.relax(u, arc.target, arc.weight) {
                    heap.push(Candidate {
                        distance: paths.distances[arc.target as usize],
                        node: arc.target,
                    });
                }
            }
        }

        paths
    }

    /// Computes shortest paths from `source` using the Bellman-Ford algorithm.
    /// Undirected edges are relaxed in both orientations.
    ///
    /// Returns [`GraphError::NegativeCycle`] if a cycle of negative total weight is reachable
    /// from `source`.
    /// ** Panics if `source >= n` **
    fn bellman_ford(&self, source: Node) -> Result<ShortestPaths> {
        let mut paths = ShortestPaths::new(self, source);
        let undirected = self.is_undirected();

        let relax_all = |paths: &mut ShortestPaths| {
            let mut updated = false;
            for &Edge(u, v, w) in self.edges() {
                if paths.distances[u as usize].is_finite() {
                    updated |= paths.relax(u, v, w);
                }
                if undirected && paths.distances[v as usize].is_finite() {
                    updated |= paths.relax(v, u, w);
                }
            }
            updated
        };

        for _ in 1..self.len() {
            if !relax_all(&mut paths) {
                return Ok(paths);
            }
        }

        if relax_all(&mut paths) {
            return Err(GraphError::NegativeCycle);
        }

        Ok(paths)
    }
}

impl<G> SingleSourceShortestPaths for G where G: AdjacencyList + Labelled {}

/// Runs Dijkstra's algorithm from `start` on the graph given by `edges` and the additional
/// (possibly isolated) `vertices`.
///
/// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex of the graph.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let edges = parse_edges("(a_b_1), (b_c_2), (a_c_5)", true);
/// let paths = dijkstra(&edges, "a", &[], true).unwrap();
///
/// assert_eq!(paths.distance_to("c"), Some(3.0));
/// assert_eq!(paths.path_to("c"), Some(vec!["a", "b", "c"]));
/// ```
pub fn dijkstra(
    edges: &[WeightedEdge],
    start: &str,
    vertices: &[Label],
    directed: bool,
) -> Result<ShortestPaths> {
    let graph = Adjacency::from_edges_and_vertices(edges, vertices, directed);
    let start = graph.try_node_of(start)?;
    Ok(graph.dijkstra(start))
}

/// Runs the Bellman-Ford algorithm from `start` on the graph given by `edges` and the
/// additional (possibly isolated) `vertices`.
///
/// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex of the graph and
/// [`GraphError::NegativeCycle`] if distances cannot be determined.
pub fn bellman_ford(
    edges: &[WeightedEdge],
    start: &str,
    vertices: &[Label],
    directed: bool,
) -> Result<ShortestPaths> {
    let graph = Adjacency::from_edges_and_vertices(edges, vertices, directed);
    let start = graph.try_node_of(start)?;
    graph.bellman_ford(start)
}
