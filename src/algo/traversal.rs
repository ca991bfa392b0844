/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Breadth-first and depth-first traversal iterators over the nodes reachable from a start node.
- Topological ordering for directed acyclic graphs (Kahn's algorithm).
- A high-level `Traversal` trait that exposes these directly as methods on graphs, and
  label-level functions that take an edge list and return labels.

Both traversals visit neighbors in adjacency order, i.e. in the order the edges were declared,
which makes the produced orders deterministic.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Returns *true* if `u` has already been discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let discovered = self.visited.iter().filter(|&&x| x).count();
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - discovered),
        )
    }
}

/// A DFS traversal iterator yielding nodes in pre-order, exactly as a recursive DFS that
/// descends into neighbors in adjacency order would. The recursion is simulated with an
/// explicit call stack, so deep graphs cannot overflow the native stack.
pub struct Dfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    /// `(node, index of the next arc to inspect)`
    call_stack: Vec<(Node, usize)>,
    start: Option<Node>,
}

impl<'a, G> Dfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!((start as usize) < graph.len());
        Self {
            graph,
            visited: vec![false; graph.len()],
            call_stack: Vec::with_capacity(32),
            start: Some(start),
        }
    }
}

impl<G> Iterator for Dfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(s) = self.start.take() {
            self.visited[s as usize] = true;
            self.call_stack.push((s, 0));
            return Some(s);
        }

        while let Some(frame) = self.call_stack.last_mut() {
            let (u, pos) = *frame;
            let arcs = self.graph.arcs_of(u);

            match arcs[pos..]
                .iter()
                .position(|a| !self.visited[a.target as usize])
            {
                Some(offset) => {
                    frame.1 = pos + offset + 1;
                    let v = arcs[pos + offset].target;
                    self.visited[v as usize] = true;
                    self.call_stack.push((v, 0));
                    return Some(v);
                }
                None => {
                    self.call_stack.pop();
                }
            }
        }

        None
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses Kahn's algorithm:
/// - Initializes a FIFO queue with all nodes of in-degree 0 (in node order).
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle prevents further progress.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    fn new(graph: &'a G) -> Self {
        let mut in_degs: Vec<NumNodes> = vec![0; graph.len()];
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }

        let queue = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    /// Returns the next node in topological order, if available.
    ///
    /// - Each returned node is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration will terminate early without
    ///   covering all nodes.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Adjacency::from_edges(&parse_edges("ab, ac, bd", true), true);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(g.labels_of(order), vec!["a", "b", "c", "d"]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Adjacency::from_edges(&parse_edges("ab, ac, bd", true), true);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(g.labels_of(order), vec!["a", "b", "d", "c"]);
    /// ```
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns all nodes in topological order or [`GraphError::CycleDetected`] if some
    /// nodes could not be ordered.
    fn topological_sort(&self) -> Result<Vec<Node>> {
        let order: Vec<Node> = self.topo_search().collect();
        if order.len() == self.len() {
            Ok(order)
        } else {
            Err(GraphError::CycleDetected)
        }
    }

    /// Returns `true` if the directed graph is **acyclic**.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// Visits all vertices reachable from `start` in BFS order and returns their labels.
///
/// Returns [`GraphError::VertexNotFound`] if no edge references `start`.
pub fn bfs(edges: &[WeightedEdge], start: &str, directed: bool) -> Result<Vec<Label>> {
    let graph = Adjacency::from_edges(edges, directed);
    let start = graph.try_node_of(start)?;
    Ok(graph.labels_of(graph.bfs(start)))
}

/// Visits all vertices reachable from `start` in DFS pre-order and returns their labels.
///
/// Returns [`GraphError::VertexNotFound`] if no edge references `start`.
pub fn dfs(edges: &[WeightedEdge], start: &str, directed: bool) -> Result<Vec<Label>> {
    let graph = Adjacency::from_edges(edges, directed);
    let start = graph.try_node_of(start)?;
    Ok(graph.labels_of(graph.dfs(start)))
}

/// Orders the vertices of a directed graph such that every edge points forward.
///
/// Returns [`GraphError::CycleDetected`] instead of a partial order if the graph has a cycle.
pub fn topological_sort(edges: &[WeightedEdge]) -> Result<Vec<Label>> {
    let graph = Adjacency::from_edges(edges, true);
    let order = graph.topological_sort()?;
    Ok(graph.labels_of(order))
}
