use fxhash::FxHashSet;
use log::debug;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Uniform};

use super::*;

/// Generator for random labelled edge lists with integer weights.
///
/// The generator can be parameterized via:
/// - `.vertices(n)` : number of vertices, labelled by [`index_to_label`]
/// - `.edges(m)` : requested number of edges
/// - `.directed(bool)` : whether `(u, v)` and `(v, u)` are different edges
/// - `.self_loops(bool)` : whether edges `(u, u)` may be drawn
/// - `.connected(bool)` : whether a spanning path over all vertices is laid first
/// - `.weights(min, max)` : inclusive range of the uniformly drawn weights
///
/// The requested number of edges is raised to `n - 1` for connected graphs and lowered to the
/// number of possible edges of a simple graph. No pair of vertices is connected twice.
///
/// # Examples
/// ```
/// use wgraphs::{gens::*, prelude::*};
///
/// let mut rng = rand::rng();
/// let graph = RandomEdgeList::new()
///     .vertices(5)
///     .edges(6)
///     .connected(true)
///     .weights(1, 9)
///     .generate(&mut rng);
///
/// assert_eq!(graph.vertices, vec!["a", "b", "c", "d", "e"]);
/// assert_eq!(graph.edges.len(), 6);
/// assert_eq!(parse_edges(&graph.edge_text(), true), graph.edges);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RandomEdgeList {
    n: NumNodes,
    m: NumEdges,
    directed: bool,
    self_loops: bool,
    connected: bool,
    min_weight: i64,
    max_weight: i64,
}

impl Default for RandomEdgeList {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            directed: true,
            self_loops: false,
            connected: false,
            min_weight: 1,
            max_weight: 10,
        }
    }
}

impl RandomEdgeList {
    /// Creates a new generator for an empty, directed graph with weights in `1..=10`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the graph as directed (or not).
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Allows (or forbids) self-loops.
    pub fn self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Ensures that the underlying undirected graph is connected.
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    /// Sets the inclusive range of edge weights. The bounds may be given in any order.
    pub fn weights(mut self, min: i64, max: i64) -> Self {
        self.min_weight = min.min(max);
        self.max_weight = min.max(max);
        self
    }

    /// Maximum number of edges of a simple graph with the current settings
    fn max_edges(&self) -> u64 {
        let n = self.n as u64;
        let pairs = if self.directed {
            n * n.saturating_sub(1)
        } else {
            n * n.saturating_sub(1) / 2
        };

        if self.self_loops { pairs + n } else { pairs }
    }

    /// Requested number of edges adjusted to what is possible and required
    fn target_edges(&self) -> usize {
        let mut m = self.m as u64;

        let min_edges = (self.n as u64).saturating_sub(1);
        if self.connected && m < min_edges {
            debug!("Connectivity requires at least {min_edges} edges; raising from {m}");
            m = min_edges;
        }

        let max_edges = self.max_edges();
        if m > max_edges {
            debug!("A simple graph has at most {max_edges} edges; lowering from {m}");
            m = max_edges;
        }

        m as usize
    }
}

impl NumVerticesGen for RandomEdgeList {
    fn set_vertices(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomEdgeList {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for RandomEdgeList {
    /// Generates a random graph.
    ///
    /// If connected, a spanning path along a random permutation of all vertices is laid first.
    /// Remaining edges are drawn uniformly at random; draws that would create a forbidden
    /// self-loop or connect an already connected pair are rejected. At most `10 * m` draws are
    /// made, so for dense requests the graph may end up with fewer edges.
    fn generate<R>(&self, rng: &mut R) -> GeneratedGraph
    where
        R: Rng,
    {
        let (Ok(vertex_gen), Ok(weight_gen)) = (
            Uniform::new(0, self.n),
            Uniform::new_inclusive(self.min_weight, self.max_weight),
        ) else {
            return GeneratedGraph::default();
        };

        let vertices = (0..self.n as usize).map(index_to_label).collect::<Vec<_>>();
        let m = self.target_edges();

        let mut used: FxHashSet<(Node, Node)> = FxHashSet::default();
        let mut edges = Vec::with_capacity(m);

        let weighted_edge = |rng: &mut R, u: Node, v: Node| {
            WeightedEdge::new(
                vertices[u as usize].clone(),
                vertices[v as usize].clone(),
                weight_gen.sample(rng) as Weight,
            )
        };

        if self.connected && self.n > 1 {
            let mut order = (0..self.n).collect::<Vec<Node>>();
            order.shuffle(rng);
            for w in order.windows(2) {
                used.insert((w[0], w[1]));
                edges.push(weighted_edge(rng, w[0], w[1]));
            }
        }

        let mut attempts = 0;
        while edges.len() < m && attempts < 10 * m {
            attempts += 1;

            let u = vertex_gen.sample(rng);
            let v = vertex_gen.sample(rng);
            if u == v && !self.self_loops {
                continue;
            }
            if used.contains(&(u, v)) || (!self.directed && used.contains(&(v, u))) {
                continue;
            }

            used.insert((u, v));
            edges.push(weighted_edge(rng, u, v));
        }

        if edges.len() < m {
            debug!("Generated {} of {m} edges after {attempts} attempts", edges.len());
        }

        GeneratedGraph { vertices, edges }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::algo::*;

    #[test]
    fn empty_graph() {
        let rng = &mut Pcg64::seed_from_u64(1);
        let graph = RandomEdgeList::new().edges(10).generate(rng);
        assert_eq!(graph, GeneratedGraph::default());
    }

    #[test]
    fn single_vertex() {
        let rng = &mut Pcg64::seed_from_u64(2);

        let graph = RandomEdgeList::new().vertices(1).edges(3).connected(true).generate(rng);
        assert_eq!(graph.vertices, vec!["a"]);
        assert!(graph.edges.is_empty());

        let graph = RandomEdgeList::new().vertices(1).edges(3).self_loops(true).generate(rng);
        assert_eq!(graph.edges.len(), 1);
        assert!(graph.edges[0].is_loop());
    }

    #[test]
    fn simple_graphs() {
        let rng = &mut Pcg64::seed_from_u64(3);

        for directed in [false, true] {
            for self_loops in [false, true] {
                for _ in 0..20 {
                    let n = rng.random_range(2..12);
                    let m = rng.random_range(0..60);
                    let graph = RandomEdgeList::new()
                        .vertices(n)
                        .edges(m)
                        .directed(directed)
                        .self_loops(self_loops)
                        .weights(-3, 3)
                        .generate(rng);

                    assert_eq!(graph.vertices.len(), n as usize);
                    assert!(graph.edges.len() <= m as usize);
                    assert!(self_loops || graph.edges.iter().all(|e| !e.is_loop()));
                    assert!(graph.edges.iter().all(|e| (-3.0..=3.0).contains(&e.weight)));

                    let mut pairs = graph
                        .edges
                        .iter()
                        .map(|e| {
                            if directed || e.source <= e.target {
                                (e.source.clone(), e.target.clone())
                            } else {
                                (e.target.clone(), e.source.clone())
                            }
                        })
                        .collect_vec();
                    let len = pairs.len();
                    pairs.sort();
                    pairs.dedup();
                    assert_eq!(pairs.len(), len);
                }
            }
        }
    }

    #[test]
    fn connected_graphs() {
        let rng = &mut Pcg64::seed_from_u64(4);

        for directed in [false, true] {
            for n in [2, 5, 30] {
                let graph = RandomEdgeList::new()
                    .vertices(n)
                    .edges(0)
                    .directed(directed)
                    .connected(true)
                    .generate(rng);

                assert_eq!(graph.edges.len(), n as usize - 1);

                let undirected = Adjacency::from_edges(&graph.edges, false);
                assert_eq!(undirected.number_of_nodes(), n);
                assert!(undirected.is_strongly_connected());
            }
        }
    }

    #[test]
    fn edge_count_is_clamped() {
        let rng = &mut Pcg64::seed_from_u64(5);

        let graph = RandomEdgeList::new().vertices(4).edges(100).directed(false).generate(rng);
        assert!(graph.edges.len() <= 6);

        let generator = RandomEdgeList::new().vertices(4).edges(100);
        assert_eq!(generator.target_edges(), 12);
        assert_eq!(generator.self_loops(true).target_edges(), 16);
        assert_eq!(generator.directed(false).self_loops(true).target_edges(), 10);
        assert_eq!(RandomEdgeList::new().vertices(9).connected(true).target_edges(), 8);
    }

    #[test]
    fn output_round_trips() {
        let rng = &mut Pcg64::seed_from_u64(6);

        for directed in [false, true] {
            let graph = RandomEdgeList::new()
                .vertices(40)
                .edges(100)
                .directed(directed)
                .self_loops(true)
                .generate(rng);

            let spec = GraphSpec::parse(&graph.edge_text(), &graph.vertex_text(), directed, true);
            assert!(spec.issues.is_empty());
            assert_eq!(spec.edges, graph.edges);
            assert_eq!(spec.vertices, graph.vertices);
        }
    }
}
