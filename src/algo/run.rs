use itertools::Itertools;
use log::{debug, warn};

use super::*;

/// A graph as entered by a user: the parsed edges, explicitly declared vertices and the kind of
/// graph they describe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphSpec {
    pub edges: Vec<WeightedEdge>,
    /// Vertices that should exist even without incident edges
    pub vertices: Vec<Label>,
    pub directed: bool,
    pub weighted: bool,
    /// Problems encountered while parsing
    pub issues: Vec<ParseIssue>,
}

impl GraphSpec {
    /// Creates a spec from already parsed edges
    pub fn new(edges: Vec<WeightedEdge>, directed: bool, weighted: bool) -> Self {
        Self {
            edges,
            directed,
            weighted,
            ..Default::default()
        }
    }

    /// Adds explicitly declared vertices
    pub fn with_vertices<I, S>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        for v in vertices {
            let v = v.into();
            if !self.vertices.contains(&v) {
                self.vertices.push(v);
            }
        }
        self
    }

    /// Parses the edge-list text and a comma-separated list of vertex labels. Isolated vertices
    /// declared within the edge list are added to the explicit vertices.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::algo::*;
    ///
    /// let spec = GraphSpec::parse("ab3, (b_c_1), d, x!", "e", true, true);
    /// assert_eq!(spec.edges.len(), 2);
    /// assert_eq!(spec.vertices, vec!["d", "e"]);
    /// assert_eq!(spec.issues.len(), 1);
    /// ```
    pub fn parse(edge_text: &str, vertex_text: &str, directed: bool, weighted: bool) -> Self {
        let parser = EdgeListParser::new().directed(directed);
        let parsed = parser.parse(edge_text);

        Self {
            edges: parsed.edges,
            vertices: parsed.vertices,
            directed,
            weighted,
            issues: parsed.issues,
        }
        .with_vertices(parser.parse_vertices(vertex_text))
    }

    /// Builds the adjacency lists including all explicit vertices
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_edges_and_vertices(&self.edges, &self.vertices, self.directed)
    }

    /// Returns the algorithms that can be offered for this graph
    pub fn applicable_algorithms(&self) -> Vec<Algorithm> {
        Algorithm::applicable(self.directed, self.weighted)
    }
}

/// Structured result of a single [`run_algorithm`] call
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmOutput {
    /// Visitation order of BFS/DFS or a topological order
    Order(Vec<Label>),
    /// Single-source shortest paths of Dijkstra/Bellman-Ford
    Distances(ShortestPaths),
    /// Floyd–Warshall table
    AllPairs(AllPairsShortestPaths),
    /// `None` for a graph without vertices
    SpanningTree(Option<SpanningTree>),
    /// Strongly connected components as vertex lists
    Components(Vec<Vec<Label>>),
    /// Biconnected components as edge lists
    Blocks(BiconnectedComponents),
}

/// Runs `algorithm` on `graph`.
///
/// `start` is required by algorithms for which [`Algorithm::requires_start`] holds and ignored
/// otherwise. Algorithms are run even if they are not applicable to the kind of graph.
///
/// # Examples
/// ```
/// use wgraphs::algo::*;
///
/// let spec = GraphSpec::parse("ab, ac, bd", "", true, false);
/// let output = run_algorithm(Algorithm::Bfs, &spec, Some("a")).unwrap();
///
/// let AlgorithmOutput::Order(order) = output else { unreachable!() };
/// assert_eq!(order, vec!["a", "b", "c", "d"]);
/// ```
pub fn run_algorithm(
    algorithm: Algorithm,
    graph: &GraphSpec,
    start: Option<&str>,
) -> Result<AlgorithmOutput> {
    debug!(
        "Running {} on {} edges and {} explicit vertices (directed: {}, weighted: {})",
        algorithm.name(),
        graph.edges.len(),
        graph.vertices.len(),
        graph.directed,
        graph.weighted
    );

    if !algorithm.is_applicable(graph.directed, graph.weighted) {
        warn!(
            "{} is not applicable to {} {} graphs",
            algorithm.title(),
            if graph.weighted { "weighted" } else { "unweighted" },
            if graph.directed { "directed" } else { "undirected" },
        );
    }

    let start = match start {
        None if algorithm.requires_start() => {
            return Err(GraphError::MissingStartVertex(algorithm.name()));
        }
        start => start.unwrap_or_default(),
    };

    let output = match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => {
            let adj = graph.adjacency();
            let u = adj.try_node_of(start)?;
            let order = if algorithm == Algorithm::Bfs {
                adj.bfs(u).collect_vec()
            } else {
                adj.dfs(u).collect_vec()
            };
            AlgorithmOutput::Order(adj.labels_of(order))
        }
        Algorithm::Dijkstra => AlgorithmOutput::Distances(dijkstra(
            &graph.edges,
            start,
            &graph.vertices,
            graph.directed,
        )?),
        Algorithm::BellmanFord => AlgorithmOutput::Distances(bellman_ford(
            &graph.edges,
            start,
            &graph.vertices,
            graph.directed,
        )?),
        Algorithm::FloydWarshall => AlgorithmOutput::AllPairs(floyd_warshall(
            &graph.edges,
            &graph.vertices,
            graph.directed,
        )),
        Algorithm::Mst => {
            AlgorithmOutput::SpanningTree(minimum_spanning_tree(&graph.edges, graph.weighted))
        }
        Algorithm::TopologicalSort => AlgorithmOutput::Order(topological_sort(&graph.edges)?),
        Algorithm::Scc => AlgorithmOutput::Components(strongly_connected_components(&graph.edges)),
        Algorithm::Bcc => AlgorithmOutput::Blocks(biconnected_components(&graph.edges)),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[&str]) -> Vec<Label> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_spec() {
        let spec = GraphSpec::parse("ab5, ab7, (c_a_-1), q, x y", "z, q, , z", true, true);

        assert_eq!(spec.edges.len(), 2);
        assert_eq!(spec.edges[0], WeightedEdge::new("a", "b", 7.0));
        assert_eq!(spec.vertices, labels(&["q", "z"]));
        assert_eq!(spec.issues.len(), 1);
        assert_eq!(spec.issues[0].token(), "x y");
        assert_eq!(spec.adjacency().number_of_nodes(), 5);
    }

    #[test]
    fn start_vertex_handling() {
        let spec = GraphSpec::parse("ab, bc", "", true, true);

        for algo in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra, Algorithm::BellmanFord] {
            assert_eq!(
                run_algorithm(algo, &spec, None),
                Err(GraphError::MissingStartVertex(algo.name()))
            );
            assert_eq!(
                run_algorithm(algo, &spec, Some("x")),
                Err(GraphError::VertexNotFound("x".to_string()))
            );
        }

        // start is ignored by algorithms that do not need one
        assert!(run_algorithm(Algorithm::FloydWarshall, &spec, Some("x")).is_ok());
    }

    #[test]
    fn traversals_include_declared_vertices() {
        let spec = GraphSpec::parse("ab, ac, bd", "x", true, false);

        assert_eq!(
            run_algorithm(Algorithm::Bfs, &spec, Some("a")),
            Ok(AlgorithmOutput::Order(labels(&["a", "b", "c", "d"])))
        );
        assert_eq!(
            run_algorithm(Algorithm::Dfs, &spec, Some("a")),
            Ok(AlgorithmOutput::Order(labels(&["a", "b", "d", "c"])))
        );
        assert_eq!(
            run_algorithm(Algorithm::Dfs, &spec, Some("x")),
            Ok(AlgorithmOutput::Order(labels(&["x"])))
        );
    }

    #[test]
    fn every_algorithm_runs() {
        let spec = GraphSpec::parse("(a_b_1), (b_c_2), (a_c_5), (c_d_1)", "", true, true);

        for algo in Algorithm::ALL {
            let output = run_algorithm(algo, &spec, Some("a")).unwrap();
            match (algo, output) {
                (Algorithm::Dijkstra, AlgorithmOutput::Distances(paths))
                | (Algorithm::BellmanFord, AlgorithmOutput::Distances(paths)) => {
                    assert_eq!(paths.distance_to("c"), Some(3.0));
                }
                (Algorithm::FloydWarshall, AlgorithmOutput::AllPairs(table)) => {
                    assert_eq!(table.distance_between("a", "d"), Some(4.0));
                }
                (Algorithm::Mst, AlgorithmOutput::SpanningTree(tree)) => {
                    assert_eq!(tree.unwrap().total_weight, 4.0);
                }
                (Algorithm::TopologicalSort, AlgorithmOutput::Order(order)) => {
                    assert_eq!(order, labels(&["a", "b", "c", "d"]));
                }
                (Algorithm::Scc, AlgorithmOutput::Components(comps)) => {
                    assert_eq!(comps.len(), 4);
                }
                (Algorithm::Bcc, AlgorithmOutput::Blocks(blocks)) => {
                    assert_eq!(blocks.components.len(), 2);
                    assert_eq!(blocks.articulation_points, labels(&["c"]));
                }
                (Algorithm::Bfs | Algorithm::Dfs, AlgorithmOutput::Order(order)) => {
                    assert_eq!(order.len(), 4);
                }
                (algo, output) => panic!("unexpected output of {algo}: {output:?}"),
            }
        }
    }

    #[test]
    fn failures_are_reported() {
        let spec = GraphSpec::parse("(a_b_1), (b_a_-2)", "", true, true);
        assert_eq!(
            run_algorithm(Algorithm::BellmanFord, &spec, Some("a")),
            Err(GraphError::NegativeCycle)
        );
        assert_eq!(
            run_algorithm(Algorithm::TopologicalSort, &spec, None),
            Err(GraphError::CycleDetected)
        );

        let empty = GraphSpec::default();
        assert_eq!(
            run_algorithm(Algorithm::Mst, &empty, None),
            Ok(AlgorithmOutput::SpanningTree(None))
        );
    }
}
