use super::*;

/// Dense table of shortest path distances between all ordered pairs of vertices, together with
/// successor pointers to reconstruct the paths.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsShortestPaths {
    labels: Vec<Label>,
    distances: Vec<Weight>,
    next: Vec<Node>,
}

impl AllPairsShortestPaths {
    fn new<G: Labelled>(graph: &G) -> Self {
        let n = graph.len();
        let mut distances = vec![Weight::INFINITY; n * n];
        for u in 0..n {
            distances[u * n + u] = 0.0;
        }

        Self {
            labels: graph.labels_of(graph.vertices()),
            distances,
            next: vec![INVALID_NODE; n * n],
        }
    }

    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.labels.len() + v as usize
    }

    /// Keeps the lighter of parallel edges. Self-loops never beat the empty path.
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        let idx = self.index(u, v);
        if u != v && weight < self.distances[idx] {
            self.distances[idx] = weight;
            self.next[idx] = v;
        }
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|u| u as Node)
    }

    fn distance(&self, u: Node, v: Node) -> Option<Weight> {
        let d = self.distances[self.index(u, v)];
        d.is_finite().then_some(d)
    }

    fn path(&self, u: Node, v: Node) -> Option<Vec<&str>> {
        self.distance(u, v)?;

        let mut path = vec![self.labels[u as usize].as_str()];
        let mut current = u;
        while current != v {
            current = self.next[self.index(current, v)];
            if current == INVALID_NODE || path.len() > self.labels.len() {
                return None;
            }
            path.push(self.labels[current as usize].as_str());
        }

        Some(path)
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if the table has no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the vertex labels in graph order
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(|l| l.as_str())
    }

    /// Returns the length of a shortest path from `source` to `target`.
    /// Returns `None` if either vertex is unknown or `target` is unreachable.
    pub fn distance_between(&self, source: &str, target: &str) -> Option<Weight> {
        self.distance(self.node_of(source)?, self.node_of(target)?)
    }

    /// Reconstructs a shortest path from `source` to `target` (both inclusive).
    pub fn path_between(&self, source: &str, target: &str) -> Option<Vec<&str>> {
        self.path(self.node_of(source)?, self.node_of(target)?)
    }

    /// Returns one row of the table, i.e. the distances and paths from `source` to every vertex
    /// in graph order. Returns `None` if `source` is unknown.
    pub fn entries_from(&self, source: &str) -> Option<Vec<PathEntry<'_>>> {
        let u = self.node_of(source)?;
        Some(
            (0..self.labels.len() as Node)
                .map(|v| PathEntry {
                    vertex: &self.labels[v as usize],
                    distance: self.distance(u, v),
                    path: self.path(u, v),
                })
                .collect(),
        )
    }
}

pub trait AllPairsShortestPathsAlgorithm: AdjacencyList + Labelled {
    /// Computes shortest paths between all pairs of nodes with the Floyd–Warshall algorithm in
    /// time `O(n^3)`. Negative cycles are not detected.
    fn floyd_warshall(&self) -> AllPairsShortestPaths {
        let mut table = AllPairsShortestPaths::new(self);
        let n = self.len();

        for &Edge(u, v, w) in self.edges() {
            table.add_edge(u, v, w);
            if self.is_undirected() {
                table.add_edge(v, u, w);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let ik = table.distances[i * n + k];
                if !ik.is_finite() {
                    continue;
                }

                for j in 0..n {
                    let alt = ik + table.distances[k * n + j];
                    if alt < table.distances[i * n + j] {
                        table.distances[i * n + j] = alt;
                        table.next[i * n + j] = table.next[i * n + k];
                    }
                }
            }
        }

        table
    }
}

impl<G> AllPairsShortestPathsAlgorithm for G where G: AdjacencyList + Labelled {}

/// Computes shortest paths between all pairs of vertices of the graph given by `edges` and the
/// additional (possibly isolated) `vertices`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let edges = parse_edges("(a_b_1), (b_c_2), (a_c_5)", false);
/// let table = floyd_warshall(&edges, &[], false);
///
/// assert_eq!(table.distance_between("c", "a"), Some(3.0));
/// assert_eq!(table.path_between("c", "a"), Some(vec!["c", "b", "a"]));
/// ```
pub fn floyd_warshall(
    edges: &[WeightedEdge],
    vertices: &[Label],
    directed: bool,
) -> AllPairsShortestPaths {
    Adjacency::from_edges_and_vertices(edges, vertices, directed).floyd_warshall()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::*;

    #[test]
    fn directed_table() {
        let input = edges(&[("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 5.0), ("c", "d", 1.0)]);
        let table = floyd_warshall(&input, &[], true);

        assert_eq!(table.len(), 4);
        assert_eq!(table.distance_between("a", "c"), Some(3.0));
        assert_eq!(table.distance_between("a", "d"), Some(4.0));
        assert_eq!(table.path_between("a", "d"), Some(vec!["a", "b", "c", "d"]));
        assert_eq!(table.distance_between("d", "a"), None);
        assert_eq!(table.path_between("d", "a"), None);
        assert_eq!(table.distance_between("b", "b"), Some(0.0));
        assert_eq!(table.path_between("b", "b"), Some(vec!["b"]));
    }

    #[test]
    fn rows_follow_vertex_order() {
        let input = edges(&[("b", "a", 2.0)]);
        let table = floyd_warshall(&input, &["z".to_string()], true);

        assert_eq!(table.vertices().collect_vec(), vec!["b", "a", "z"]);

        let row = table.entries_from("b").unwrap();
        assert_eq!(row.iter().map(|e| e.vertex).collect_vec(), vec!["b", "a", "z"]);
        assert_eq!(row[1].distance, Some(2.0));
        assert_eq!(row[1].path, Some(vec!["b", "a"]));
        assert_eq!(row[2].distance, None);
        assert_eq!(row[2].path, None);

        assert!(table.entries_from("q").is_none());
    }

    #[test]
    fn parallel_edges_and_loops() {
        let mut graph = Adjacency::new(true);
        graph.add_edge(&WeightedEdge::new("a", "b", 4.0));
        graph.add_edge(&WeightedEdge::new("a", "b", 2.0));
        graph.add_edge(&WeightedEdge::new("b", "b", 1.0));

        let table = graph.floyd_warshall();
        assert_eq!(table.distance_between("a", "b"), Some(2.0));
        assert_eq!(table.distance_between("b", "b"), Some(0.0));
    }

    #[test]
    fn negative_weights_without_cycles() {
        let input = edges(&[("a", "b", 4.0), ("a", "c", 1.0), ("b", "d", -3.0), ("c", "d", 2.0)]);
        let table = floyd_warshall(&input, &[], true);
        assert_eq!(table.distance_between("a", "d"), Some(1.0));
        assert_eq!(table.path_between("a", "d"), Some(vec!["a", "b", "d"]));
    }

    #[test]
    fn agrees_with_dijkstra() {
        let rng = &mut Pcg64::seed_from_u64(4321);

        for directed in [false, true] {
            for _ in 0..10 {
                let mut graph = Adjacency::new(directed);
                for _ in 0..30 {
                    let u: u32 = rng.random_range(0..12);
                    let v: u32 = rng.random_range(0..12);
                    let w: u32 = rng.random_range(1..8);
                    graph.add_edge(&WeightedEdge::new(u.to_string(), v.to_string(), w as Weight));
                }

                let table = graph.floyd_warshall();
                for s in graph.vertices() {
                    let paths = graph.dijkstra(s);
                    let row = table.entries_from(graph.label_of(s)).unwrap();

                    for (x, y) in paths.entries().zip(row) {
                        assert_eq!(x.distance, y.distance);

                        // any reconstructed path must realize the distance
                        if let Some(path) = y.path {
                            let length: Weight = path
                                .iter()
                                .tuple_windows()
                                .map(|(a, b)| {
                                    graph
                                        .arcs_of(graph.node_of(a).unwrap())
                                        .iter()
                                        .filter(|arc| graph.label_of(arc.target) == *b)
                                        .map(|arc| arc.weight)
                                        .fold(Weight::INFINITY, Weight::min)
                                })
                                .sum();
                            assert_eq!(Some(length), y.distance);
                        }
                    }
                }
            }
        }
    }
}
