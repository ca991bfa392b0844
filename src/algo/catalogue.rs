use std::fmt::Display;

/// The algorithms that can be run on a parsed graph through [`run_algorithm`](super::run_algorithm)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    FloydWarshall,
    BellmanFord,
    Mst,
    TopologicalSort,
    Scc,
    Bcc,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::FloydWarshall,
        Algorithm::BellmanFord,
        Algorithm::Mst,
        Algorithm::TopologicalSort,
        Algorithm::Scc,
        Algorithm::Bcc,
    ];

    /// Stable machine-readable name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::FloydWarshall => "floydWarshall",
            Algorithm::BellmanFord => "bellmanFord",
            Algorithm::Mst => "mst",
            Algorithm::TopologicalSort => "topologicalSort",
            Algorithm::Scc => "scc",
            Algorithm::Bcc => "bcc",
        }
    }

    /// Short display text, e.g. for menu entries
    pub fn text(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra's",
            Algorithm::FloydWarshall => "Floyd Warshall",
            Algorithm::BellmanFord => "Bellman Ford",
            Algorithm::Mst => "MST",
            Algorithm::TopologicalSort => "Topological Sort",
            Algorithm::Scc => "SCC",
            Algorithm::Bcc => "BCC",
        }
    }

    /// Full title
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Shortest Path",
            Algorithm::FloydWarshall => "Floyd-Warshall Algorithm",
            Algorithm::BellmanFord => "Bellman-Ford Algorithm",
            Algorithm::Mst => "Minimum Spanning Tree",
            Algorithm::TopologicalSort => "Topological Sorting",
            Algorithm::Scc => "Strongly Connected Components",
            Algorithm::Bcc => "Biconnected Components",
        }
    }

    /// Looks up an algorithm by its [`Algorithm::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Returns *true* if the algorithm needs a start vertex
    pub fn requires_start(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra | Algorithm::BellmanFord
        )
    }

    /// Returns *true* if the algorithm is meaningful for graphs of the given kind:
    /// - topological sort and SCC need a directed graph,
    /// - MST needs an undirected graph,
    /// - the shortest path algorithms need a weighted graph.
    pub fn is_applicable(self, directed: bool, weighted: bool) -> bool {
        match self {
            Algorithm::TopologicalSort | Algorithm::Scc => directed,
            Algorithm::Mst => !directed,
            Algorithm::Dijkstra | Algorithm::FloydWarshall | Algorithm::BellmanFord => weighted,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Bcc => true,
        }
    }

    /// Returns all algorithms applicable to graphs of the given kind in menu order
    pub fn applicable(directed: bool, weighted: bool) -> Vec<Algorithm> {
        Self::ALL
            .into_iter()
            .filter(|a| a.is_applicable(directed, weighted))
            .collect()
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
