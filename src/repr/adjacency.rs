use fxhash::FxHashMap;
use smallvec::SmallVec;

use super::*;

/// Adjacency list of a single node. Classroom graphs have small degrees, so the first few
/// arcs live inline.
pub type ArcList = SmallVec<[Arc; 4]>;

/// Labelled, weighted graph stored as adjacency lists.
///
/// Nodes are numbered `0..n` in order of first appearance: scanning the edges (source before
/// target) and then any explicitly declared vertices. This makes every algorithm deterministic
/// given the order of the input edges.
///
/// For undirected graphs, each edge `(u, v)` appears in the lists of both `u` and `v`; for
/// directed graphs, the reverse arcs are kept in separate in-lists so that reverse traversals
/// (e.g. Kosaraju) and undirected views (MST, biconnected components) need no rebuild.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let edges = vec![WeightedEdge::new("a", "b", 2.0), WeightedEdge::new("b", "c", 1.0)];
/// let graph = Adjacency::from_edges_and_vertices(&edges, ["d"], true);
///
/// assert_eq!(graph.number_of_nodes(), 4);
/// assert_eq!(graph.label_of(3), "d");
/// assert_eq!(graph.neighbors_of(0).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(graph.degree_of(3), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Adjacency {
    directed: bool,
    labels: Vec<Label>,
    index: FxHashMap<Label, Node>,
    out_arcs: Vec<ArcList>,
    in_arcs: Vec<ArcList>,
    edges: Vec<Edge>,
}

impl Adjacency {
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    /// Builds the adjacency lists of the given edges.
    pub fn from_edges(edges: &[WeightedEdge], directed: bool) -> Self {
        Self::from_edges_and_vertices(edges, std::iter::empty::<&str>(), directed)
    }

    /// Builds the adjacency lists of the given edges and additionally inserts every vertex
    /// of `vertices` that no edge references, so isolated vertices are visitable.
    pub fn from_edges_and_vertices<I, S>(
        edges: &[WeightedEdge],
        vertices: I,
        directed: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new(directed);
        for edge in edges {
            graph.add_edge(edge);
        }
        for label in vertices {
            graph.add_vertex(label.as_ref());
        }
        graph
    }

    /// Adds a vertex and returns its node. Idempotent: returns the existing node if the label
    /// is already present.
    pub fn add_vertex(&mut self, label: &str) -> Node {
        if let Some(&u) = self.index.get(label) {
            return u;
        }

        let u = self.labels.len() as Node;
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), u);
        self.out_arcs.push(ArcList::new());
        if self.directed {
            self.in_arcs.push(ArcList::new());
        }
        u
    }

    /// Adds an edge, creating its endpoints if necessary.
    /// Parallel edges are kept; de-duplication is the parser's job.
    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        let u = self.add_vertex(&edge.source);
        let v = self.add_vertex(&edge.target);
        let id = self.edges.len() as NumEdges;
        let w = edge.weight;

        self.out_arcs[u as usize].push(Arc::new(v, w, id));
        if self.directed {
            self.in_arcs[v as usize].push(Arc::new(u, w, id));
        } else if u != v {
            self.out_arcs[v as usize].push(Arc::new(u, w, id));
        }

        self.edges.push(Edge(u, v, w));
    }

    /// Returns all labels indexed by node
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the edge with the given id as labelled edge
    /// ** Panics if `id >= m` **
    pub fn edge(&self, id: NumEdges) -> WeightedEdge {
        self.labelled_edge(self.edges[id as usize])
    }
}

impl GraphNodeOrder for Adjacency {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for Adjacency {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl GraphType for Adjacency {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for Adjacency {
    fn arcs_of(&self, u: Node) -> &[Arc] {
        &self.out_arcs[u as usize]
    }

    fn in_arcs_of(&self, u: Node) -> &[Arc] {
        if self.directed {
            &self.in_arcs[u as usize]
        } else {
            &self.out_arcs[u as usize]
        }
    }
}

impl Labelled for Adjacency {
    fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }
}
