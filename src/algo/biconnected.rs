/*!
# Biconnected Components

Tarjan's algorithm partitions the edges of an undirected graph into biconnected components
(blocks) and finds the articulation points separating them. Orientation of edges is ignored.

The search is iterative. Parallel edges are told apart by their edge id, so two parallel edges
between `u` and `v` form a block of their own; a self-loop is a block consisting of one edge.
*/

use super::*;

/// Blocks as lists of edge ids together with the articulation points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Blocks {
    /// Every edge id appears in exactly one block
    pub components: Vec<Vec<NumEdges>>,
    /// Sorted increasingly
    pub articulation_points: Vec<Node>,
}

/// Labelled version of [`Blocks`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BiconnectedComponents {
    pub components: Vec<Vec<WeightedEdge>>,
    pub articulation_points: Vec<Label>,
}

pub trait Biconnectivity: AdjacencyList + Sized {
    /// Computes the biconnected components and articulation points of the graph.
    /// Nodes without incident edges belong to no component.
    fn biconnected_components(&self) -> Blocks {
        BlockSearch::new(self).compute()
    }
}

impl<G> Biconnectivity for G where G: AdjacencyList + Sized {}

#[derive(Debug, Clone, Copy, Default)]
struct NodeInfo {
    /// 0 if undiscovered
    discovery: Node,
    low: Node,
}

impl NodeInfo {
    fn update_low(&mut self, low: Node) {
        self.low = self.low.min(low);
    }
}

struct StackFrame {
    node: Node,
    parent_edge: NumEdges,
    arcs: ArcList,
    pos: usize,
    children: usize,
}

struct BlockSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    nodes_info: Vec<NodeInfo>,
    loop_seen: Vec<bool>,
    is_articulation: Vec<bool>,
    time: Node,
    edge_stack: Vec<NumEdges>,
    components: Vec<Vec<NumEdges>>,
}

impl<'a, G> BlockSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![NodeInfo::default(); graph.len()],
            loop_seen: vec![false; graph.number_of_edges() as usize],
            is_articulation: vec![false; graph.len()],
            time: 0,
            edge_stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn compute(mut self) -> Blocks {
        for u in self.graph.vertices() {
            if self.nodes_info[u as usize].discovery == 0 {
                self.search_from(u);
            }
        }

        Blocks {
            components: self.components,
            articulation_points: self
                .is_articulation
                .iter()
                .enumerate()
                .filter_map(|(u, &art)| art.then_some(u as Node))
                .collect(),
        }
    }

    fn discover(&mut self, u: Node, parent_edge: NumEdges) -> StackFrame {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };

        StackFrame {
            node: u,
            parent_edge,
            arcs: self.graph.undirected_arcs_of(u).collect(),
            pos: 0,
            children: 0,
        }
    }

    fn search_from(&mut self, root: Node) {
        let mut call_stack = vec![self.discover(root, NumEdges::MAX)];

        'recurse: while let Some(frame) = call_stack.last_mut() {
            let u = frame.node;

            while let Some(&arc) = frame.arcs.get(frame.pos) {
                frame.pos += 1;
                let v = arc.target;

                if arc.edge_id == frame.parent_edge {
                    continue;
                }

                if v == u {
                    if !self.loop_seen[arc.edge_id as usize] {
                        self.loop_seen[arc.edge_id as usize] = true;
                        self.components.push(vec![arc.edge_id]);
                    }
                    continue;
                }

                let v_disc = self.nodes_info[v as usize].discovery;
                if v_disc == 0 {
                    frame.children += 1;
                    self.edge_stack.push(arc.edge_id);
                    let child = self.discover(v, arc.edge_id);
                    call_stack.push(child);
                    continue 'recurse;
                }

                if v_disc < self.nodes_info[u as usize].discovery {
                    self.edge_stack.push(arc.edge_id);
                    self.nodes_info[u as usize].update_low(v_disc);
                }
            }

            let Some(finished) = call_stack.pop() else {
                break;
            };

            let Some(parent) = call_stack.last() else {
                // the root separates its subtrees iff it has more than one
                if finished.children > 1 {
                    self.is_articulation[finished.node as usize] = true;
                }
                break;
            };

            let low = self.nodes_info[finished.node as usize].low;
            let p = parent.node;
            self.nodes_info[p as usize].update_low(low);

            if low >= self.nodes_info[p as usize].discovery {
                if call_stack.len() > 1 {
                    self.is_articulation[p as usize] = true;
                }
                self.pop_component(finished.parent_edge);
            }
        }

        if !self.edge_stack.is_empty() {
            let rest = std::mem::take(&mut self.edge_stack);
            self.components.push(rest);
        }
    }

    /// Pops all edges up to and including `edge` off the edge stack as a new component
    fn pop_component(&mut self, edge: NumEdges) {
        let start = self
            .edge_stack
            .iter()
            .rposition(|&e| e == edge)
            .unwrap_or(0);
        let component = self.edge_stack.split_off(start);
        self.components.push(component);
    }
}

/// Partitions the edges of the graph given by `edges` into biconnected components, treating
/// every edge as undirected.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// // two triangles sharing the vertex c
/// let edges = parse_edges("ab, bc, ca, cd, de, ec", false);
/// let bcc = biconnected_components(&edges);
///
/// assert_eq!(bcc.components.len(), 2);
/// assert_eq!(stringify_edges(&bcc.components[0]), "(c_d_1), (d_e_1), (e_c_1)");
/// assert_eq!(bcc.articulation_points, vec!["c"]);
/// ```
pub fn biconnected_components(edges: &[WeightedEdge]) -> BiconnectedComponents {
    let graph = Adjacency::from_edges(edges, false);
    let blocks = graph.biconnected_components();

    BiconnectedComponents {
        components: blocks
            .components
            .into_iter()
            .map(|comp| comp.into_iter().map(|id| graph.edge(id)).collect())
            .collect(),
        articulation_points: graph.labels_of(blocks.articulation_points),
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    #[test]
    fn two_triangles() {
        let input = unweighted(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "e"),
            ("e", "c"),
        ]);
        let bcc = biconnected_components(&input);

        assert_eq!(bcc.components.len(), 2);
        assert_eq!(bcc.components[0], unweighted(&[("c", "d"), ("d", "e"), ("e", "c")]));
        assert_eq!(bcc.components[1], unweighted(&[("a", "b"), ("b", "c"), ("c", "a")]));
        assert_eq!(bcc.articulation_points, vec!["c"]);
    }

    #[test]
    fn bridges_are_components() {
        let input = unweighted(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let bcc = biconnected_components(&input);

        assert_eq!(bcc.components.len(), 3);
        assert!(bcc.components.iter().all(|c| c.len() == 1));
        assert_eq!(bcc.articulation_points, vec!["b", "c"]);
    }

    #[test]
    fn root_with_two_children() {
        let input = unweighted(&[("b", "a"), ("b", "c")]);
        let bcc = biconnected_components(&input);
        assert_eq!(bcc.components.len(), 2);
        assert_eq!(bcc.articulation_points, vec!["b"]);

        let input = unweighted(&[("b", "a"), ("b", "c"), ("a", "c")]);
        let bcc = biconnected_components(&input);
        assert_eq!(bcc.components.len(), 1);
        assert!(bcc.articulation_points.is_empty());
    }

    #[test]
    fn disconnected_graph() {
        // discovery times continue across components, the root check must not rely on them
        let input = unweighted(&[
            ("a", "b"),
            ("c", "d"),
            ("d", "e"),
            ("x", "y"),
            ("y", "z"),
            ("z", "x"),
        ]);
        let bcc = biconnected_components(&input);

        assert_eq!(bcc.components.len(), 4);
        assert_eq!(bcc.articulation_points, vec!["d"]);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let mut graph = Adjacency::new(false);
        graph.add_edge(&WeightedEdge::unweighted("a", "a"));
        graph.add_edge(&WeightedEdge::unweighted("a", "b"));
        graph.add_edge(&WeightedEdge::unweighted("a", "b"));
        graph.add_edge(&WeightedEdge::unweighted("b", "c"));

        let blocks = graph.biconnected_components();
        let components = blocks
            .components
            .iter()
            .map(|c| c.iter().copied().sorted().collect_vec())
            .collect_vec();
        assert_eq!(components, vec![vec![0], vec![3], vec![1, 2]]);
        assert_eq!(blocks.articulation_points, vec![1]);
    }

    #[test]
    fn directed_input_is_treated_as_undirected() {
        let mut graph = Adjacency::new(true);
        for (u, v) in [("a", "b"), ("c", "b"), ("c", "a"), ("c", "c"), ("d", "c")] {
            graph.add_edge(&WeightedEdge::unweighted(u, v));
        }

        let blocks = graph.biconnected_components();
        assert_eq!(blocks.components.len(), 3);
        assert_eq!(blocks.articulation_points, vec![graph.node_of("c").unwrap()]);

        let covered = blocks.components.iter().flatten().copied().sorted().collect_vec();
        assert_eq!(covered, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn every_edge_in_one_component() {
        let input = unweighted(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "b"),
            ("d", "e"),
            ("e", "f"),
            ("f", "d"),
            ("f", "g"),
            ("h", "h"),
        ]);
        let bcc = biconnected_components(&input);

        let mut covered = bcc.components.iter().flatten().map(|e| e.to_string()).collect_vec();
        covered.sort();
        let mut expected = input.iter().map(|e| e.to_string()).collect_vec();
        expected.sort();
        assert_eq!(covered, expected);

        assert_eq!(bcc.components.len(), 5);
        assert_eq!(bcc.articulation_points, vec!["b", "d", "f"]);
    }

    #[test]
    fn long_path() {
        let n = 20_000;
        let mut graph = Adjacency::new(false);
        for u in 0..n {
            graph.add_edge(&WeightedEdge::unweighted(u.to_string(), (u + 1).to_string()));
        }
        let blocks = graph.biconnected_components();
        assert_eq!(blocks.components.len(), n);
        assert_eq!(blocks.articulation_points.len(), n - 1);
    }

    #[test]
    fn empty_graph() {
        assert_eq!(biconnected_components(&[]), BiconnectedComponents::default());
    }
}
