use std::iter::FusedIterator;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the strongly connected components of the graph.
    /// Every node belongs to exactly one component; nodes of a component are reported in the
    /// order in which a DFS over the reversed graph discovers them.
    ///
    /// For undirected graphs the components are the connected components.
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns *true* if every node can reach every other node
    fn is_strongly_connected(&self) -> bool {
        let mut sccs = self.strongly_connected_components();
        sccs.next().is_none() || sccs.next().is_none()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Kosaraju's algorithm.
///
/// The first pass computes the finishing order of a DFS over all nodes on construction; each call
/// to `next` then runs one DFS over the reversed graph from the unassigned node that finished last
/// and returns the nodes it discovers as a component.
pub struct StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    assigned: Vec<bool>,
    finish_order: Vec<Node>,
    call_stack: Vec<(Node, usize)>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        let mut call_stack = Vec::with_capacity(32);
        let finish_order = Self::compute_finish_order(graph, &mut call_stack);

        Self {
            graph,
            assigned: vec![false; graph.len()],
            finish_order,
            call_stack,
        }
    }

    fn compute_finish_order(graph: &G, call_stack: &mut Vec<(Node, usize)>) -> Vec<Node> {
        let mut visited = vec![false; graph.len()];
        let mut order = Vec::with_capacity(graph.len());

        for root in graph.vertices() {
            if visited[root as usize] {
                continue;
            }

            visited[root as usize] = true;
            call_stack.push((root, 0));

            'recurse: while let Some(frame) = call_stack.last_mut() {
                let (u, pos) = *frame;

                for (i, arc) in graph.arcs_of(u).iter().enumerate().skip(pos) {
                    if !visited[arc.target as usize] {
                        frame.1 = i + 1;
                        visited[arc.target as usize] = true;
                        call_stack.push((arc.target, 0));
                        continue 'recurse;
                    }
                }

                order.push(u);
                call_stack.pop();
            }
        }

        order
    }

    fn collect_component(&mut self, root: Node) -> Vec<Node> {
        let mut component = vec![root];
        self.assigned[root as usize] = true;
        self.call_stack.push((root, 0));

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let (u, pos) = *frame;

            for (i, arc) in self.graph.in_arcs_of(u).iter().enumerate().skip(pos) {
                if !self.assigned[arc.target as usize] {
                    frame.1 = i + 1;
                    self.assigned[arc.target as usize] = true;
                    component.push(arc.target);
                    self.call_stack.push((arc.target, 0));
                    continue 'recurse;
                }
            }

            self.call_stack.pop();
        }

        component
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.finish_order.pop() {
            if !self.assigned[u as usize] {
                return Some(self.collect_component(u));
            }
        }
        None
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: AdjacencyList {}

/// Partitions the vertices of the directed graph given by `edges` into strongly connected
/// components.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let edges = parse_edges("ab, bc, ca, cd", true);
/// let sccs = strongly_connected_components(&edges);
///
/// assert_eq!(sccs, vec![vec!["a", "c", "b"], vec!["d"]]);
/// ```
pub fn strongly_connected_components(edges: &[WeightedEdge]) -> Vec<Vec<Label>> {
    let graph = Adjacency::from_edges(edges, true);
    graph
        .strongly_connected_components()
        .map(|comp| graph.labels_of(comp))
        .collect()
}
