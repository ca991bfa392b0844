/*!
# Node Representation

Vertices are identified by arbitrary string labels at the boundary of this crate, but every
algorithm works on dense indices `0..n` assigned by [`Adjacency`](crate::repr::Adjacency) in order
of first appearance. We choose `Node = u32` as the graphs handled here are small and this keeps
per-node bookkeeping compact.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Vertex labels as supplied by the caller (e.g. `"a"`, `"B"`, `"42"`)
pub type Label = String;
