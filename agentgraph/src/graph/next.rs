//! Next-step result from a graph node: follow the edge, pick an edge, or end.

/// Next step after running a node.
///
/// - **Continue**: follow the node's single outgoing edge.
/// - **Node(id)**: follow the outgoing edge that leads to `id` (explicit branch choice).
/// - **End**: stop; the current state is the final result.
///
/// **Interaction**: Returned by `Node::run`; consumed by `CompiledStateGraph::invoke`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the only outgoing edge; an error if the node has several.
    Continue,
    /// Follow the outgoing edge to the given node id (may be `END`).
    Node(String),
    /// Stop and return the current state.
    End,
}
