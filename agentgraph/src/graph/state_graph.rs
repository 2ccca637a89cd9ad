//! State graph builder: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, connect them with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, then `compile` to get a `CompiledStateGraph`.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::graph::compile_error::{CompilationError, GraphViolation};
use crate::graph::compiled::{CompiledStateGraph, GraphStructure};
use crate::graph::node::Node;
use crate::graph::node_middleware::NodeMiddleware;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph builder: nodes plus explicit edges.
///
/// Generic over state type `S`. Nodes must be registered before edges that mention
/// them. `compile` checks reachability and returns an immutable graph; the builder
/// stays usable, so compiling twice gives structurally equal graphs.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id) in insertion order; the runner keeps this order for candidates.
    edges: Vec<(String, String)>,
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            middleware: None,
        }
    }

    /// Attaches node middleware; the compiled graph wraps every node call with it.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// Registers a node under a unique id.
    ///
    /// Fails with `DuplicateNode` if the id is taken and `ReservedNodeId` for `START` / `END`.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        node: Arc<dyn Node<S>>,
    ) -> Result<&mut Self, CompilationError> {
        let id = id.into();
        if id == START || id == END {
            return Err(CompilationError::ReservedNodeId(id));
        }
        if self.nodes.contains_key(&id) {
            return Err(CompilationError::DuplicateNode(id));
        }
        self.nodes.insert(id, node);
        Ok(self)
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Both ids must be registered nodes or the `START` / `END` sentinels, otherwise
    /// `UnknownNode` is returned. Adding the same edge again is a no-op. Edges into
    /// `START` or out of `END` are accepted here and reported by `compile`, even when
    /// every node is otherwise on a `START`..`END` path.
    pub fn add_edge(
        &mut self,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
    ) -> Result<&mut Self, CompilationError> {
        let from = from_id.into();
        let to = to_id.into();
        for id in [&from, &to] {
            if !self.is_known(id) {
                return Err(CompilationError::UnknownNode(id.clone()));
            }
        }
        if !self.edges.iter().any(|(f, t)| *f == from && *t == to) {
            self.edges.push((from, to));
        }
        Ok(self)
    }

    fn is_known(&self, id: &str) -> bool {
        id == START || id == END || self.nodes.contains_key(id)
    }

    /// Builds the executable graph.
    ///
    /// Every node must be reachable from `START` and have a path to `END`, and `END`
    /// must be reachable from `START`; edges into `START` or out of `END` are rejected.
    /// All violations are returned together in `CompilationError::Validation`.
    pub fn compile(&self) -> Result<CompiledStateGraph<S>, CompilationError> {
        let mut violations = Vec::new();
        let mut forward: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut backward: HashMap<&str, Vec<&str>> = HashMap::new();

        for (from, to) in &self.edges {
            if to == START {
                violations.push(GraphViolation::EdgeIntoStart { from: from.clone() });
                continue;
            }
            if from == END {
                violations.push(GraphViolation::EdgeFromEnd { to: to.clone() });
                continue;
            }
            forward.entry(from.as_str()).or_default().push(to.as_str());
            backward.entry(to.as_str()).or_default().push(from.as_str());
        }

        let reachable = walk(START, &forward);
        let reaches_end = walk(END, &backward);

        if !reachable.contains(END) {
            violations.push(GraphViolation::StartCannotReachEnd);
        }
        for id in self.nodes.keys() {
            if !reachable.contains(id.as_str()) {
                violations.push(GraphViolation::Unreachable(id.clone()));
            }
            if !reaches_end.contains(id.as_str()) {
                violations.push(GraphViolation::NoPathToEnd(id.clone()));
            }
        }

        if !violations.is_empty() {
            violations.sort();
            return Err(CompilationError::Validation(violations));
        }

        let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
        for (from, to) in &self.edges {
            outgoing.entry(from.clone()).or_default().push(to.clone());
        }
        let structure = GraphStructure {
            nodes: self.nodes.keys().cloned().collect::<BTreeSet<_>>(),
            edges: self.edges.iter().cloned().collect::<BTreeSet<_>>(),
        };

        Ok(CompiledStateGraph {
            nodes: Arc::new(self.nodes.clone()),
            outgoing: Arc::new(outgoing),
            structure: Arc::new(structure),
            middleware: self.middleware.clone(),
        })
    }
}

/// Breadth-first walk from `origin` over `adjacency`; returns every visited id (origin included).
fn walk<'a>(origin: &'a str, adjacency: &HashMap<&'a str, Vec<&'a str>>) -> HashSet<&'a str> {
    let mut seen = HashSet::from([origin]);
    let mut queue = VecDeque::from([origin]);
    while let Some(id) = queue.pop_front() {
        for next in adjacency.get(id).into_iter().flatten() {
            if seen.insert(*next) {
                queue.push_back(*next);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FnNode;

    fn noop(id: &str) -> Arc<dyn Node<i32>> {
        Arc::new(FnNode::new(id, |s: i32| async move { Ok(s) }))
    }

    /// **Scenario**: Registering the same id twice fails with DuplicateNode.
    #[test]
    fn add_node_twice_is_duplicate() {
        let mut graph = StateGraph::<i32>::new();
        graph.add_node("a", noop("a")).unwrap();
        let err = graph.add_node("a", noop("a")).err();
        assert_eq!(err, Some(CompilationError::DuplicateNode("a".into())));
    }

    /// **Scenario**: The sentinels cannot be registered as ordinary nodes.
    #[test]
    fn add_node_with_sentinel_id_is_reserved() {
        let mut graph = StateGraph::<i32>::new();
        assert_eq!(
            graph.add_node(START, noop("s")).err(),
            Some(CompilationError::ReservedNodeId(START.into()))
        );
        assert_eq!(
            graph.add_node(END, noop("e")).err(),
            Some(CompilationError::ReservedNodeId(END.into()))
        );
    }

    /// **Scenario**: add_edge with an unregistered endpoint fails; sentinels are always accepted.
    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = StateGraph::<i32>::new();
        graph.add_node("a", noop("a")).unwrap();
        assert_eq!(
            graph.add_edge("a", "missing").err(),
            Some(CompilationError::UnknownNode("missing".into()))
        );
        assert_eq!(
            graph.add_edge("ghost", END).err(),
            Some(CompilationError::UnknownNode("ghost".into()))
        );
        assert!(graph.add_edge(START, "a").is_ok());
        assert!(graph.add_edge("a", END).is_ok());
    }

    /// **Scenario**: Adding the same edge twice keeps a single edge.
    #[test]
    fn duplicate_edge_is_ignored() {
        let mut graph = StateGraph::<i32>::new();
        graph.add_node("a", noop("a")).unwrap();
        graph.add_edge(START, "a").unwrap();
        graph.add_edge(START, "a").unwrap();
        graph.add_edge("a", END).unwrap();
        let compiled = graph.compile().unwrap();
        assert_eq!(compiled.structure().edges().len(), 2);
    }

    /// **Scenario**: walk visits everything reachable, including the origin.
    #[test]
    fn walk_collects_reachable_ids() {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        adjacency.insert("x", vec!["y"]);
        adjacency.insert("y", vec!["z", "x"]);
        let seen = walk("x", &adjacency);
        assert_eq!(seen, HashSet::from(["x", "y", "z"]));
    }
}
