//! StateGraph build/compile failure cases: duplicates, unknown endpoints, reachability.

use agentgraph::{CompilationError, GraphViolation, StateGraph, END, START};

use crate::common::{linear_graph, visit, TraceState};

#[test]
fn add_node_fails_on_duplicate_id() {
    let mut graph = StateGraph::<TraceState>::new();
    graph.add_node("a", visit("a")).unwrap();
    match graph.add_node("a", visit("a")) {
        Err(CompilationError::DuplicateNode(id)) => assert_eq!(id, "a"),
        _ => panic!("expected DuplicateNode"),
    }
}

#[test]
fn add_edge_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<TraceState>::new();
    graph.add_node("echo", visit("echo")).unwrap();
    graph.add_edge(START, "echo").unwrap();
    match graph.add_edge("echo", "missing") {
        Err(CompilationError::UnknownNode(id)) => assert_eq!(id, "missing"),
        _ => panic!("expected UnknownNode"),
    }
}

/// **Scenario**: A node with no incoming edge is unreachable; compile lists it.
#[test]
fn compile_fails_for_unreachable_node() {
    let mut graph = linear_graph(&["a"]);
    graph.add_node("orphan", visit("orphan")).unwrap();
    graph.add_edge("orphan", END).unwrap();
    match graph.compile() {
        Err(CompilationError::Validation(v)) => {
            assert_eq!(v, vec![GraphViolation::Unreachable("orphan".into())])
        }
        _ => panic!("expected Validation"),
    }
}

/// **Scenario**: A dead-end node has no path to END; compile lists it.
#[test]
fn compile_fails_for_dead_end_node() {
    let mut graph = linear_graph(&["a"]);
    graph.add_node("sink", visit("sink")).unwrap();
    graph.add_edge("a", "sink").unwrap();
    match graph.compile() {
        Err(CompilationError::Validation(v)) => {
            assert_eq!(v, vec![GraphViolation::NoPathToEnd("sink".into())])
        }
        _ => panic!("expected Validation"),
    }
}

/// **Scenario**: A loop back into START fails even though every node lies on a
/// START..END path; it is the only violation reported.
#[test]
fn compile_rejects_edge_into_start_on_otherwise_valid_graph() {
    let mut graph = StateGraph::<TraceState>::new();
    graph.add_node("a", visit("a")).unwrap();
    graph.add_edge(START, "a").unwrap();
    graph.add_edge("a", END).unwrap();
    graph.add_edge("a", START).unwrap();
    match graph.compile() {
        Err(CompilationError::Validation(v)) => {
            assert_eq!(v, vec![GraphViolation::EdgeIntoStart { from: "a".into() }]);
        }
        _ => panic!("expected Validation"),
    }
}

/// **Scenario**: Leaving END is rejected the same way on an otherwise valid graph.
#[test]
fn compile_rejects_edge_out_of_end_on_otherwise_valid_graph() {
    let mut graph = StateGraph::<TraceState>::new();
    graph.add_node("a", visit("a")).unwrap();
    graph.add_edge(START, "a").unwrap();
    graph.add_edge("a", END).unwrap();
    graph.add_edge(END, "a").unwrap();
    match graph.compile() {
        Err(CompilationError::Validation(v)) => {
            assert_eq!(v, vec![GraphViolation::EdgeFromEnd { to: "a".into() }]);
        }
        _ => panic!("expected Validation"),
    }
}

/// **Scenario**: Several problems are reported together, in sorted order.
#[test]
fn compile_reports_all_violations() {
    let mut graph = StateGraph::<TraceState>::new();
    graph.add_node("a", visit("a")).unwrap();
    graph.add_node("b", visit("b")).unwrap();
    graph.add_edge("a", START).unwrap();
    graph.add_edge(END, "b").unwrap();
    match graph.compile() {
        Err(CompilationError::Validation(v)) => {
            assert!(v.contains(&GraphViolation::EdgeIntoStart { from: "a".into() }));
            assert!(v.contains(&GraphViolation::EdgeFromEnd { to: "b".into() }));
            assert!(v.contains(&GraphViolation::StartCannotReachEnd));
            assert!(v.contains(&GraphViolation::Unreachable("a".into())));
            assert!(v.contains(&GraphViolation::Unreachable("b".into())));
            assert!(v.contains(&GraphViolation::NoPathToEnd("a".into())));
            assert!(v.contains(&GraphViolation::NoPathToEnd("b".into())));
            let mut sorted = v.clone();
            sorted.sort();
            assert_eq!(v, sorted);
        }
        _ => panic!("expected Validation"),
    }
}

/// **Scenario**: An empty builder has no route from START to END.
#[test]
fn compile_fails_for_empty_graph() {
    let graph = StateGraph::<TraceState>::new();
    match graph.compile() {
        Err(CompilationError::Validation(v)) => {
            assert_eq!(v, vec![GraphViolation::StartCannotReachEnd])
        }
        _ => panic!("expected Validation"),
    }
}

/// **Scenario**: Compiling the same builder twice gives structurally equal graphs.
#[test]
fn compile_twice_yields_equal_structure() {
    let graph = linear_graph(&["a", "b", "c"]);
    let first = graph.compile().unwrap();
    let second = graph.compile().unwrap();
    assert_eq!(first.structure(), second.structure());
    assert_eq!(first.structure().nodes().len(), 3);
    assert_eq!(first.structure().edges().len(), 4);
}

/// **Scenario**: Branching graphs where every node lies on a START..END path compile.
#[test]
fn compile_accepts_branch_and_merge() {
    let mut graph = StateGraph::<TraceState>::new();
    for id in ["a", "b", "c", "d"] {
        graph.add_node(id, visit(id)).unwrap();
    }
    graph.add_edge(START, "a").unwrap();
    graph.add_edge("a", "b").unwrap();
    graph.add_edge("a", "c").unwrap();
    graph.add_edge("b", "d").unwrap();
    graph.add_edge("c", "d").unwrap();
    graph.add_edge("d", END).unwrap();
    assert!(graph.compile().is_ok());
}
