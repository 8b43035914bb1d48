use itertools::iproduct;

use crate::fragment;
use crate::machine::{StateGraph, StateId};

/// Remove `target` from the graph and fold every path through it into direct
/// edges between its predecessors and successors.
///
/// `target` must be present and non-accepting. The graph is consumed and the
/// rewritten snapshot is returned, so each step works on exactly one graph
/// value and nothing is shared across steps.
pub(crate) fn eliminate(mut graph: StateGraph, target: &StateId) -> StateGraph {
    let removed = graph
        .remove(target)
        .expect("eliminated state must be present in the graph");
    debug_assert!(!removed.is_accepting());

    // Sever every edge that still points at the removed state.
    for predecessor in removed.inners().keys() {
        if let Some(state) = graph.state_mut(predecessor) {
            state.remove_outer(target);
        }
    }
    for successor in removed.outers().keys() {
        if let Some(state) = graph.state_mut(successor) {
            state.remove_inner(target);
        }
    }

    let star = removed.self_loop().map(fragment::star);

    for ((predecessor, into_label), (successor, out_label)) in
        iproduct!(removed.inners(), removed.outers())
    {
        // The path predecessor -> removed -> successor, with the removed
        // state's self-loop repeatable in the middle.
        let mut bridge = fragment::group(into_label);
        if let Some(star) = &star {
            bridge.push_str(star);
        }
        bridge.push_str(&fragment::group(out_label));

        if predecessor == successor {
            // Folding through the removed state and back again extends the
            // predecessor's own self-loop.
            if let Some(state) = graph.state_mut(predecessor) {
                state.fold_self_loop(&bridge);
            }
        } else {
            let label = match graph.state(predecessor).and_then(|s| s.outer(successor)) {
                Some(existing) => fragment::alternate(existing, &bridge),
                None => bridge,
            };
            graph.connect(predecessor, successor, label);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::mermaid;

    fn graph(diagram: &str) -> StateGraph {
        StateGraph::from_transitions(&mermaid::parse_lines(diagram))
    }

    fn id(s: &str) -> StateId {
        StateId::new(s)
    }

    fn assert_symmetric(graph: &StateGraph) {
        for state in graph.states() {
            for (successor, label) in state.outers() {
                let other = graph.state(successor).expect("edge target must exist");
                assert_eq!(other.inner(state.id()), Some(label.as_str()));
            }
            for (predecessor, label) in state.inners() {
                let other = graph.state(predecessor).expect("edge source must exist");
                assert_eq!(other.outer(state.id()), Some(label.as_str()));
            }
        }
    }

    #[test]
    fn test_loop_closing_elimination() {
        let graph = eliminate(graph("A --> B: x\nB --> A: y\nB --> [*]"), &id("A"));

        assert_eq!(graph.len(), 1);
        let b = graph.state(&id("B")).unwrap();
        assert_eq!(b.self_loop(), Some("(y)(x)"));
        assert!(b.inners().is_empty());
        assert!(b.outers().is_empty());
    }

    #[test]
    fn test_self_loop_of_removed_state_is_starred() {
        let graph = eliminate(graph("A --> B: x\nB --> B: s\nB --> C: y\nC --> [*]"), &id("B"));

        let a = graph.state(&id("A")).unwrap();
        assert_eq!(a.outer(&id("C")), Some("(x)(s)*(y)"));
        assert_symmetric(&graph);
    }

    #[test]
    fn test_existing_edge_alternates_with_bridge() {
        let input = graph("A --> B: x\nB --> C: y\nA --> C: z\nC --> [*]");
        let graph = eliminate(input, &id("B"));

        let a = graph.state(&id("A")).unwrap();
        assert_eq!(a.outer(&id("C")), Some("(z)|((x)(y))"));
        assert_symmetric(&graph);
    }

    #[test]
    fn test_existing_self_loop_alternates_with_fold() {
        let input = graph("B --> B: s\nB --> A: x\nA --> B: y\nB --> [*]");
        let graph = eliminate(input, &id("A"));

        let b = graph.state(&id("B")).unwrap();
        assert_eq!(b.self_loop(), Some("(s)|((x)(y))"));
    }

    #[test]
    fn test_isolated_state_removal_creates_no_edges() {
        let input = graph("A --> B: x\nB --> [*]\nX --> X: q");
        let before = input.len();
        let graph = eliminate(input, &id("X"));

        assert_eq!(graph.len(), before - 1);
        assert_eq!(graph.state(&id("A")).unwrap().outer(&id("B")), Some("x"));
        assert_symmetric(&graph);
    }

    #[test]
    fn test_every_step_removes_exactly_one_state() {
        let mut graph = graph("A --> B: u\nB --> C: v\nC --> A: w\nA --> C: p\nC --> [*]");

        let mut len = graph.len();
        for target in ["A", "B"] {
            graph = eliminate(graph, &id(target));
            assert_eq!(graph.len(), len - 1);
            assert_symmetric(&graph);
            len = graph.len();
        }
    }

    #[test]
    fn test_fan_elimination_rewires_all_pairs() {
        // two predecessors, two successors, 4 new edges
        let input = graph(
            "P1 --> R: a\nP2 --> R: b\nR --> Q1: c\nR --> Q2: d\nQ1 --> [*]\nQ2 --> [*]",
        );
        let graph = eliminate(input, &id("R"));

        assert_eq!(graph.state(&id("P1")).unwrap().outer(&id("Q1")), Some("(a)(c)"));
        assert_eq!(graph.state(&id("P1")).unwrap().outer(&id("Q2")), Some("(a)(d)"));
        assert_eq!(graph.state(&id("P2")).unwrap().outer(&id("Q1")), Some("(b)(c)"));
        assert_eq!(graph.state(&id("P2")).unwrap().outer(&id("Q2")), Some("(b)(d)"));
        assert_symmetric(&graph);
    }
}
