use crate::machine::{StateGraph, StateId};

/// Ids of all non-accepting states tied at the minimum elimination cost, in
/// graph order. Empty when only accepting states remain, which is the
/// signal that the reduction is complete.
pub(crate) fn candidates(graph: &StateGraph) -> Vec<StateId> {
    let mut best: Option<usize> = None;
    let mut picks = Vec::new();

    for state in graph.states() {
        if state.is_accepting() {
            continue;
        }

        let cost = state.cost();

        match best {
            Some(min) if cost > min => {},
            Some(min) if cost == min => picks.push(state.id().clone()),
            _ => {
                best = Some(cost);
                picks.clear();
                picks.push(state.id().clone());
            },
        }
    }

    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::mermaid;

    fn graph(diagram: &str) -> StateGraph {
        StateGraph::from_transitions(&mermaid::parse_lines(diagram))
    }

    fn ids(picks: &[StateId]) -> Vec<&str> {
        picks.iter().map(StateId::as_str).collect()
    }

    #[test]
    fn test_minimum_cost_wins() {
        // costs: A = 1, B = 2, C = 1, D = 0
        let graph = graph("A --> B: x\nD --> B: y\nB --> C: z\nC --> A: w");
        assert_eq!(ids(&candidates(&graph)), vec!["D"]);
    }

    #[test]
    fn test_accepting_states_are_never_candidates() {
        let graph = graph("[*] --> A\nA --> A: a\nA --> [*]");
        assert!(candidates(&graph).is_empty());
    }

    #[test]
    fn test_ties_are_returned_together() {
        let graph_a = graph("A --> B: x\nB --> A: y\nB --> [*]");
        // only A is non-accepting
        assert_eq!(ids(&candidates(&graph_a)), vec!["A"]);

        let graph = graph("A --> B: x\nB --> C: y\nC --> A: z\nC --> [*]");
        // A and B both have cost 1
        assert_eq!(ids(&candidates(&graph)), vec!["A", "B"]);
    }

    #[test]
    fn test_isolated_state_is_selected_first() {
        // X is unreachable and has cost 0, everything else has positive cost
        let graph = graph("A --> B: x\nB --> A: y\nX --> X: q\nB --> [*]");
        assert_eq!(ids(&candidates(&graph)), vec!["X"]);
    }
}
