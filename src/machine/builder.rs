use std::path::Path;

use crate::{
    error::{DiagramError, ParsingError},
    machine::{StateGraph, Transition},
    parser::mermaid,
};

/// The GraphBuilder loads diagrams from disk and returns a unified [`StateGraph`].
///
/// Use it like so:
/// ```no_run
/// use kleene::machine::StateGraph;
///
/// // Load multiple diagrams by joining their transitions:
/// let graph = StateGraph::builder()
///     .diagram("doors.mmd").unwrap()
///     .diagram("locks.mmd").unwrap()
///     .build().unwrap();
/// ```
pub struct GraphBuilder {
    transitions: Vec<Transition>,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Load a diagram from disk that is in Mermaid `stateDiagram` syntax.
    ///
    /// Lines without an edge are ignored, so headers and comments are fine.
    /// Edge lines whose fields cannot form a valid transition are skipped as
    /// well, they never fail the load.
    pub fn diagram<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let mut new_transitions = mermaid::parse_file(path.as_ref())?;
        self.transitions.append(&mut new_transitions);
        Ok(self)
    }

    /// Append transitions that were assembled in memory.
    pub fn transitions<I: IntoIterator<Item = Transition>>(mut self, transitions: I) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Create a [`StateGraph`].
    pub fn build(self) -> Result<StateGraph, DiagramError> {
        if self.transitions.is_empty() {
            return Err(DiagramError::NoTransitions);
        }

        Ok(StateGraph::from_transitions(&self.transitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_missing_file() {
        StateGraph::builder()
            .diagram("test-data/diagrams/does-not-exist.mmd")
            .unwrap();
    }

    #[test]
    fn test_empty_diagram() {
        let result = StateGraph::builder().build();
        assert!(matches!(result, Err(DiagramError::NoTransitions)));
    }

    #[test]
    fn test_turnstile_diagram() {
        let graph = StateGraph::builder()
            .diagram("test-data/diagrams/turnstile.mmd")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_diagrams_merge() {
        let graph = StateGraph::builder()
            .diagram("test-data/diagrams/ab-loop.mmd")
            .unwrap()
            .diagram("test-data/diagrams/single.mmd")
            .unwrap()
            .build()
            .unwrap();

        // A and B from the first diagram, S from the second
        assert_eq!(graph.len(), 3);
    }
}
