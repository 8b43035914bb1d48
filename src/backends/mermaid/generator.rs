use std::fs;
use std::path::Path;

use crate::{
    error::TraceError,
    machine::{Endpoint, StateGraph},
};

/// This is the main struct of the [`mermaid`](crate::backends::mermaid)
/// backend that renders a graph back into diagram text.
pub struct MermaidGenerator {}

impl MermaidGenerator {
    /// Create a new MermaidGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Render `graph` as a Mermaid `stateDiagram`.
    ///
    /// For every state all outgoing cross-edges come first, then the
    /// self-loop if there is one, then the accepting marker. Start edges
    /// are not part of the model and do not reappear.
    pub fn render(&self, graph: &StateGraph) -> String {
        let mut out = String::from("stateDiagram-v2\n");

        for state in graph.states() {
            for (successor, label) in state.outers() {
                out.push_str(&format!("    {} --> {}: {}\n", state.id(), successor, label));
            }

            if let Some(label) = state.self_loop() {
                out.push_str(&format!("    {} --> {}: {}\n", state.id(), state.id(), label));
            }

            if state.is_accepting() {
                out.push_str(&format!("    {} --> {}\n", state.id(), Endpoint::MARKER));
            }
        }

        out
    }

    /// Render `graph` and write it into the file at `path`.
    pub fn generate<P: AsRef<Path>>(&self, path: P, graph: &StateGraph) -> Result<(), TraceError> {
        let path = path.as_ref();
        fs::write(path, self.render(graph)).map_err(|err| TraceError::new(path, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::mermaid;

    fn graph(diagram: &str) -> StateGraph {
        StateGraph::from_transitions(&mermaid::parse_lines(diagram))
    }

    #[test]
    fn test_edge_order_per_state() {
        let text = "A --> A: s\nA --> B: x\nA --> C: y\nA --> [*]\nB --> A: z";
        let rendered = MermaidGenerator::new().render(&graph(text));

        let expected = "stateDiagram-v2\n\
                        \x20   A --> B: x\n\
                        \x20   A --> C: y\n\
                        \x20   A --> A: s\n\
                        \x20   A --> [*]\n\
                        \x20   B --> A: z\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_parses_back() {
        let text = "[*] --> A\nA --> B: x\nB --> B: s\nB --> A: y\nB --> [*]";
        let first = graph(text);

        let rendered = MermaidGenerator::new().render(&first);
        let second = graph(&rendered);

        // everything except the start edge survives a render round trip
        assert_eq!(first, second);
    }
}
