use std::fs;
use std::path::Path;

use crate::{error::ParsingError, machine::Transition};

const EDGE_SEPARATOR: &str = "-->";
const LABEL_SEPARATOR: char = ':';
const COMMENT: &str = "%%";

fn parse_line(line: &str) -> Option<Transition> {
    let line = line.trim();

    if line.starts_with(COMMENT) {
        return None;
    }

    let (from, rest) = line.split_once(EDGE_SEPARATOR)?;

    let (to, label) = match rest.split_once(LABEL_SEPARATOR) {
        Some((to, label)) => (to, Some(label)),
        None => (rest, None),
    };

    Transition::new(from, to, label).ok()
}

/// Extract all transitions from diagram text. Lines that do not contain a
/// valid edge are dropped.
pub(crate) fn parse_lines(text: &str) -> Vec<Transition> {
    text.lines().filter_map(parse_line).collect()
}

pub(crate) fn parse_file(path: &Path) -> Result<Vec<Transition>, ParsingError> {
    let text = fs::read_to_string(path).map_err(|e| ParsingError::new(path, format!("{}", e)))?;
    Ok(parse_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Endpoint, StateId};

    #[test]
    fn test_edges() {
        let transitions = parse_lines("A --> B: x\nB --> A: y");
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].from(), &Endpoint::State(StateId::new("A")));
        assert_eq!(transitions[0].to(), &Endpoint::State(StateId::new("B")));
        assert_eq!(transitions[0].label(), Some("x"));
    }

    #[test]
    fn test_header_and_comments_are_ignored() {
        let text = "stateDiagram-v2\n%% A --> B: hidden\n\nA --> B: x";
        assert_eq!(parse_lines(text).len(), 1);
    }

    #[test]
    fn test_markers() {
        let transitions = parse_lines("[*] --> A\nA --> [*]");
        assert_eq!(transitions[0].from(), &Endpoint::Marker);
        assert_eq!(transitions[0].label(), None);
        assert_eq!(transitions[1].to(), &Endpoint::Marker);
    }

    #[test]
    fn test_malformed_edges_are_skipped() {
        // between states but no label, empty endpoint, marker-to-marker
        let text = "A --> B\nA -->\n[*] --> [*]\nA --> B: x";
        let transitions = parse_lines(text);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].label(), Some("x"));
    }

    #[test]
    fn test_label_keeps_secondary_colons() {
        let transitions = parse_lines("A --> B: go : now");
        assert_eq!(transitions[0].label(), Some("go : now"));
    }

    #[test]
    fn test_reparse_is_identical() {
        let text = "stateDiagram-v2\n[*] --> A\nA --> B: x\nB --> [*]";
        assert_eq!(parse_lines(text), parse_lines(text));
    }
}
