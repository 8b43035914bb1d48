//! All error types of this crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A diagram file could not be read or understood.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// A line looked like an edge but its fields cannot form a valid transition.
///
/// Lines that raise this are skipped by the parser, they never abort a parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EdgeError {
    /// One of the edge endpoints is empty text
    #[error("edge has an empty endpoint")]
    EmptyEndpoint,

    /// An edge between two states carries no label
    #[error("edge between states carries no label")]
    MissingLabel,

    /// The edge connects the start and end markers directly
    #[error("edge connects the start and end markers directly")]
    MarkerToMarker,
}

/// Errors that can appear while assembling a graph from parsed transitions.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// The diagram contains no transitions at all
    #[error("the diagram does not contain any transitions")]
    NoTransitions,
}

/// Errors that can abort a reduction.
#[derive(Debug, Error)]
pub enum ReductionError {
    /// The tie-break collaborator failed to produce a decision
    #[error("tie-break was aborted: {0}")]
    TieBreakAborted(String),

    /// The tie-break collaborator chose a state that was not offered
    #[error("tie-break chose '{0}' which is not among the offered candidates")]
    ForeignCandidate(String),

    /// The reduced graph has no accepting state to read the result from
    #[error("no accepting state survived the reduction")]
    NoAcceptingState,

    /// More than one accepting state survived the reduction
    #[error("{0} accepting states survived the reduction, expected exactly one")]
    MultipleTerminalStates(usize),

    /// The surviving accepting state has no self-loop, the result would be `^()+$`
    #[error("the accepting state '{0}' has no self-loop")]
    DegenerateLoop(String),
}

/// An intermediate automaton could not be written to its trace file.
///
/// Trace emission is a side effect of the reduction. Failing to write a
/// snapshot never aborts the reduction itself.
#[derive(Debug, Error)]
#[error("could not write trace to {}: {source}", path.display())]
pub struct TraceError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl TraceError {
    pub(crate) fn new<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Any failure the command line surface can encounter.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or parsing a diagram file failed
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// The parsed diagram cannot form a graph
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    /// The reduction aborted
    #[error(transparent)]
    Reduction(#[from] ReductionError),
}
