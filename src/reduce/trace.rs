use serde::Serialize;

use crate::error::TraceError;
use crate::machine::{StateGraph, StateId};

/// A serializable snapshot of the automaton right after one elimination step.
#[derive(Debug, Clone, Serialize)]
pub struct TraceSnapshot<'a> {
    /// 1-based number of the elimination step this snapshot follows
    pub step: usize,
    /// Id of the state that was eliminated in this step
    pub eliminated: &'a StateId,
    /// The automaton that remains after the elimination
    pub graph: &'a StateGraph,
}

/// Receives one snapshot per elimination step.
///
/// Emission happens strictly after a step's graph is finalized and before
/// the next candidate selection. A failing sink is reported on stderr and
/// the reduction carries on without its snapshot, correctness of the result
/// does not depend on trace output.
pub trait TraceSink {
    /// Persist or forward one snapshot.
    fn emit(&mut self, snapshot: &TraceSnapshot<'_>) -> Result<(), TraceError>;
}
