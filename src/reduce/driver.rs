use crate::{
    error::{ReductionError, TraceError},
    fragment,
    machine::StateGraph,
    reduce::{
        selector, step,
        tiebreak::{Lexicographic, TieBreak},
        trace::{TraceSink, TraceSnapshot},
    },
};

/// Drives the elimination loop to completion and extracts the final regular
/// expression.
///
/// Use it like so:
/// ```no_run
/// use kleene::machine::StateGraph;
/// use kleene::reduce::Reducer;
///
/// let graph = StateGraph::builder()
///     .diagram("my-machine.mmd").unwrap()
///     .build().unwrap();
///
/// let regex = Reducer::new().reduce(graph).unwrap();
/// ```
pub struct Reducer<T: TieBreak = Lexicographic> {
    tie_break: T,
}

impl Reducer {
    /// Create a Reducer with the deterministic lexicographic tie-break.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            tie_break: Lexicographic,
        }
    }
}

impl<T: TieBreak> Reducer<T> {
    /// Create a Reducer that resolves ties through `tie_break`.
    pub fn with_tie_break(tie_break: T) -> Self {
        Self { tie_break }
    }

    /// Reduce `graph` and return the anchored regular expression.
    pub fn reduce(&mut self, graph: StateGraph) -> Result<String, ReductionError> {
        self.reduce_traced(graph, &mut NullSink)
    }

    /// Like [`reduce`](Reducer::reduce) but emits a snapshot to `sink` after
    /// every elimination step. A graph that starts out with zero
    /// non-accepting states emits nothing and goes straight to extraction.
    pub fn reduce_traced(
        &mut self,
        mut graph: StateGraph,
        sink: &mut dyn TraceSink,
    ) -> Result<String, ReductionError> {
        let mut steps = 0;

        loop {
            let mut picks = selector::candidates(&graph);

            if picks.is_empty() {
                break;
            }

            let chosen = if picks.len() == 1 {
                picks.swap_remove(0)
            } else {
                let choice = self.tie_break.pick(&picks)?;

                if !picks.contains(&choice) {
                    return Err(ReductionError::ForeignCandidate(choice.to_string()));
                }

                choice
            };

            graph = step::eliminate(graph, &chosen);
            steps += 1;

            let snapshot = TraceSnapshot {
                step: steps,
                eliminated: &chosen,
                graph: &graph,
            };
            if let Err(err) = sink.emit(&snapshot) {
                eprintln!("warning: {}", err);
            }
        }

        extract(&graph)
    }
}

/// Read the result off the self-loop of the sole surviving accepting state.
fn extract(graph: &StateGraph) -> Result<String, ReductionError> {
    let terminals: Vec<_> = graph.states().filter(|s| s.is_accepting()).collect();

    let terminal = match terminals.as_slice() {
        [] => return Err(ReductionError::NoAcceptingState),
        [terminal] => *terminal,
        _ => return Err(ReductionError::MultipleTerminalStates(terminals.len())),
    };

    match terminal.self_loop() {
        Some(pattern) => Ok(fragment::anchor(pattern)),
        None => Err(ReductionError::DegenerateLoop(terminal.id().to_string())),
    }
}

struct NullSink;

impl TraceSink for NullSink {
    fn emit(&mut self, _snapshot: &TraceSnapshot<'_>) -> Result<(), TraceError> {
        Ok(())
    }
}
