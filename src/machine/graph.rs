use indexmap::IndexMap;
use serde::Serialize;

use crate::machine::{Endpoint, GraphBuilder, StateId, Transition};

/// Edge map of a state. Keys are the states on the far end of each edge,
/// values are the regex labels. Iteration follows insertion order, which is
/// what keeps trace output stable within one run.
pub type EdgeMap = IndexMap<StateId, String, ahash::RandomState>;

type StateMap = IndexMap<StateId, State, ahash::RandomState>;

/// One state of the machine together with every edge incident to it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct State {
    id: StateId,
    inners: EdgeMap,
    outers: EdgeMap,
    #[serde(rename = "self")]
    self_loop: Option<String>,
    accepting: bool,
}

impl State {
    /// The default value for states that are referenced before any of their
    /// edges are known: no edges, no self-loop, not accepting.
    pub(crate) fn new(id: StateId) -> Self {
        Self {
            id,
            inners: EdgeMap::default(),
            outers: EdgeMap::default(),
            self_loop: None,
            accepting: false,
        }
    }

    /// Id of this state.
    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// Incoming cross-edges, keyed by predecessor.
    pub fn inners(&self) -> &EdgeMap {
        &self.inners
    }

    /// Outgoing cross-edges, keyed by successor.
    pub fn outers(&self) -> &EdgeMap {
        &self.outers
    }

    /// Label of the edge from `predecessor` into this state.
    pub fn inner(&self, predecessor: &StateId) -> Option<&str> {
        self.inners.get(predecessor).map(String::as_str)
    }

    /// Label of the edge from this state to `successor`.
    pub fn outer(&self, successor: &StateId) -> Option<&str> {
        self.outers.get(successor).map(String::as_str)
    }

    /// Label of this state's self-loop, if it has one.
    pub fn self_loop(&self) -> Option<&str> {
        self.self_loop.as_deref()
    }

    /// Whether this state has a direct transition to the end marker.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Elimination cost: in-degree times out-degree. A proxy for how many
    /// new cross-edges removing this state would create.
    pub fn cost(&self) -> usize {
        self.inners.len() * self.outers.len()
    }

    /// Merge `label` into the self-loop: alternates with an existing loop,
    /// otherwise becomes the loop.
    pub(crate) fn fold_self_loop(&mut self, label: &str) {
        self.self_loop = Some(match self.self_loop.as_deref() {
            Some(existing) => crate::fragment::alternate(existing, label),
            None => label.to_string(),
        });
    }

    pub(crate) fn remove_inner(&mut self, predecessor: &StateId) {
        self.inners.shift_remove(predecessor);
    }

    pub(crate) fn remove_outer(&mut self, successor: &StateId) {
        self.outers.shift_remove(successor);
    }
}

/// The transition graph of a machine, keyed by state id.
///
/// The graph is symmetric on every mutation: a cross-edge is recorded in the
/// source state's [`outers`](State::outers) and the target state's
/// [`inners`](State::inners) in the same operation.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct StateGraph {
    states: StateMap,
}

impl StateGraph {
    /// Create a [`GraphBuilder`] that loads diagrams and assembles a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Build a graph from parsed transitions.
    ///
    /// Start edges create no state of their own, edges to the end marker
    /// flag their source as accepting, and every other edge is recorded on
    /// both of its endpoint states. States are created lazily the first time
    /// an edge references them. A repeated self-loop on the same state
    /// alternates with the previous one, a repeated cross-edge overwrites.
    pub(crate) fn from_transitions(transitions: &[Transition]) -> Self {
        let mut graph = Self::default();

        for transition in transitions {
            let (from, to) = match (transition.from(), transition.to()) {
                (Endpoint::Marker, _) => continue,
                (Endpoint::State(from), Endpoint::Marker) => {
                    graph.entry(from).accepting = true;
                    continue;
                },
                (Endpoint::State(from), Endpoint::State(to)) => (from, to),
            };

            // Transition validation guarantees a label on state-to-state edges.
            let Some(label) = transition.label() else {
                continue;
            };

            if from == to {
                graph.entry(from).fold_self_loop(label);
            } else {
                graph.entry(from);
                graph.entry(to);
                graph.connect(from, to, label.to_string());
            }
        }

        graph
    }

    /// Number of states in the graph.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the graph has no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a state by id.
    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    pub(crate) fn state_mut(&mut self, id: &StateId) -> Option<&mut State> {
        self.states.get_mut(id)
    }

    /// Get-or-insert: missing states materialize with the default value.
    pub(crate) fn entry(&mut self, id: &StateId) -> &mut State {
        self.states
            .entry(id.clone())
            .or_insert_with(|| State::new(id.clone()))
    }

    /// Remove a state, keeping the order of the remaining states intact.
    pub(crate) fn remove(&mut self, id: &StateId) -> Option<State> {
        self.states.shift_remove(id)
    }

    /// Record the cross-edge `from -> to` on both endpoint states in one
    /// operation. Both states must exist.
    pub(crate) fn connect(&mut self, from: &StateId, to: &StateId, label: String) {
        self.states[to].inners.insert(from.clone(), label.clone());
        self.states[from].outers.insert(to.clone(), label);
    }
}
