//! The state-elimination engine.
//!
//! Use it like so:
//! ```no_run
//! use kleene::machine::StateGraph;
//! use kleene::reduce::Reducer;
//!
//! // First, load a diagram from disk
//! let graph = StateGraph::builder()
//!     .diagram("my-machine.mmd").unwrap()
//!     .build().unwrap();
//!
//! // Then, eliminate states until only the accepting one is left
//! let regex = Reducer::new().reduce(graph).unwrap();
//! ```
//! The reducer repeatedly picks the cheapest non-accepting state, removes
//! it, and folds every path through it into direct edges between its
//! predecessors and successors. What remains in the end is a single
//! accepting state whose self-loop is the regular expression of the whole
//! machine, anchored as `^(...)+$`.
//!
//! When several states are tied at the minimum cost the decision is handed
//! to a [`TieBreak`] implementation, [`Lexicographic`] by default. The
//! intermediate automaton after every step can be captured through a
//! [`TraceSink`].

mod driver;
mod selector;
mod step;
mod tiebreak;
mod trace;

pub use driver::Reducer;
pub use tiebreak::{Lexicographic, TieBreak};
pub use trace::{TraceSink, TraceSnapshot};
