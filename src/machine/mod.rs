//! This is the frontend that loads state-machine diagrams.
//!
//! Use it like so:
//! ```no_run
//! use kleene::machine::StateGraph;
//!
//! // Load multiple diagrams by joining their transitions:
//! let graph = StateGraph::builder()
//!     // Load a diagram in mermaid format
//!     .diagram("my-machine.mmd").unwrap()
//!     .build().unwrap();
//! ```
//! You can inspect the graph contents like this:
//! ```no_run
//! # use kleene::machine::StateGraph;
//! # let graph = StateGraph::builder().diagram("my-machine.mmd").unwrap().build().unwrap();
//! // A graph is nothing but a set of states, traverse them
//! for state in graph.states() {
//!     // Cross-edges are kept on both of their endpoint states
//!     for (successor, label) in state.outers() {
//!         println!("{} --> {}: {}", state.id(), successor, label);
//!     }
//!
//!     // Self-loops and the accepting flag live on the state itself
//!     println!("self: {:?}, accepting: {}", state.self_loop(), state.is_accepting());
//! }
//! ```

mod builder;
mod graph;
mod transition;

pub use builder::*;
pub use graph::*;
pub use transition::*;
