//! This library turns state-machine diagrams into equivalent regular expressions.
//!
//! It consists of
//! - __machine__: Load a diagram in Mermaid `stateDiagram` syntax and build a transition graph from it.
//! - __reduce__: Run the state-elimination algorithm on the graph until only the accepting state
//!   remains, then read the final regular expression off its self-loop.
//! - __backends__: Render intermediate automata back into diagram text or JSON, one file per
//!   elimination step.
//!
//! ## Getting Started
//! The first step always is to build a graph. To do this use the
//! [`StateGraph::builder()`](machine::StateGraph::builder) method that will give you access to a
//! [`GraphBuilder`](machine::GraphBuilder) like this:
//! ```no_run
//! use kleene::machine::StateGraph;
//!
//! // Load multiple diagrams by joining their transitions:
//! let graph = StateGraph::builder()
//!     // Load a diagram in mermaid format
//!     .diagram("my-machine.mmd").unwrap()
//!     .build().unwrap();
//! ```
//! Then, hand the graph to a [`Reducer`](reduce::Reducer):
//! ```no_run
//! # use kleene::machine::StateGraph;
//! use kleene::reduce::Reducer;
//!
//! # let graph = StateGraph::builder().diagram("my-machine.mmd").unwrap().build().unwrap();
//! let regex = Reducer::new().reduce(graph).unwrap();
//! println!("{}", regex);
//! ```
//! And that's it.
//!
//! Ties between equally cheap elimination candidates are broken lexicographically by default.
//! Plug in your own policy through the [`TieBreak`](reduce::TieBreak) trait, and capture the
//! automaton after every elimination step through the [`TraceSink`](reduce::TraceSink) trait.

#![deny(missing_docs)]

pub(crate) mod fragment;
pub(crate) mod parser;

pub mod backends;
pub mod error;
pub mod machine;
pub mod reduce;
