//! Render a graph back into Mermaid diagram text.
//!
//! Use it like so:
//! ```no_run
//! use kleene::backends::mermaid::MermaidGenerator;
//! use kleene::machine::StateGraph;
//!
//! // First, load a diagram from disk
//! let graph = StateGraph::builder()
//!     .diagram("my-machine.mmd").unwrap()
//!     .build().unwrap();
//!
//! // Then, render the normalized diagram
//! print!("{}", MermaidGenerator::new().render(&graph));
//! ```

mod generator;

pub use generator::MermaidGenerator;
