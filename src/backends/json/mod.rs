//! Serialize trace snapshots as JSON.
//!
//! Use it like so:
//! ```no_run
//! use kleene::backends::{DirectorySink, TraceFormat};
//! use kleene::machine::StateGraph;
//! use kleene::reduce::Reducer;
//!
//! let graph = StateGraph::builder()
//!     .diagram("my-machine.mmd").unwrap()
//!     .build().unwrap();
//!
//! // One pretty-printed snapshot file per elimination step:
//! let mut sink = DirectorySink::new("trace-output", TraceFormat::Json);
//! Reducer::new().reduce_traced(graph, &mut sink).unwrap();
//! ```

mod generator;

pub use generator::JsonGenerator;
