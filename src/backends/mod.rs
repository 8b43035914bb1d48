//! Render intermediate automata for external consumption.
//!
//! Each backend turns one elimination-step snapshot into a file, the
//! [`mermaid`] backend as diagram text and the [`json`] backend as a
//! serialized snapshot. [`DirectorySink`] plugs either of them into a
//! reduction:
//! ```no_run
//! use kleene::backends::{DirectorySink, TraceFormat};
//! use kleene::machine::StateGraph;
//! use kleene::reduce::Reducer;
//!
//! let graph = StateGraph::builder()
//!     .diagram("my-machine.mmd").unwrap()
//!     .build().unwrap();
//!
//! let mut sink = DirectorySink::new("trace-output", TraceFormat::Mermaid);
//! let regex = Reducer::new().reduce_traced(graph, &mut sink).unwrap();
//! ```

pub mod json;
pub mod mermaid;

use std::path::PathBuf;

use crate::{
    error::TraceError,
    reduce::{TraceSink, TraceSnapshot},
};
use json::JsonGenerator;
use mermaid::MermaidGenerator;

/// File format of emitted trace snapshots.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TraceFormat {
    /// Diagram text, one `.mmd` file per step
    Mermaid,
    /// Serialized snapshot, one `.json` file per step
    Json,
}

/// A [`TraceSink`] that writes one file per elimination step into a
/// directory, named `step-NNN-<eliminated id>.<ext>`.
pub struct DirectorySink {
    dir: PathBuf,
    format: TraceFormat,
}

impl DirectorySink {
    /// Create a sink that writes `format` files into `dir`. The directory
    /// must already exist.
    pub fn new<P: Into<PathBuf>>(dir: P, format: TraceFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }
}

impl TraceSink for DirectorySink {
    fn emit(&mut self, snapshot: &TraceSnapshot<'_>) -> Result<(), TraceError> {
        let extension = match self.format {
            TraceFormat::Mermaid => "mmd",
            TraceFormat::Json => "json",
        };
        let name = format!("step-{:03}-{}.{}", snapshot.step, snapshot.eliminated, extension);
        let path = self.dir.join(name);

        match self.format {
            TraceFormat::Mermaid => MermaidGenerator::new().generate(path, snapshot.graph),
            TraceFormat::Json => JsonGenerator::new().generate(path, snapshot),
        }
    }
}
