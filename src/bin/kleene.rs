use clap::Parser;
use itertools::Itertools;
use std::io::{stdin, stdout, Write};

use kleene::{
    backends::{DirectorySink, TraceFormat},
    error::{Error, ReductionError},
    machine::{StateGraph, StateId},
    reduce::{Reducer, TieBreak},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum SnapshotFormat {
    Mermaid,
    Json,
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotFormat::Mermaid => write!(f, "mermaid"),
            SnapshotFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "DIAGRAM")]
    diagram: String,

    /// Directory that receives one snapshot file per elimination step
    #[arg(long)]
    traces: Option<String>,

    #[arg(long, default_value_t = SnapshotFormat::Mermaid)]
    format: SnapshotFormat,

    /// Ask on stdin which state to eliminate when candidates are tied
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

/// Prompts on stdin until the user names one of the offered candidates.
struct Prompt;

impl TieBreak for Prompt {
    fn pick(&mut self, candidates: &[StateId]) -> Result<StateId, ReductionError> {
        println!(
            "States tied at the lowest cost: {}",
            candidates.iter().join(", ")
        );

        loop {
            print!("State to eliminate: ");
            stdout()
                .flush()
                .map_err(|err| ReductionError::TieBreakAborted(format!("{}", err)))?;

            let mut line = String::new();
            match stdin().read_line(&mut line) {
                Ok(0) => {
                    return Err(ReductionError::TieBreakAborted(
                        "stdin was closed".to_string(),
                    ))
                },
                Ok(_) => {
                    let choice = line.trim();

                    if let Some(id) = candidates.iter().find(|c| c.as_str() == choice) {
                        return Ok(id.clone());
                    }

                    println!("'{}' is not a candidate", choice);
                },
                Err(err) => return Err(ReductionError::TieBreakAborted(format!("{}", err))),
            }
        }
    }
}

fn mkdir(dir: &str) {
    match std::fs::create_dir(dir) {
        Ok(()) => {},
        Err(err) => {
            if err.kind() != std::io::ErrorKind::AlreadyExists {
                panic!("Could not create directory {}", dir);
            }
        },
    }
}

fn reduce<T: TieBreak>(
    mut reducer: Reducer<T>,
    graph: StateGraph,
    args: &Args,
) -> Result<String, ReductionError> {
    if let Some(traces) = &args.traces {
        mkdir(traces);

        let format = match args.format {
            SnapshotFormat::Mermaid => TraceFormat::Mermaid,
            SnapshotFormat::Json => TraceFormat::Json,
        };
        let mut sink = DirectorySink::new(traces.as_str(), format);

        reducer.reduce_traced(graph, &mut sink)
    } else {
        reducer.reduce(graph)
    }
}

fn run(args: &Args) -> Result<String, Error> {
    let graph = StateGraph::builder().diagram(&args.diagram)?.build()?;

    let regex = if args.interactive {
        reduce(Reducer::with_tie_break(Prompt), graph, args)?
    } else {
        reduce(Reducer::new(), graph, args)?
    };

    Ok(regex)
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(regex) => println!("{}", regex),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        },
    }
}
