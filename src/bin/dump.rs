use clap::Parser;

use kleene::{backends::mermaid::MermaidGenerator, error::Error, machine::StateGraph};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "DIAGRAM")]
    diagram: String,
}

fn run(args: &Args) -> Result<String, Error> {
    let graph = StateGraph::builder().diagram(&args.diagram)?.build()?;
    Ok(MermaidGenerator::new().render(&graph))
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(diagram) => print!("{}", diagram),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        },
    }
}
