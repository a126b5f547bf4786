use clap::Parser;
use rail_sssp::config::{Config, DEFAULT_DOT_NAME, DEFAULT_INPUT};
use rail_sssp::graph::{parser, NamedGraph};
use rail_sssp::output;
use std::io::{self, Write};
use std::path::PathBuf;

/// Shortest paths over a weighted directed graph file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start vertex (case-insensitive). Without it the edge listing is printed
    start: Option<String>,

    /// Graph description file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Name of the exported dot file, `.dot` is appended if missing
    #[arg(short, long, default_value = DEFAULT_DOT_NAME)]
    dot: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = Config::default()
        .with_input(args.input)
        .with_dot_name(args.dot);

    let graph: NamedGraph<f64> = parser::read_file(&config.input)?;
    output::export_dot(&graph, &config.dot_name)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.start {
        None => output::write_edges(&graph, &mut out)?,
        Some(start) => {
            writeln!(out, "Calculating distances from {}.", start)?;
            let result = graph.distances_from(&start)?;
            output::write_distances(&graph, &result, &mut out)?;
        }
    }
    out.flush()?;

    Ok(())
}
