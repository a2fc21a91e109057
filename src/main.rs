use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bigraph::algorithms::GraphAlgorithms;
use bigraph::display::{AdjacencyListing, ArcSet, MatrixTable, PartitionReport};
use bigraph::graph::{AdjacencyMatrix, Vertex};
use bigraph::io::{LoadFromFile, MatrixReader};
use bigraph::BipartiteError;

/// Tests whether a graph given as an adjacency matrix is bipartite.
///
/// Without FILE the matrix is read from standard input: first the number of
/// vertices n, then the n*n entries (0 or 1) in row-major order.
#[derive(Parser, Debug)]
#[command(name = "bigraph", version)]
struct Args {
    /// Matrix file, either `.txt` or `.gz`
    file: Option<PathBuf>,

    /// Vertex to start the two-colouring from
    #[arg(short, long, default_value_t = 0)]
    source: Vertex,

    /// Only print the partition and the verdict
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BIGRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("bigraph=warn"));

    let format = env::var("BIGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false).with_writer(io::stderr)).init();
        }
        _ => {
            registry.with(fmt::layer().compact().with_writer(io::stderr)).init();
        }
    }
}

/// Reads the matrix interactively, prompting before the size and the entries.
fn read_stdin(out:&mut impl Write) -> anyhow::Result<AdjacencyMatrix> {
    let mut reader = MatrixReader::new(io::stdin().lock());

    writeln!(out, "Enter the size n (number of nodes) of the adjacency matrix:")?;
    out.flush()?;
    let n = reader.read_size()?;

    writeln!(out, "Enter the nxn adjacency matrix:")?;
    out.flush()?;
    Ok(reader.read_entries(n)?)
}

fn load(args:&Args, out:&mut impl Write) -> anyhow::Result<AdjacencyMatrix> {
    match &args.file {
        Some(path) => {
            let filename = path.to_str()
                .with_context(|| format!("path {} is not valid UTF-8", path.display()))?;
            let graph = AdjacencyMatrix::from_file(filename)
                .with_context(|| format!("failed to load {filename}"))?;
            Ok(graph)
        }
        None => read_stdin(out)
    }
}

fn run(args:&Args) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let graph = load(args, &mut out)?;
    info!(n = graph.num_vertices(), arcs = graph.num_arcs(), "matrix loaded");

    if !args.quiet {
        writeln!(out, "You entered the adjacency matrix:")?;
        write!(out, "{}", MatrixTable(&graph))?;
        writeln!(out, "Vertex set:")?;
        writeln!(out, "{}", ArcSet(&graph))?;
    }

    let partition = graph.bipartition(args.source)?;
    write!(out, "{}", PartitionReport(&partition))?;

    if partition.is_bipartite() {
        let uncoloured = graph.uncoloured(&partition);
        if !uncoloured.is_empty() {
            warn!(components = graph.components().len(),
                  unreached = uncoloured.len(),
                  "only the component of vertex {} was checked", args.source);
        }
        if !args.quiet {
            writeln!(out)?;
            write!(out, "{}", AdjacencyListing(&graph))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<BipartiteError>() {
                Some(BipartiteError::Io(_)) | None => eprintln!("Error: {err:#}"),
                Some(_) => {
                    println!("Error: Invalid input.");
                    eprintln!("{err:#}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
