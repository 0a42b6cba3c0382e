use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    dot::{self, DotArgs},
    path::{self, PathArgs},
    reduce::{self, ReduceArgs},
    split::{self, SplitArgs},
    toposort::{self, ToposortArgs},
};

mod commands;
mod config;
mod graph_io;

#[derive(Parser, Debug)]
#[command(name = "grafo", about = "Graph toolkit over line-format files")]
struct Cli {
    /// Enable debug logging; `RUST_LOG` overrides.
    #[arg(long, global = true)]
    verbose: bool,
    /// YAML file with graph and rendering settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a graph as Graphviz DOT.
    Dot(DotArgs),
    /// Print the vertices of a directed graph in topological order.
    Toposort(ToposortArgs),
    /// Split a graph into its independent subgraphs.
    Split(SplitArgs),
    /// Drop the arcs of a directed graph implied by longer paths.
    Reduce(ReduceArgs),
    /// Look for paths between two vertices.
    Path(PathArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_module("grafo", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    match &cli.command {
        Command::Dot(args) => dot::run(args, &config),
        Command::Toposort(args) => toposort::run(args, &config),
        Command::Split(args) => split::run(args, &config),
        Command::Reduce(args) => reduce::run(args, &config),
        Command::Path(args) => path::run(args, &config),
    }
}
