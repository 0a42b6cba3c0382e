use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use grafo_graph::GraphKind;

use crate::config::{resolve_graph, CliConfig};
use crate::graph_io::{load_graph, LoadedGraph};

pub mod dot;
pub mod path;
pub mod reduce;
pub mod split;
pub mod toposort;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    Directed,
    Undirected,
    Mixed,
}

impl From<KindArg> for GraphKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Directed => GraphKind::Directed,
            KindArg::Undirected => GraphKind::Undirected,
            KindArg::Mixed => GraphKind::Mixed,
        }
    }
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Line-format graph file (`.dgr`, `.ugr` or `.mgr`).
    pub input: PathBuf,
    /// Graph kind, when the extension does not tell.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
    /// Store the graph in a fixed-capacity matrix instead of maps.
    #[arg(long)]
    pub capacity: Option<usize>,
}

impl InputArgs {
    pub fn load(&self, config: &CliConfig) -> Result<LoadedGraph, Box<dyn Error>> {
        let graph = resolve_graph(
            config,
            &self.input,
            self.kind.map(GraphKind::from),
            self.capacity,
        )?;
        load_graph(&self.input, &graph)
    }
}
