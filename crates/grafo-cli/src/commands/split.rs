use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use grafo_graph::{
    split_directed, split_mixed, split_undirected, DirectedMap, MixedMap, UndirectedMap,
};
use log::info;

use super::InputArgs;
use crate::config::CliConfig;
use crate::graph_io::{
    open_output, write_directed_lines, write_mixed_lines, write_undirected_lines, LoadedGraph,
};

#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Write one file per component into this directory instead of stdout.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run(args: &SplitArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let graph = args.input.load(config)?;
    let extension = graph.kind().extension();

    let mut parts: Vec<Vec<u8>> = Vec::new();
    match &graph {
        LoadedGraph::Directed(graph) => {
            for part in split_directed(&**graph, |_| DirectedMap::new())? {
                let mut text = Vec::new();
                write_directed_lines(&part, &mut text)?;
                parts.push(text);
            }
        }
        LoadedGraph::Undirected(graph) => {
            for part in split_undirected(&**graph, |_| UndirectedMap::new())? {
                let mut text = Vec::new();
                write_undirected_lines(&part, &mut text)?;
                parts.push(text);
            }
        }
        LoadedGraph::Mixed(graph) => {
            for part in split_mixed(&**graph, |_| MixedMap::new())? {
                let mut text = Vec::new();
                write_mixed_lines(&part, &mut text)?;
                parts.push(text);
            }
        }
    }
    info!("found {} independent subgraphs", parts.len());

    match &args.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            for (index, text) in parts.iter().enumerate() {
                let path = dir.join(format!("component_{index:03}.{extension}"));
                let mut file = BufWriter::new(File::create(&path)?);
                file.write_all(text)?;
                file.flush()?;
            }
        }
        None => {
            let mut out = open_output(None)?;
            for (index, text) in parts.iter().enumerate() {
                writeln!(out, "# component {index}")?;
                out.write_all(text)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
