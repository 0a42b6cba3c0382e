use std::error::Error;
use std::io::Write;

use clap::Args;
use grafo_core::{GraphError, VertexId};
use grafo_graph::{
    all_paths, bellman_ford_single_source, check_directed_path_dijkstra,
    check_mixed_path_dijkstra, check_undirected_path_dijkstra, path_from_marks, unit_weight,
    DirectedNeighbours, MixedNeighbours, StopFn, UndirectedNeighbours,
};

use super::InputArgs;
use crate::config::CliConfig;
use crate::graph_io::{open_output, LoadedGraph};

#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Start vertex.
    #[arg(long)]
    pub from: u64,
    /// Target vertex.
    #[arg(long)]
    pub to: u64,
    /// Only accept paths of at most this many steps.
    #[arg(long)]
    pub max_length: Option<f64>,
    /// Print every simple path instead of the distance.
    #[arg(long, conflicts_with = "shortest")]
    pub all: bool,
    /// Print one shortest path (directed graphs only).
    #[arg(long)]
    pub shortest: bool,
}

pub fn run(args: &PathArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let graph = args.input.load(config)?;
    let from = VertexId::from(args.from);
    let to = VertexId::from(args.to);
    let mut out = open_output(None)?;

    if args.all {
        let paths: Box<dyn Iterator<Item = Result<Vec<VertexId>, GraphError>> + '_> =
            match &graph {
                LoadedGraph::Directed(graph) => {
                    Box::new(all_paths(DirectedNeighbours::new(&**graph), from, to))
                }
                LoadedGraph::Undirected(graph) => {
                    Box::new(all_paths(UndirectedNeighbours::new(&**graph), from, to))
                }
                LoadedGraph::Mixed(graph) => {
                    Box::new(all_paths(MixedNeighbours::new(&**graph), from, to))
                }
            };
        for path in paths {
            writeln!(out, "{}", join(&path?))?;
        }
    } else if args.shortest {
        let graph = graph.directed("path --shortest")?;
        let marks = bellman_ford_single_source(graph, from, unit_weight)?
            .ok_or("graph has a negative cycle")?;
        let path = path_from_marks(&marks, to);
        if path.is_empty() {
            writeln!(out, "unreachable")?;
        } else {
            writeln!(out, "{}", join(&path))?;
        }
    } else {
        let limit = args.max_length;
        let prune =
            move |_vertex: VertexId, weight: f64| limit.is_some_and(|limit| weight >= limit);
        let stop: Option<StopFn<'_>> = Some(&prune);
        let found = match &graph {
            LoadedGraph::Directed(graph) => {
                check_directed_path_dijkstra(&**graph, from, to, stop, unit_weight)?
            }
            LoadedGraph::Undirected(graph) => {
                check_undirected_path_dijkstra(&**graph, from, to, stop, unit_weight)?
            }
            LoadedGraph::Mixed(graph) => {
                check_mixed_path_dijkstra(&**graph, from, to, stop, unit_weight)?
            }
        };
        match found {
            Some(weight) => writeln!(out, "{weight}")?,
            None => writeln!(out, "unreachable")?,
        }
    }
    out.flush()?;
    Ok(())
}

fn join(path: &[VertexId]) -> String {
    let ids: Vec<String> = path.iter().map(ToString::to_string).collect();
    ids.join(" ")
}
