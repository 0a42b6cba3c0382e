use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use grafo_core::VertexId;
use grafo_graph::{
    default_connection_style, default_vertex_style, render_directed, render_mixed,
    render_undirected, DotStyle, Style,
};

use super::InputArgs;
use crate::config::CliConfig;
use crate::graph_io::{open_output, LoadedGraph};

#[derive(Args, Debug)]
pub struct DotArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Graph name written in the DOT header.
    #[arg(long)]
    pub name: Option<String>,
    /// Leave vertices unlabelled.
    #[arg(long)]
    pub no_labels: bool,
}

pub fn run(args: &DotArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let graph = args.input.load(config)?;
    let name = args.name.as_deref().unwrap_or(&config.dot.name);
    let labels = config.dot.labels && !args.no_labels;
    let vertex = move |vertex: VertexId| {
        if labels {
            default_vertex_style(vertex)
        } else {
            Style::new()
        }
    };
    let style = DotStyle {
        name,
        vertex: &vertex,
        connection: &default_connection_style,
    };

    let mut out = open_output(args.out.as_deref())?;
    match &graph {
        LoadedGraph::Directed(graph) => render_directed(&**graph, &mut out, &style)?,
        LoadedGraph::Undirected(graph) => render_undirected(&**graph, &mut out, &style)?,
        LoadedGraph::Mixed(graph) => render_mixed(&**graph, &mut out, &style)?,
    }
    out.flush()?;
    Ok(())
}
