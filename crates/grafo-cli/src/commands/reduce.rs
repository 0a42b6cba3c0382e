use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use grafo_core::VertexId;
use grafo_graph::{reduce_direct_paths, render_directed, DirectedMap, DotStyle};
use log::info;

use super::InputArgs;
use crate::config::CliConfig;
use crate::graph_io::{open_output, write_directed_lines};

#[derive(Args, Debug)]
pub struct ReduceArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Only drop arcs implied by paths of at most this many arcs.
    #[arg(long)]
    pub max_length: Option<f64>,
    /// Emit DOT instead of line format.
    #[arg(long)]
    pub dot: bool,
}

pub fn run(args: &ReduceArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let loaded = args.input.load(config)?;
    let graph = loaded.directed("reduce")?;

    let limit = args.max_length;
    let stop = move |_tail: VertexId, _vertex: VertexId, weight: f64| {
        limit.is_some_and(|limit| weight >= limit)
    };
    let mut reduced = DirectedMap::new();
    let dropped = reduce_direct_paths(graph, &mut reduced, Some(&stop))?;
    info!("dropped {dropped} redundant arcs");

    let mut out = open_output(args.out.as_deref())?;
    if args.dot {
        let style = DotStyle {
            name: &config.dot.name,
            ..DotStyle::default()
        };
        render_directed(&reduced, &mut out, &style)?;
    } else {
        write_directed_lines(&reduced, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
