use std::error::Error;
use std::io::Write;

use clap::Args;
use grafo_graph::topological_sort;

use super::InputArgs;
use crate::config::CliConfig;
use crate::graph_io::open_output;

#[derive(Args, Debug)]
pub struct ToposortArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: &ToposortArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let loaded = args.input.load(config)?;
    let graph = loaded.directed("toposort")?;
    let order = topological_sort(graph)?.ok_or("graph has a cycle")?;

    let line: Vec<String> = order.iter().map(ToString::to_string).collect();
    let mut out = open_output(None)?;
    writeln!(out, "{}", line.join(" "))?;
    out.flush()?;
    Ok(())
}
