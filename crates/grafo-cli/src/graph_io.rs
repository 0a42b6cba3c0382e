use std::collections::BTreeSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use grafo_core::{
    DirectedEdges, GraphError, MixedConnectionType, MixedEdges, UndirectedEdges, VertexId,
};
use grafo_graph::{
    read_directed, read_mixed, read_undirected, DirectedMap, GraphConfig, GraphKind, MixedMap,
    MixedMatrix, Storage, UndirectedMap, UndirectedMatrix,
};
use log::{debug, info};

/// A graph loaded from a line-format file, behind the capability traits.
pub enum LoadedGraph {
    Directed(Box<dyn DirectedEdges>),
    Undirected(Box<dyn UndirectedEdges>),
    Mixed(Box<dyn MixedEdges>),
}

impl LoadedGraph {
    pub fn kind(&self) -> GraphKind {
        match self {
            LoadedGraph::Directed(_) => GraphKind::Directed,
            LoadedGraph::Undirected(_) => GraphKind::Undirected,
            LoadedGraph::Mixed(_) => GraphKind::Mixed,
        }
    }

    pub fn directed(&self, command: &str) -> Result<&dyn DirectedEdges, Box<dyn Error>> {
        match self {
            LoadedGraph::Directed(graph) => Ok(&**graph),
            other => Err(format!(
                "`{command}` needs a directed graph, got a {:?} one",
                other.kind()
            )
            .into()),
        }
    }
}

pub fn load_graph(path: &Path, config: &GraphConfig) -> Result<LoadedGraph, Box<dyn Error>> {
    let file =
        File::open(path).map_err(|err| GraphError::from(err).with_context("path", path.display()))?;
    let reader = BufReader::new(file);
    let attach = |err: GraphError| err.with_context("path", path.display());

    let kind = config.kind.unwrap_or(GraphKind::Directed);
    let graph = match (kind, config.storage) {
        (GraphKind::Directed, Storage::Map) => {
            let mut graph = DirectedMap::new();
            read_directed(reader, &mut graph).map_err(attach)?;
            LoadedGraph::Directed(Box::new(graph))
        }
        (GraphKind::Directed, Storage::Matrix { capacity }) => {
            let mut graph = MixedMatrix::try_with_capacity(capacity).map_err(attach)?;
            read_directed(reader, &mut graph).map_err(attach)?;
            LoadedGraph::Directed(Box::new(graph))
        }
        (GraphKind::Undirected, Storage::Map) => {
            let mut graph = UndirectedMap::new();
            read_undirected(reader, &mut graph).map_err(attach)?;
            LoadedGraph::Undirected(Box::new(graph))
        }
        (GraphKind::Undirected, Storage::Matrix { capacity }) => {
            let mut graph = UndirectedMatrix::try_with_capacity(capacity).map_err(attach)?;
            read_undirected(reader, &mut graph).map_err(attach)?;
            LoadedGraph::Undirected(Box::new(graph))
        }
        (GraphKind::Mixed, Storage::Map) => {
            let mut graph = MixedMap::new();
            read_mixed(reader, &mut graph).map_err(attach)?;
            LoadedGraph::Mixed(Box::new(graph))
        }
        (GraphKind::Mixed, Storage::Matrix { capacity }) => {
            let mut graph = MixedMatrix::try_with_capacity(capacity).map_err(attach)?;
            read_mixed(reader, &mut graph).map_err(attach)?;
            LoadedGraph::Mixed(Box::new(graph))
        }
    };
    info!("loaded {:?} graph from {}", kind, path.display());
    debug!("storage: {:?}", config.storage);
    Ok(graph)
}

/// Opens `path` for writing, or stdout when absent.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

// Isolated vertices go on their own line so that reading the output back
// yields the same graph.
fn write_isolated<W: Write + ?Sized>(
    out: &mut W,
    vertices: impl Iterator<Item = VertexId>,
    connected: &BTreeSet<VertexId>,
) -> io::Result<()> {
    for vertex in vertices {
        if !connected.contains(&vertex) {
            writeln!(out, "{vertex}")?;
        }
    }
    Ok(())
}

pub fn write_directed_lines<G, W>(graph: &G, out: &mut W) -> io::Result<()>
where
    G: DirectedEdges + ?Sized,
    W: Write + ?Sized,
{
    let mut connected = BTreeSet::new();
    for arc in graph.arcs() {
        writeln!(out, "{}>{}", arc.tail, arc.head)?;
        connected.insert(arc.tail);
        connected.insert(arc.head);
    }
    write_isolated(out, graph.vertices(), &connected)
}

pub fn write_undirected_lines<G, W>(graph: &G, out: &mut W) -> io::Result<()>
where
    G: UndirectedEdges + ?Sized,
    W: Write + ?Sized,
{
    let mut connected = BTreeSet::new();
    for edge in graph.edges() {
        writeln!(out, "{}-{}", edge.tail, edge.head)?;
        connected.insert(edge.tail);
        connected.insert(edge.head);
    }
    write_isolated(out, graph.vertices(), &connected)
}

pub fn write_mixed_lines<G, W>(graph: &G, out: &mut W) -> io::Result<()>
where
    G: MixedEdges + ?Sized,
    W: Write + ?Sized,
{
    let mut connected = BTreeSet::new();
    for conn in graph.typed_connections() {
        let (tail, head) = match conn.kind {
            MixedConnectionType::DirectedReversed => (conn.head, conn.tail),
            _ => (conn.tail, conn.head),
        };
        match conn.kind {
            MixedConnectionType::Undirected => writeln!(out, "{tail}-{head}")?,
            MixedConnectionType::None => continue,
            _ => writeln!(out, "{tail}>{head}")?,
        }
        connected.insert(tail);
        connected.insert(head);
    }
    write_isolated(out, graph.vertices(), &connected)
}
