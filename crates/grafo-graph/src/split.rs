//! Partitioning into independent subgraphs.
//!
//! Colours spread forward from every start vertex. When a spreading colour
//! meets a vertex painted with another colour, every vertex of the older
//! colour is repainted by a full scan. Worst case is quadratic in the number
//! of vertices, which keeps the bookkeeping to a single map.

use std::collections::BTreeMap;

use grafo_core::{
    DirectedEdges, DirectedEdgesWriter, GraphError, MixedConnectionType, MixedEdges,
    MixedEdgesWriter, UndirectedEdges, UndirectedEdgesWriter, VertexId, VertexWriter,
};
use log::{debug, trace};

use crate::neighbours::{DirectedNeighbours, MixedNeighbours, OutNeighbours, UndirectedNeighbours};

type Colours = BTreeMap<VertexId, usize>;

/// Splits a directed graph into weakly connected subgraphs.
///
/// `make` receives the vertex count of each component and returns the empty
/// graph it is copied into. Components are ordered by their smallest vertex.
pub fn split_directed<G, D, F>(graph: &G, make: F) -> Result<Vec<D>, GraphError>
where
    G: DirectedEdges + ?Sized,
    D: DirectedEdgesWriter,
    F: FnMut(usize) -> D,
{
    let mut starts = graph.sources()?;
    starts.extend(graph.vertices());
    let colours = paint(&DirectedNeighbours::new(graph), starts)?;
    let (mut parts, lookup) = allocate(&colours, make)?;
    for arc in graph.arcs() {
        parts[lookup[&arc.tail]]
            .add_arc(arc.tail, arc.head)
            .map_err(|err| err.with_context("arc", arc))?;
    }
    Ok(parts)
}

/// Splits an undirected graph into connected subgraphs.
pub fn split_undirected<G, D, F>(graph: &G, make: F) -> Result<Vec<D>, GraphError>
where
    G: UndirectedEdges + ?Sized,
    D: UndirectedEdgesWriter,
    F: FnMut(usize) -> D,
{
    let colours = paint(&UndirectedNeighbours::new(graph), graph.vertices().collect())?;
    let (mut parts, lookup) = allocate(&colours, make)?;
    for edge in graph.edges() {
        parts[lookup[&edge.tail]]
            .add_edge(edge.tail, edge.head)
            .map_err(|err| err.with_context("edge", edge))?;
    }
    Ok(parts)
}

/// Splits a mixed graph into subgraphs connected by any arc or edge, in
/// either direction.
pub fn split_mixed<G, D, F>(graph: &G, make: F) -> Result<Vec<D>, GraphError>
where
    G: MixedEdges + ?Sized,
    D: MixedEdgesWriter,
    F: FnMut(usize) -> D,
{
    let colours = paint(&MixedNeighbours::new(graph), graph.vertices().collect())?;
    let (mut parts, lookup) = allocate(&colours, make)?;
    for conn in graph.typed_connections() {
        let part = &mut parts[lookup[&conn.tail]];
        let added = match conn.kind {
            MixedConnectionType::Directed => part.add_arc(conn.tail, conn.head),
            MixedConnectionType::DirectedReversed => part.add_arc(conn.head, conn.tail),
            MixedConnectionType::Undirected => part.add_edge(conn.tail, conn.head),
            MixedConnectionType::None => Ok(()),
        };
        added.map_err(|err| {
            err.with_context("tail", conn.tail)
                .with_context("head", conn.head)
                .with_context("kind", conn.kind)
        })?;
    }
    Ok(parts)
}

fn paint<E: OutNeighbours + ?Sized>(
    extractor: &E,
    starts: Vec<VertexId>,
) -> Result<Colours, GraphError> {
    let mut colours = Colours::new();
    let mut next_colour = 0;
    let mut stack = Vec::new();

    for start in starts {
        if colours.contains_key(&start) {
            continue;
        }
        let colour = next_colour;
        next_colour += 1;
        colours.insert(start, colour);
        stack.push(start);

        while let Some(vertex) = stack.pop() {
            let successors = extractor
                .out_neighbours(vertex)
                .map_err(|err| err.with_context("vertex", vertex).with_context("start", start))?;
            for next in successors {
                match colours.get(&next).copied() {
                    None => {
                        colours.insert(next, colour);
                        stack.push(next);
                    }
                    Some(existing) if existing != colour => {
                        trace!("repainting colour {existing} as {colour} at {next}");
                        repaint(&mut colours, existing, colour);
                    }
                    Some(_) => {}
                }
            }
        }
    }
    Ok(colours)
}

fn repaint(colours: &mut Colours, from: usize, to: usize) {
    for colour in colours.values_mut() {
        if *colour == from {
            *colour = to;
        }
    }
}

// Builds one empty graph per colour holding that colour's vertices, plus a
// vertex -> component index lookup.
fn allocate<D, F>(colours: &Colours, mut make: F) -> Result<(Vec<D>, Colours), GraphError>
where
    D: VertexWriter,
    F: FnMut(usize) -> D,
{
    let mut groups: Vec<Vec<VertexId>> = Vec::new();
    let mut group_of_colour: BTreeMap<usize, usize> = BTreeMap::new();
    let mut lookup = Colours::new();
    // Vertices arrive in ascending order, so groups are ordered by their
    // smallest vertex.
    for (vertex, colour) in colours {
        let group = *group_of_colour.entry(*colour).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[group].push(*vertex);
        lookup.insert(*vertex, group);
    }
    debug!("split produced {} components", groups.len());

    let mut parts = Vec::with_capacity(groups.len());
    for (component, group) in groups.into_iter().enumerate() {
        let mut part = make(group.len());
        for vertex in group {
            part.add_vertex(vertex)
                .map_err(|err| err.with_context("component", component))?;
        }
        parts.push(part);
    }
    Ok((parts, lookup))
}
