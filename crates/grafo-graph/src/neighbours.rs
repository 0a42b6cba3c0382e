//! Uniform neighbour access over directed, undirected and mixed graphs.
//!
//! Every search and decomposition algorithm in this crate is written against
//! [`OutNeighbours`] / [`InNeighbours`] only; the adapters below bind those to
//! arcs, edges, or both.

use grafo_core::{DirectedEdges, GraphError, MixedEdges, UndirectedEdges, VertexId, Vertices};

/// Vertices reachable from a vertex in one step.
pub trait OutNeighbours {
    /// Out-neighbours of `vertex`; fails when `vertex` is unknown.
    fn out_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError>;
}

/// Vertices from which a vertex is reachable in one step.
pub trait InNeighbours {
    /// In-neighbours of `vertex`; fails when `vertex` is unknown.
    fn in_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError>;
}

impl<T: OutNeighbours + ?Sized> OutNeighbours for &T {
    fn out_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        (**self).out_neighbours(vertex)
    }
}

impl<T: InNeighbours + ?Sized> InNeighbours for &T {
    fn in_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        (**self).in_neighbours(vertex)
    }
}

/// Follows arcs: accessors out, predecessors in.
#[derive(Debug)]
pub struct DirectedNeighbours<'a, G: ?Sized> {
    graph: &'a G,
}

impl<'a, G: DirectedEdges + ?Sized> DirectedNeighbours<'a, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: DirectedEdges + ?Sized> OutNeighbours for DirectedNeighbours<'_, G> {
    fn out_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.graph.accessors(vertex)
    }
}

impl<G: DirectedEdges + ?Sized> InNeighbours for DirectedNeighbours<'_, G> {
    fn in_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.graph.predecessors(vertex)
    }
}

/// Follows edges in both roles.
#[derive(Debug)]
pub struct UndirectedNeighbours<'a, G: ?Sized> {
    graph: &'a G,
}

impl<'a, G: UndirectedEdges + ?Sized> UndirectedNeighbours<'a, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: UndirectedEdges + ?Sized> OutNeighbours for UndirectedNeighbours<'_, G> {
    fn out_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.graph.neighbours(vertex)
    }
}

impl<G: UndirectedEdges + ?Sized> InNeighbours for UndirectedNeighbours<'_, G> {
    fn in_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.graph.neighbours(vertex)
    }
}

/// Follows arcs and edges.
///
/// A pair never holds an arc and an edge at once, so the chained sequences
/// carry no duplicates.
#[derive(Debug)]
pub struct MixedNeighbours<'a, G: ?Sized> {
    graph: &'a G,
}

impl<'a, G: MixedEdges + ?Sized> MixedNeighbours<'a, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: MixedEdges + ?Sized> OutNeighbours for MixedNeighbours<'_, G> {
    fn out_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let arcs = self.graph.accessors(vertex)?;
        let edges = self.graph.neighbours(vertex)?;
        Ok(Box::new(arcs.chain(edges)))
    }
}

impl<G: MixedEdges + ?Sized> InNeighbours for MixedNeighbours<'_, G> {
    fn in_neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let arcs = self.graph.predecessors(vertex)?;
        let edges = self.graph.neighbours(vertex)?;
        Ok(Box::new(arcs.chain(edges)))
    }
}
