//! Capability traits implemented by graph backends and views.
//!
//! Algorithms are written against the smallest capability they need, so a
//! filtered view or a matrix backend can stand in for a map backend.

use crate::errors::GraphError;
use crate::{Connection, MixedConnectionType, TypedConnection, VertexId};

/// Boxed iterator over vertices.
pub type Vertices<'a> = Box<dyn Iterator<Item = VertexId> + 'a>;
/// Boxed iterator over untyped connections.
pub type Connections<'a> = Box<dyn Iterator<Item = Connection> + 'a>;
/// Boxed iterator over typed connections.
pub type TypedConnections<'a> = Box<dyn Iterator<Item = TypedConnection> + 'a>;

/// Read access to the vertex set.
pub trait VertexStore {
    /// Number of vertices.
    fn order(&self) -> usize;

    /// Whether `vertex` is part of the graph.
    fn check_vertex(&self, vertex: VertexId) -> bool;

    /// Enumerates every vertex exactly once.
    fn vertices(&self) -> Vertices<'_>;
}

/// Vertex insertion.
pub trait VertexWriter: VertexStore {
    /// Adds `vertex`; fails with `DuplicateVertex` if it is already present.
    fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError>;
}

/// Vertex removal together with every incident connection.
pub trait VertexRemover: VertexStore {
    /// Removes `vertex`; fails with `NotFound` if it is absent.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError>;
}

/// Read access to arcs.
pub trait DirectedEdges: VertexStore {
    /// Number of arcs.
    fn arcs_count(&self) -> usize;

    /// Whether the arc `tail -> head` exists. Unknown endpoints are an error.
    fn check_arc(&self, tail: VertexId, head: VertexId) -> Result<bool, GraphError>;

    /// Heads of arcs leaving `vertex`.
    fn accessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError>;

    /// Tails of arcs entering `vertex`.
    fn predecessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError>;

    /// Enumerates every arc exactly once.
    fn arcs(&self) -> Connections<'_>;

    /// Vertices with no incoming arc.
    fn sources(&self) -> Result<Vec<VertexId>, GraphError> {
        let mut found = Vec::new();
        for vertex in self.vertices() {
            if self.predecessors(vertex)?.next().is_none() {
                found.push(vertex);
            }
        }
        Ok(found)
    }

    /// Vertices with no outgoing arc.
    fn sinks(&self) -> Result<Vec<VertexId>, GraphError> {
        let mut found = Vec::new();
        for vertex in self.vertices() {
            if self.accessors(vertex)?.next().is_none() {
                found.push(vertex);
            }
        }
        Ok(found)
    }
}

/// Arc insertion.
pub trait DirectedEdgesWriter: DirectedEdges + VertexWriter {
    /// Adds the arc `tail -> head`, creating missing endpoints.
    fn add_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError>;
}

/// Arc removal.
pub trait ArcRemover: DirectedEdges {
    /// Removes the arc `tail -> head`; fails with `NotFound` if it is absent.
    fn remove_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError>;
}

/// Read access to edges.
pub trait UndirectedEdges: VertexStore {
    /// Number of edges.
    fn edges_count(&self) -> usize;

    /// Whether an edge links `a` and `b`, in either order.
    fn check_edge(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError>;

    /// Vertices linked to `vertex` by an edge.
    fn neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError>;

    /// Enumerates every edge exactly once, normalized so that `tail <= head`.
    fn edges(&self) -> Connections<'_>;
}

/// Edge insertion.
pub trait UndirectedEdgesWriter: UndirectedEdges + VertexWriter {
    /// Adds an edge between `a` and `b`, creating missing endpoints.
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError>;
}

/// Edge removal.
pub trait EdgeRemover: UndirectedEdges {
    /// Removes the edge between `a` and `b`; fails with `NotFound` if absent.
    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError>;
}

/// Graphs holding both arcs and edges, at most one connection per pair.
pub trait MixedEdges: DirectedEdges + UndirectedEdges {
    /// Kind of connection between `tail` and `head`, seen from `tail`.
    fn connection_type(
        &self,
        tail: VertexId,
        head: VertexId,
    ) -> Result<MixedConnectionType, GraphError>;

    /// Enumerates every connection exactly once. Arcs are reported as
    /// `Directed` in their stored orientation, edges with `tail <= head`.
    fn typed_connections(&self) -> TypedConnections<'_>;

    /// Total number of arcs and edges.
    fn connections_count(&self) -> usize {
        self.arcs_count() + self.edges_count()
    }
}

/// Mixed graphs that accept both arcs and edges.
pub trait MixedEdgesWriter: MixedEdges + DirectedEdgesWriter + UndirectedEdgesWriter {}

impl<T> MixedEdgesWriter for T where T: MixedEdges + DirectedEdgesWriter + UndirectedEdgesWriter {}
