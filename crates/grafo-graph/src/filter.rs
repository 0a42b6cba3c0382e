//! Read-only views hiding a set of connections.
//!
//! A filter borrows the wrapped graph immutably for its whole life, so the
//! underlying graph cannot change while a view over it exists.

use std::collections::BTreeSet;

use grafo_core::{
    Connection, Connections, DirectedEdges, GraphError, MixedConnectionType, MixedEdges,
    TypedConnection, TypedConnections, UndirectedEdges, VertexId, VertexStore, Vertices,
};
use log::warn;

/// Directed view hiding selected arcs.
#[derive(Debug)]
pub struct ArcFilter<'a, G: ?Sized> {
    graph: &'a G,
    hidden: BTreeSet<Connection>,
    hidden_present: usize,
}

impl<'a, G: DirectedEdges + ?Sized> ArcFilter<'a, G> {
    /// Hides every arc in `arcs`. Arcs missing from `graph` are ignored.
    pub fn new(graph: &'a G, arcs: impl IntoIterator<Item = Connection>) -> Self {
        let hidden: BTreeSet<Connection> = arcs.into_iter().collect();
        let hidden_present = hidden
            .iter()
            .filter(|arc| graph.check_vertex(arc.tail) && graph.check_vertex(arc.head))
            .filter(|arc| present(graph.check_arc(arc.tail, arc.head), **arc))
            .count();
        Self {
            graph,
            hidden,
            hidden_present,
        }
    }

    /// Hides the single arc `tail -> head`.
    pub fn single(graph: &'a G, tail: VertexId, head: VertexId) -> Self {
        Self::new(graph, [Connection { tail, head }])
    }

    /// Whether the arc `tail -> head` is hidden.
    pub fn hides(&self, tail: VertexId, head: VertexId) -> bool {
        self.hidden.contains(&Connection { tail, head })
    }
}

impl<G: VertexStore + ?Sized> VertexStore for ArcFilter<'_, G> {
    fn order(&self) -> usize {
        self.graph.order()
    }

    fn check_vertex(&self, vertex: VertexId) -> bool {
        self.graph.check_vertex(vertex)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.graph.vertices()
    }
}

impl<G: DirectedEdges + ?Sized> DirectedEdges for ArcFilter<'_, G> {
    fn arcs_count(&self) -> usize {
        self.graph.arcs_count() - self.hidden_present
    }

    fn check_arc(&self, tail: VertexId, head: VertexId) -> Result<bool, GraphError> {
        Ok(self.graph.check_arc(tail, head)? && !self.hides(tail, head))
    }

    fn accessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let inner = self.graph.accessors(vertex)?;
        Ok(Box::new(inner.filter(move |head| !self.hides(vertex, *head))))
    }

    fn predecessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let inner = self.graph.predecessors(vertex)?;
        Ok(Box::new(inner.filter(move |tail| !self.hides(*tail, vertex))))
    }

    fn arcs(&self) -> Connections<'_> {
        Box::new(
            self.graph
                .arcs()
                .filter(move |arc| !self.hidden.contains(arc)),
        )
    }
}

// Hidden connections are counted only when the wrapped graph holds them.
// Both endpoints are known at this point, so a failing check is reported and
// the connection treated as absent.
fn present(check: Result<bool, GraphError>, connection: Connection) -> bool {
    match check {
        Ok(present) => present,
        Err(err) => {
            warn!("cannot check hidden connection {connection}: {err}");
            false
        }
    }
}

/// Undirected view hiding selected edges.
#[derive(Debug)]
pub struct EdgeFilter<'a, G: ?Sized> {
    graph: &'a G,
    hidden: BTreeSet<Connection>,
    hidden_present: usize,
}

impl<'a, G: UndirectedEdges + ?Sized> EdgeFilter<'a, G> {
    /// Hides every edge in `edges`, in whichever order its ends are given.
    pub fn new(graph: &'a G, edges: impl IntoIterator<Item = Connection>) -> Self {
        let hidden: BTreeSet<Connection> =
            edges.into_iter().map(Connection::normalized).collect();
        let hidden_present = hidden
            .iter()
            .filter(|edge| graph.check_vertex(edge.tail) && graph.check_vertex(edge.head))
            .filter(|edge| present(graph.check_edge(edge.tail, edge.head), **edge))
            .count();
        Self {
            graph,
            hidden,
            hidden_present,
        }
    }

    /// Hides the single edge `a -- b`.
    pub fn single(graph: &'a G, a: VertexId, b: VertexId) -> Self {
        Self::new(graph, [Connection::new(a, b)])
    }

    /// Whether the edge `a -- b` is hidden.
    pub fn hides(&self, a: VertexId, b: VertexId) -> bool {
        self.hidden.contains(&Connection::new(a, b).normalized())
    }
}

impl<G: VertexStore + ?Sized> VertexStore for EdgeFilter<'_, G> {
    fn order(&self) -> usize {
        self.graph.order()
    }

    fn check_vertex(&self, vertex: VertexId) -> bool {
        self.graph.check_vertex(vertex)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.graph.vertices()
    }
}

impl<G: UndirectedEdges + ?Sized> UndirectedEdges for EdgeFilter<'_, G> {
    fn edges_count(&self) -> usize {
        self.graph.edges_count() - self.hidden_present
    }

    fn check_edge(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        Ok(self.graph.check_edge(a, b)? && !self.hides(a, b))
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let inner = self.graph.neighbours(vertex)?;
        Ok(Box::new(inner.filter(move |other| !self.hides(vertex, *other))))
    }

    fn edges(&self) -> Connections<'_> {
        Box::new(
            self.graph
                .edges()
                .filter(move |edge| !self.hidden.contains(&edge.normalized())),
        )
    }
}

/// Mixed view composed of an [`ArcFilter`] and an [`EdgeFilter`].
#[derive(Debug)]
pub struct MixedFilter<'a, G: ?Sized> {
    arcs: ArcFilter<'a, G>,
    edges: EdgeFilter<'a, G>,
}

impl<'a, G: MixedEdges + ?Sized> MixedFilter<'a, G> {
    /// Hides every connection in `connections`, dispatching on its kind.
    pub fn new(graph: &'a G, connections: impl IntoIterator<Item = TypedConnection>) -> Self {
        let mut arcs = Vec::new();
        let mut edges = Vec::new();
        for conn in connections {
            match conn.kind {
                MixedConnectionType::Directed => arcs.push(conn.connection()),
                MixedConnectionType::DirectedReversed => arcs.push(conn.connection().reversed()),
                MixedConnectionType::Undirected => edges.push(conn.connection()),
                MixedConnectionType::None => {}
            }
        }
        Self {
            arcs: ArcFilter::new(graph, arcs),
            edges: EdgeFilter::new(graph, edges),
        }
    }

    fn hides(&self, tail: VertexId, head: VertexId, kind: MixedConnectionType) -> bool {
        match kind {
            MixedConnectionType::Directed => self.arcs.hides(tail, head),
            MixedConnectionType::DirectedReversed => self.arcs.hides(head, tail),
            MixedConnectionType::Undirected => self.edges.hides(tail, head),
            MixedConnectionType::None => false,
        }
    }
}

impl<G: VertexStore + ?Sized> VertexStore for MixedFilter<'_, G> {
    fn order(&self) -> usize {
        self.arcs.order()
    }

    fn check_vertex(&self, vertex: VertexId) -> bool {
        self.arcs.check_vertex(vertex)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.arcs.vertices()
    }
}

impl<G: MixedEdges + ?Sized> DirectedEdges for MixedFilter<'_, G> {
    fn arcs_count(&self) -> usize {
        self.arcs.arcs_count()
    }

    fn check_arc(&self, tail: VertexId, head: VertexId) -> Result<bool, GraphError> {
        self.arcs.check_arc(tail, head)
    }

    fn accessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.arcs.accessors(vertex)
    }

    fn predecessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.arcs.predecessors(vertex)
    }

    fn arcs(&self) -> Connections<'_> {
        self.arcs.arcs()
    }
}

impl<G: MixedEdges + ?Sized> UndirectedEdges for MixedFilter<'_, G> {
    fn edges_count(&self) -> usize {
        self.edges.edges_count()
    }

    fn check_edge(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        self.edges.check_edge(a, b)
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.edges.neighbours(vertex)
    }

    fn edges(&self) -> Connections<'_> {
        self.edges.edges()
    }
}

impl<G: MixedEdges + ?Sized> MixedEdges for MixedFilter<'_, G> {
    fn connection_type(
        &self,
        tail: VertexId,
        head: VertexId,
    ) -> Result<MixedConnectionType, GraphError> {
        let kind = self.arcs.graph.connection_type(tail, head)?;
        if self.hides(tail, head, kind) {
            return Ok(MixedConnectionType::None);
        }
        Ok(kind)
    }

    fn typed_connections(&self) -> TypedConnections<'_> {
        Box::new(
            self.arcs
                .graph
                .typed_connections()
                .filter(move |conn| !self.hides(conn.tail, conn.head, conn.kind)),
        )
    }
}
