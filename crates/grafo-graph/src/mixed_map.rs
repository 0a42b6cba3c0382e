use std::collections::BTreeMap;

use grafo_core::{
    ArcRemover, Connection, Connections, DirectedEdges, DirectedEdgesWriter, EdgeRemover,
    GraphError, MixedConnectionType, MixedEdges, TypedConnection, TypedConnections,
    UndirectedEdges, UndirectedEdgesWriter, VertexId, VertexRemover, VertexStore, VertexWriter,
    Vertices,
};
use log::trace;

type Row = BTreeMap<VertexId, MixedConnectionType>;

/// Mixed graph stored as one typed row per vertex.
///
/// An arc `tail -> head` is `Directed` in the row of `tail` and
/// `DirectedReversed` in the row of `head`; an edge is `Undirected` in both.
/// Loops are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixedMap {
    rows: BTreeMap<VertexId, Row>,
    arcs_count: usize,
    edges_count: usize,
}

impl MixedMap {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn row(&self, vertex: VertexId) -> Result<&Row, GraphError> {
        self.rows
            .get(&vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    fn stored(&self, tail: VertexId, head: VertexId) -> MixedConnectionType {
        self.rows
            .get(&tail)
            .and_then(|row| row.get(&head))
            .copied()
            .unwrap_or_default()
    }

    fn filtered(
        &self,
        vertex: VertexId,
        kind: MixedConnectionType,
    ) -> Result<Vertices<'_>, GraphError> {
        let row = self.row(vertex)?;
        Ok(Box::new(
            row.iter()
                .filter(move |(_, stored)| **stored == kind)
                .map(|(other, _)| *other),
        ))
    }

    fn connect(
        &mut self,
        tail: VertexId,
        head: VertexId,
        kind: MixedConnectionType,
    ) -> Result<(), GraphError> {
        if tail == head {
            return Err(GraphError::unsupported("mixed graphs do not store loops")
                .with_context("vertex", tail));
        }
        let existing = self.stored(tail, head);
        if existing != MixedConnectionType::None {
            return Err(GraphError::duplicate_connection("vertices are already connected")
                .with_context("tail", tail)
                .with_context("head", head)
                .with_context("existing", existing)
                .with_context("requested", kind));
        }
        self.rows.entry(tail).or_default().insert(head, kind);
        self.rows.entry(head).or_default().insert(tail, kind.reversed());
        Ok(())
    }

    fn disconnect(
        &mut self,
        tail: VertexId,
        head: VertexId,
        kind: MixedConnectionType,
    ) -> Result<(), GraphError> {
        if self.stored(tail, head) != kind {
            return Err(GraphError::not_found("connection does not exist")
                .with_context("tail", tail)
                .with_context("head", head)
                .with_context("kind", kind));
        }
        if let Some(row) = self.rows.get_mut(&tail) {
            row.remove(&head);
        }
        if let Some(row) = self.rows.get_mut(&head) {
            row.remove(&tail);
        }
        Ok(())
    }
}

impl VertexStore for MixedMap {
    fn order(&self) -> usize {
        self.rows.len()
    }

    fn check_vertex(&self, vertex: VertexId) -> bool {
        self.rows.contains_key(&vertex)
    }

    fn vertices(&self) -> Vertices<'_> {
        Box::new(self.rows.keys().copied())
    }
}

impl VertexWriter for MixedMap {
    fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if self.rows.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(vertex));
        }
        self.rows.insert(vertex, Row::new());
        Ok(())
    }
}

impl VertexRemover for MixedMap {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        let row = self.rows.remove(&vertex).ok_or_else(|| {
            GraphError::not_found("vertex does not exist").with_context("vertex", vertex)
        })?;
        for (other, kind) in row {
            if let Some(other_row) = self.rows.get_mut(&other) {
                other_row.remove(&vertex);
            }
            match kind {
                MixedConnectionType::Undirected => self.edges_count -= 1,
                MixedConnectionType::Directed | MixedConnectionType::DirectedReversed => {
                    self.arcs_count -= 1
                }
                MixedConnectionType::None => {}
            }
        }
        trace!("removed vertex {vertex} from mixed map");
        Ok(())
    }
}

impl DirectedEdges for MixedMap {
    fn arcs_count(&self) -> usize {
        self.arcs_count
    }

    fn check_arc(&self, tail: VertexId, head: VertexId) -> Result<bool, GraphError> {
        Ok(self.connection_type(tail, head)? == MixedConnectionType::Directed)
    }

    fn accessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.filtered(vertex, MixedConnectionType::Directed)
    }

    fn predecessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.filtered(vertex, MixedConnectionType::DirectedReversed)
    }

    fn arcs(&self) -> Connections<'_> {
        Box::new(self.rows.iter().flat_map(|(tail, row)| {
            row.iter()
                .filter(|(_, kind)| **kind == MixedConnectionType::Directed)
                .map(move |(head, _)| Connection::new(*tail, *head))
        }))
    }
}

impl DirectedEdgesWriter for MixedMap {
    fn add_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError> {
        self.connect(tail, head, MixedConnectionType::Directed)?;
        self.arcs_count += 1;
        Ok(())
    }
}

impl ArcRemover for MixedMap {
    fn remove_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError> {
        self.disconnect(tail, head, MixedConnectionType::Directed)?;
        self.arcs_count -= 1;
        Ok(())
    }
}

impl UndirectedEdges for MixedMap {
    fn edges_count(&self) -> usize {
        self.edges_count
    }

    fn check_edge(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        Ok(self.connection_type(a, b)? == MixedConnectionType::Undirected)
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        self.filtered(vertex, MixedConnectionType::Undirected)
    }

    fn edges(&self) -> Connections<'_> {
        Box::new(self.rows.iter().flat_map(|(a, row)| {
            row.range(*a..)
                .filter(|(_, kind)| **kind == MixedConnectionType::Undirected)
                .map(move |(b, _)| Connection::new(*a, *b))
        }))
    }
}

impl UndirectedEdgesWriter for MixedMap {
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        self.connect(a, b, MixedConnectionType::Undirected)?;
        self.edges_count += 1;
        Ok(())
    }
}

impl EdgeRemover for MixedMap {
    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        self.disconnect(a, b, MixedConnectionType::Undirected)?;
        self.edges_count -= 1;
        Ok(())
    }
}

impl MixedEdges for MixedMap {
    fn connection_type(
        &self,
        tail: VertexId,
        head: VertexId,
    ) -> Result<MixedConnectionType, GraphError> {
        let row = self
            .row(tail)
            .map_err(|err| err.with_context("head", head))?;
        if !self.rows.contains_key(&head) {
            return Err(GraphError::unknown_vertex(head).with_context("tail", tail));
        }
        Ok(row.get(&head).copied().unwrap_or_default())
    }

    fn typed_connections(&self) -> TypedConnections<'_> {
        Box::new(self.rows.iter().flat_map(|(tail, row)| {
            row.iter().filter_map(move |(head, kind)| match kind {
                MixedConnectionType::Directed => Some(TypedConnection::directed(*tail, *head)),
                MixedConnectionType::Undirected if tail < head => {
                    Some(TypedConnection::undirected(*tail, *head))
                }
                _ => None,
            })
        }))
    }
}
