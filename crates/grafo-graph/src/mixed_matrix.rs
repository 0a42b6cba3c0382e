use grafo_core::{
    Connections, DirectedEdges, DirectedEdgesWriter, GraphError, MixedConnectionType,
    MixedEdges, TypedConnection, TypedConnections, UndirectedEdges, UndirectedEdgesWriter,
    VertexId, VertexRemover, VertexStore, VertexWriter, Vertices,
};

use crate::indexer::{allocate_cells, triangular_len, DenseIndex};

/// Mixed graph stored as a packed triangular matrix of connection types.
///
/// Each cell describes the pair as seen from the vertex with the smaller dense
/// index. Same limitations as [`UndirectedMatrix`](crate::UndirectedMatrix):
/// fixed capacity, no removal, no loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedMatrix {
    index: DenseIndex,
    cells: Vec<MixedConnectionType>,
    arcs_count: usize,
    edges_count: usize,
}

impl MixedMatrix {
    /// Creates an empty matrix able to hold `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics or aborts like `vec!` when the cells cannot be allocated. Use
    /// [`Self::try_with_capacity`] for untrusted capacities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: DenseIndex::new(capacity),
            cells: vec![MixedConnectionType::None; triangular_len(capacity)],
            arcs_count: 0,
            edges_count: 0,
        }
    }

    /// Creates an empty matrix, failing when `capacity` is too large to
    /// allocate.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GraphError> {
        Ok(Self {
            index: DenseIndex::new(capacity),
            cells: allocate_cells(capacity, MixedConnectionType::None)?,
            arcs_count: 0,
            edges_count: 0,
        })
    }

    /// Maximum number of vertices.
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    fn dense_type(&self, from: usize, to: usize) -> MixedConnectionType {
        if from == to {
            return MixedConnectionType::None;
        }
        let stored = self.cells[self.index.slot(from, to)];
        if from < to {
            stored
        } else {
            stored.reversed()
        }
    }

    fn filtered(
        &self,
        vertex: VertexId,
        kind: MixedConnectionType,
    ) -> Result<Vertices<'_>, GraphError> {
        let own = self.index.require(vertex)?;
        Ok(Box::new((0..self.index.len()).filter_map(move |other| {
            (self.dense_type(own, other) == kind).then(|| self.index.vertex(other))
        })))
    }

    fn connect(
        &mut self,
        tail: VertexId,
        head: VertexId,
        kind: MixedConnectionType,
    ) -> Result<(), GraphError> {
        if tail == head {
            return Err(GraphError::unsupported("matrix graphs do not store loops")
                .with_context("vertex", tail));
        }
        let (it, ih) = self.index.touch_pair(tail, head)?;
        let existing = self.dense_type(it, ih);
        if existing != MixedConnectionType::None {
            return Err(GraphError::duplicate_connection("vertices are already connected")
                .with_context("tail", tail)
                .with_context("head", head)
                .with_context("existing", existing)
                .with_context("requested", kind));
        }
        let slot = self.index.slot(it, ih);
        self.cells[slot] = if it < ih { kind } else { kind.reversed() };
        Ok(())
    }

    fn pairs(&self) -> impl Iterator<Item = (usize, usize, MixedConnectionType)> + '_ {
        let count = self.index.len();
        (0..count).flat_map(move |i| {
            ((i + 1)..count).filter_map(move |j| {
                let kind = self.cells[self.index.slot(i, j)];
                (kind != MixedConnectionType::None).then_some((i, j, kind))
            })
        })
    }

    fn typed(&self, i: usize, j: usize, kind: MixedConnectionType) -> Option<TypedConnection> {
        let (a, b) = (self.index.vertex(i), self.index.vertex(j));
        match kind {
            MixedConnectionType::Directed => Some(TypedConnection::directed(a, b)),
            MixedConnectionType::DirectedReversed => Some(TypedConnection::directed(b, a)),
            MixedConnectionType::Undirected => Some(TypedConnection::undirected(a, b)),
            MixedConnectionType::None => None,
        }
    }
}

impl VertexStore for MixedMatrix {
    fn order(&self) -> usize {
        self.index.len()
    }

    fn check_vertex(&self, vertex: VertexId) -> bool {
        self.index.contains(vertex)
    }

    fn vertices(&self) -> Vertices<'_> {
        Box::new(self.index.vertices().iter().copied())
    }
}

impl VertexWriter for MixedMatrix {
    fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        self.index.insert(vertex).map(|_| ())
    }
}

impl VertexRemover for MixedMatrix {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        Err(GraphError::unsupported("matrix graphs cannot remove vertices")
            .with_context("vertex", vertex))
    }
}

impl DirectedEdges for MixedMatrix {
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
        Box::new(
            self.typed_connections()
                .filter(|conn| conn.kind == MixedConnectionType::Directed)
                .map(|conn| conn.connection()),
        )
    }
}

impl DirectedEdgesWriter for MixedMatrix {
    fn add_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError> {
        self.connect(tail, head, MixedConnectionType::Directed)?;
        self.arcs_count += 1;
        Ok(())
    }
}

impl UndirectedEdges for MixedMatrix {
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
        Box::new(
            self.typed_connections()
                .filter(|conn| conn.kind == MixedConnectionType::Undirected)
                .map(|conn| conn.connection()),
        )
    }
}

impl UndirectedEdgesWriter for MixedMatrix {
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        self.connect(a, b, MixedConnectionType::Undirected)?;
        self.edges_count += 1;
        Ok(())
    }
}

impl MixedEdges for MixedMatrix {
    fn connection_type(
        &self,
        tail: VertexId,
        head: VertexId,
    ) -> Result<MixedConnectionType, GraphError> {
        let it = self
            .index
            .require(tail)
            .map_err(|err| err.with_context("head", head))?;
        let ih = self
            .index
            .require(head)
            .map_err(|err| err.with_context("tail", tail))?;
        Ok(self.dense_type(it, ih))
    }

    fn typed_connections(&self) -> TypedConnections<'_> {
        Box::new(
            self.pairs()
                .filter_map(move |(i, j, kind)| self.typed(i, j, kind)),
        )
    }
}
