use grafo_core::{
    Connection, Connections, GraphError, UndirectedEdges, UndirectedEdgesWriter, VertexId,
    VertexRemover, VertexStore, VertexWriter, Vertices,
};

use crate::indexer::{allocate_cells, triangular_len, DenseIndex};

/// Undirected graph stored as a packed triangular bit matrix.
///
/// The capacity is fixed at construction. The matrix is grow-only: neither
/// vertices nor edges can be removed, and loops cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedMatrix {
    index: DenseIndex,
    cells: Vec<bool>,
    edges_count: usize,
}

impl UndirectedMatrix {
    /// Creates an empty matrix able to hold `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics or aborts like `vec!` when the cells cannot be allocated. Use
    /// [`Self::try_with_capacity`] for untrusted capacities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: DenseIndex::new(capacity),
            cells: vec![false; triangular_len(capacity)],
            edges_count: 0,
        }
    }

    /// Creates an empty matrix, failing when `capacity` is too large to
    /// allocate.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GraphError> {
        Ok(Self {
            index: DenseIndex::new(capacity),
            cells: allocate_cells(capacity, false)?,
            edges_count: 0,
        })
    }

    /// Maximum number of vertices.
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }
}

impl VertexStore for UndirectedMatrix {
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

impl VertexWriter for UndirectedMatrix {
    fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        self.index.insert(vertex).map(|_| ())
    }
}

impl VertexRemover for UndirectedMatrix {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        Err(GraphError::unsupported("matrix graphs cannot remove vertices")
            .with_context("vertex", vertex))
    }
}

impl UndirectedEdges for UndirectedMatrix {
    fn edges_count(&self) -> usize {
        self.edges_count
    }

    fn check_edge(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        let ia = self
            .index
            .require(a)
            .map_err(|err| err.with_context("other", b))?;
        let ib = self
            .index
            .require(b)
            .map_err(|err| err.with_context("other", a))?;
        if ia == ib {
            return Ok(false);
        }
        Ok(self.cells[self.index.slot(ia, ib)])
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let own = self.index.require(vertex)?;
        Ok(Box::new((0..self.index.len()).filter_map(move |other| {
            (other != own && self.cells[self.index.slot(own, other)])
                .then(|| self.index.vertex(other))
        })))
    }

    fn edges(&self) -> Connections<'_> {
        let count = self.index.len();
        Box::new((0..count).flat_map(move |i| {
            ((i + 1)..count).filter_map(move |j| {
                self.cells[self.index.slot(i, j)].then(|| {
                    Connection::new(self.index.vertex(i), self.index.vertex(j)).normalized()
                })
            })
        }))
    }
}

impl UndirectedEdgesWriter for UndirectedMatrix {
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::unsupported("matrix graphs do not store loops")
                .with_context("vertex", a));
        }
        let (ia, ib) = self.index.touch_pair(a, b)?;
        let slot = self.index.slot(ia, ib);
        if self.cells[slot] {
            return Err(GraphError::duplicate_connection("edge already exists")
                .with_context("a", a)
                .with_context("b", b));
        }
        self.cells[slot] = true;
        self.edges_count += 1;
        Ok(())
    }
}
