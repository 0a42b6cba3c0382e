use std::collections::{BTreeMap, BTreeSet};

use grafo_core::{
    Connection, Connections, EdgeRemover, GraphError, UndirectedEdges, UndirectedEdgesWriter,
    VertexId, VertexRemover, VertexStore, VertexWriter, Vertices,
};
use log::trace;

/// Undirected graph stored as mirrored neighbour sets.
///
/// An edge `a -- b` appears in the set of `a` and in the set of `b`. A loop
/// `a -- a` appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedMap {
    vertices: BTreeMap<VertexId, BTreeSet<VertexId>>,
    edges_count: usize,
}

impl UndirectedMap {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn linked(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }
}

impl VertexStore for UndirectedMap {
    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn check_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    fn vertices(&self) -> Vertices<'_> {
        Box::new(self.vertices.keys().copied())
    }
}

impl VertexWriter for UndirectedMap {
    fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if self.vertices.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(vertex));
        }
        self.vertices.insert(vertex, BTreeSet::new());
        Ok(())
    }
}

impl VertexRemover for UndirectedMap {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        let neighbours = self.vertices.remove(&vertex).ok_or_else(|| {
            GraphError::not_found("vertex does not exist").with_context("vertex", vertex)
        })?;
        for other in &neighbours {
            if let Some(set) = self.vertices.get_mut(other) {
                set.remove(&vertex);
            }
        }
        self.edges_count -= neighbours.len();
        trace!("removed vertex {vertex} from undirected map");
        Ok(())
    }
}

impl UndirectedEdges for UndirectedMap {
    fn edges_count(&self) -> usize {
        self.edges_count
    }

    fn check_edge(&self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        let neighbours = self
            .vertices
            .get(&a)
            .ok_or_else(|| GraphError::unknown_vertex(a).with_context("other", b))?;
        if !self.vertices.contains_key(&b) {
            return Err(GraphError::unknown_vertex(b).with_context("other", a));
        }
        Ok(neighbours.contains(&b))
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let neighbours = self
            .vertices
            .get(&vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))?;
        Ok(Box::new(neighbours.iter().copied()))
    }

    fn edges(&self) -> Connections<'_> {
        Box::new(self.vertices.iter().flat_map(|(a, neighbours)| {
            neighbours
                .range(*a..)
                .map(move |b| Connection::new(*a, *b))
        }))
    }
}

impl UndirectedEdgesWriter for UndirectedMap {
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        if self.linked(a, b) {
            return Err(GraphError::duplicate_connection("edge already exists")
                .with_context("a", a)
                .with_context("b", b));
        }
        self.vertices.entry(a).or_default().insert(b);
        self.vertices.entry(b).or_default().insert(a);
        self.edges_count += 1;
        Ok(())
    }
}

impl EdgeRemover for UndirectedMap {
    fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        if !self.linked(a, b) {
            return Err(GraphError::not_found("edge does not exist")
                .with_context("a", a)
                .with_context("b", b));
        }
        if let Some(set) = self.vertices.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.vertices.get_mut(&b) {
            set.remove(&a);
        }
        self.edges_count -= 1;
        Ok(())
    }
}
