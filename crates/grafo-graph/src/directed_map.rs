use std::collections::{BTreeMap, BTreeSet};

use grafo_core::{
    ArcRemover, Connection, Connections, DirectedEdges, DirectedEdgesWriter, GraphError,
    VertexId, VertexRemover, VertexStore, VertexWriter, Vertices,
};
use log::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Adjacency {
    accessors: BTreeSet<VertexId>,
    predecessors: BTreeSet<VertexId>,
}

/// Directed graph stored as forward and reverse adjacency sets.
///
/// Every arc `tail -> head` is recorded twice: `head` in the accessors of
/// `tail` and `tail` in the predecessors of `head`. Both entries are inserted
/// and removed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedMap {
    vertices: BTreeMap<VertexId, Adjacency>,
    arcs_count: usize,
}

impl DirectedMap {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn touch_vertex(&mut self, vertex: VertexId) -> &mut Adjacency {
        self.vertices.entry(vertex).or_default()
    }

    fn record(&self, vertex: VertexId) -> Result<&Adjacency, GraphError> {
        self.vertices
            .get(&vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }
}

impl VertexStore for DirectedMap {
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

impl VertexWriter for DirectedMap {
    fn add_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if self.vertices.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(vertex));
        }
        self.vertices.insert(vertex, Adjacency::default());
        Ok(())
    }
}

impl VertexRemover for DirectedMap {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        let record = self.vertices.remove(&vertex).ok_or_else(|| {
            GraphError::not_found("vertex does not exist").with_context("vertex", vertex)
        })?;
        for head in &record.accessors {
            if let Some(adjacency) = self.vertices.get_mut(head) {
                adjacency.predecessors.remove(&vertex);
            }
        }
        for tail in &record.predecessors {
            if let Some(adjacency) = self.vertices.get_mut(tail) {
                adjacency.accessors.remove(&vertex);
            }
        }
        // A loop sits in both sets but is a single arc.
        let looped = usize::from(record.accessors.contains(&vertex));
        self.arcs_count -= record.accessors.len() + record.predecessors.len() - looped;
        trace!("removed vertex {vertex} from directed map");
        Ok(())
    }
}

impl DirectedEdges for DirectedMap {
    fn arcs_count(&self) -> usize {
        self.arcs_count
    }

    fn check_arc(&self, tail: VertexId, head: VertexId) -> Result<bool, GraphError> {
        let record = self
            .record(tail)
            .map_err(|err| err.with_context("head", head))?;
        if !self.vertices.contains_key(&head) {
            return Err(GraphError::unknown_vertex(head).with_context("tail", tail));
        }
        Ok(record.accessors.contains(&head))
    }

    fn accessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let record = self.record(vertex)?;
        Ok(Box::new(record.accessors.iter().copied()))
    }

    fn predecessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
        let record = self.record(vertex)?;
        Ok(Box::new(record.predecessors.iter().copied()))
    }

    fn arcs(&self) -> Connections<'_> {
        Box::new(self.vertices.iter().flat_map(|(tail, record)| {
            record
                .accessors
                .iter()
                .map(move |head| Connection::new(*tail, *head))
        }))
    }

    fn sources(&self) -> Result<Vec<VertexId>, GraphError> {
        Ok(self
            .vertices
            .iter()
            .filter(|(_, record)| record.predecessors.is_empty())
            .map(|(vertex, _)| *vertex)
            .collect())
    }

    fn sinks(&self) -> Result<Vec<VertexId>, GraphError> {
        Ok(self
            .vertices
            .iter()
            .filter(|(_, record)| record.accessors.is_empty())
            .map(|(vertex, _)| *vertex)
            .collect())
    }
}

impl DirectedEdgesWriter for DirectedMap {
    fn add_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError> {
        if self
            .vertices
            .get(&tail)
            .is_some_and(|record| record.accessors.contains(&head))
        {
            return Err(GraphError::duplicate_connection("arc already exists")
                .with_context("tail", tail)
                .with_context("head", head));
        }
        self.touch_vertex(tail).accessors.insert(head);
        self.touch_vertex(head).predecessors.insert(tail);
        self.arcs_count += 1;
        Ok(())
    }
}

impl ArcRemover for DirectedMap {
    fn remove_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError> {
        let present = self
            .vertices
            .get(&tail)
            .is_some_and(|record| record.accessors.contains(&head));
        if !present {
            return Err(GraphError::not_found("arc does not exist")
                .with_context("tail", tail)
                .with_context("head", head));
        }
        if let Some(record) = self.vertices.get_mut(&tail) {
            record.accessors.remove(&head);
        }
        if let Some(record) = self.vertices.get_mut(&head) {
            record.predecessors.remove(&tail);
        }
        self.arcs_count -= 1;
        Ok(())
    }
}
