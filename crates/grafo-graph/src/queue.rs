use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use grafo_core::{GraphError, VertexId};

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    vertex: VertexId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Indexed max-priority queue keyed by vertex.
///
/// Each vertex is held at most once. Re-adding a vertex only raises its
/// priority; callers wanting "lowest first" push negated priorities.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    best: BTreeMap<VertexId, f64>,
}

impl PriorityQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex`, or raises its priority if `priority` is strictly
    /// greater than the stored one.
    pub fn add(&mut self, vertex: VertexId, priority: f64) {
        if let Some(current) = self.best.get(&vertex) {
            if priority <= *current {
                return;
            }
        }
        self.best.insert(vertex, priority);
        self.heap.push(Entry { priority, vertex });
    }

    /// Removes and returns the item with the highest priority.
    pub fn next(&mut self) -> Result<(VertexId, f64), GraphError> {
        let entry = self.top()?;
        self.heap.pop();
        self.best.remove(&entry.vertex);
        Ok((entry.vertex, entry.priority))
    }

    /// Returns the item with the highest priority without removing it.
    pub fn pick(&mut self) -> Result<(VertexId, f64), GraphError> {
        let entry = self.top()?;
        Ok((entry.vertex, entry.priority))
    }

    /// Number of queued vertices.
    pub fn size(&self) -> usize {
        self.best.len()
    }

    /// Whether the queue holds no vertex.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    // Drops superseded heap entries until the top one is current.
    fn top(&mut self) -> Result<Entry, GraphError> {
        while let Some(entry) = self.heap.peek().copied() {
            let current = self
                .best
                .get(&entry.vertex)
                .is_some_and(|best| best.to_bits() == entry.priority.to_bits());
            if current {
                return Ok(entry);
            }
            self.heap.pop();
        }
        Err(GraphError::empty_queue())
    }
}
