use std::collections::BTreeMap;

use grafo_core::{GraphError, VertexId};

/// Number of slots needed to store every unordered pair of `capacity` vertices.
///
/// Saturates at `usize::MAX`; see [`checked_triangular_len`].
pub fn triangular_len(capacity: usize) -> usize {
    checked_triangular_len(capacity).unwrap_or(usize::MAX)
}

/// [`triangular_len`], or `None` when the slot count does not fit in `usize`.
pub fn checked_triangular_len(capacity: usize) -> Option<usize> {
    let below = capacity.saturating_sub(1);
    // One of two consecutive integers is even, so halve that one first.
    if capacity % 2 == 0 {
        (capacity / 2).checked_mul(below)
    } else {
        capacity.checked_mul(below / 2)
    }
}

/// Allocates the `triangular_len(capacity)` cells of a matrix backend.
///
/// Fails with `UnsupportedOperation` instead of aborting when the cell count
/// overflows or the allocation is refused.
pub(crate) fn allocate_cells<T: Clone>(capacity: usize, empty: T) -> Result<Vec<T>, GraphError> {
    let too_large = || {
        GraphError::unsupported("matrix capacity cannot be allocated")
            .with_context("capacity", capacity)
    };
    let len = checked_triangular_len(capacity).ok_or_else(too_large)?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large())?;
    cells.resize(len, empty);
    Ok(cells)
}

/// Maps the dense pair `id1 < id2 < capacity` onto its slot in a packed
/// upper-triangular array.
///
/// Row `id1` starts after the `id1` previous rows, which hold
/// `(capacity - 1) + (capacity - 2) + ... + (capacity - id1)` slots, so the
/// mapping is a bijection onto `0..triangular_len(capacity)`.
pub fn triangular_slot(id1: usize, id2: usize, capacity: usize) -> usize {
    debug_assert!(id1 < id2 && id2 < capacity);
    id1 * (capacity - 1) + id2 - 1 - id1 * (id1 + 1) / 2
}

/// Assigns dense indices to vertices in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DenseIndex {
    capacity: usize,
    ids: BTreeMap<VertexId, usize>,
    vertices: Vec<VertexId>,
}

impl DenseIndex {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ids: BTreeMap::new(),
            vertices: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn contains(&self, vertex: VertexId) -> bool {
        self.ids.contains_key(&vertex)
    }

    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub(crate) fn vertex(&self, index: usize) -> VertexId {
        self.vertices[index]
    }

    pub(crate) fn require(&self, vertex: VertexId) -> Result<usize, GraphError> {
        self.ids
            .get(&vertex)
            .copied()
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    /// Registers a new vertex; fails on duplicates and when the index is full.
    pub(crate) fn insert(&mut self, vertex: VertexId) -> Result<usize, GraphError> {
        if self.contains(vertex) {
            return Err(GraphError::duplicate_vertex(vertex));
        }
        self.ensure_room(1)?;
        Ok(self.assign(vertex))
    }

    /// Returns dense indices for both endpoints, assigning missing ones.
    ///
    /// Capacity is checked before anything is assigned, so a failed call leaves
    /// the index unchanged.
    pub(crate) fn touch_pair(
        &mut self,
        a: VertexId,
        b: VertexId,
    ) -> Result<(usize, usize), GraphError> {
        let missing = usize::from(!self.contains(a)) + usize::from(a != b && !self.contains(b));
        self.ensure_room(missing).map_err(|err| {
            err.with_context("a", a).with_context("b", b)
        })?;
        let ia = self.ids.get(&a).copied().unwrap_or_else(|| self.assign(a));
        let ib = self.ids.get(&b).copied().unwrap_or_else(|| self.assign(b));
        Ok((ia, ib))
    }

    /// Slot of the unordered dense pair. The indices must differ.
    pub(crate) fn slot(&self, ia: usize, ib: usize) -> usize {
        if ia < ib {
            triangular_slot(ia, ib, self.capacity)
        } else {
            triangular_slot(ib, ia, self.capacity)
        }
    }

    fn ensure_room(&self, missing: usize) -> Result<(), GraphError> {
        let required = self.vertices.len() + missing;
        if required > self.capacity {
            return Err(GraphError::capacity_exceeded(self.capacity, required));
        }
        Ok(())
    }

    fn assign(&mut self, vertex: VertexId) -> usize {
        let index = self.vertices.len();
        self.ids.insert(vertex, index);
        self.vertices.push(vertex);
        index
    }
}
