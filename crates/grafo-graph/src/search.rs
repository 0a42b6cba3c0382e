//! Path search over the neighbour abstraction.

use std::collections::{BTreeMap, BTreeSet};

use grafo_core::{DirectedEdges, GraphError, MixedEdges, UndirectedEdges, VertexId};
use log::{debug, trace};

use crate::neighbours::{DirectedNeighbours, MixedNeighbours, OutNeighbours, UndirectedNeighbours};
use crate::queue::PriorityQueue;

/// Pruning predicate: receives a vertex and the cumulative weight it would be
/// reached with, returns `true` to stop exploring past it.
pub type StopFn<'a> = &'a dyn Fn(VertexId, f64) -> bool;

/// Weight function that gives every connection weight `1.0`.
pub fn unit_weight(_tail: VertexId, _head: VertexId) -> f64 {
    1.0
}

/// Best-first search from `from` to `to`.
///
/// Returns the cumulative weight with which `to` was first discovered, or
/// `None` when it is unreachable under the pruning predicate. A search from a
/// vertex to itself succeeds with weight `0.0`. Negative weights abort the
/// search with `NegativeWeight`.
pub fn check_path<E, W>(
    extractor: &E,
    from: VertexId,
    to: VertexId,
    stop: Option<StopFn<'_>>,
    weight: W,
) -> Result<Option<f64>, GraphError>
where
    E: OutNeighbours + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    if from == to {
        return Ok(Some(0.0));
    }
    let attach = |err: GraphError| err.with_context("from", from).with_context("to", to);

    let mut queue = PriorityQueue::new();
    let mut settled = BTreeSet::new();
    queue.add(from, 0.0);
    while !queue.is_empty() {
        let (current, priority) = queue.next().map_err(attach)?;
        let current_weight = -priority;
        settled.insert(current);
        trace!("settled {current} at weight {current_weight}");

        for next in extractor.out_neighbours(current).map_err(attach)? {
            let step = weight(current, next);
            if step < 0.0 {
                return Err(attach(GraphError::negative_weight(current, next, step)));
            }
            let next_weight = current_weight + step;
            if next == to {
                return Ok(Some(next_weight));
            }
            if settled.contains(&next) {
                continue;
            }
            if stop.is_some_and(|stop| stop(next, next_weight)) {
                continue;
            }
            queue.add(next, -next_weight);
        }
    }
    Ok(None)
}

/// [`check_path`] following arcs.
pub fn check_directed_path_dijkstra<G, W>(
    graph: &G,
    from: VertexId,
    to: VertexId,
    stop: Option<StopFn<'_>>,
    weight: W,
) -> Result<Option<f64>, GraphError>
where
    G: DirectedEdges + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    check_path(&DirectedNeighbours::new(graph), from, to, stop, weight)
}

/// [`check_path`] following edges.
pub fn check_undirected_path_dijkstra<G, W>(
    graph: &G,
    from: VertexId,
    to: VertexId,
    stop: Option<StopFn<'_>>,
    weight: W,
) -> Result<Option<f64>, GraphError>
where
    G: UndirectedEdges + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    check_path(&UndirectedNeighbours::new(graph), from, to, stop, weight)
}

/// [`check_path`] following arcs and edges.
pub fn check_mixed_path_dijkstra<G, W>(
    graph: &G,
    from: VertexId,
    to: VertexId,
    stop: Option<StopFn<'_>>,
    weight: W,
) -> Result<Option<f64>, GraphError>
where
    G: MixedEdges + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    check_path(&MixedNeighbours::new(graph), from, to, stop, weight)
}

/// Lazy enumeration of every simple path between two vertices.
///
/// Created by [`all_paths`]. Paths end at the first visit of the target and
/// never repeat a vertex. Mutating the graph while the iterator is alive is
/// prevented by the borrow it holds.
pub struct AllPaths<E> {
    extractor: E,
    to: VertexId,
    path: Vec<VertexId>,
    on_path: BTreeSet<VertexId>,
    frames: Vec<std::vec::IntoIter<VertexId>>,
    pending: Option<GraphError>,
}

/// Enumerates every simple path from `from` to `to`, each as the full vertex
/// sequence including both ends. A vertex has no path to itself.
pub fn all_paths<E: OutNeighbours>(extractor: E, from: VertexId, to: VertexId) -> AllPaths<E> {
    let mut paths = AllPaths {
        extractor,
        to,
        path: Vec::new(),
        on_path: BTreeSet::new(),
        frames: Vec::new(),
        pending: None,
    };
    if from != to {
        if let Err(err) = paths.enter(from) {
            paths.pending = Some(err.with_context("from", from).with_context("to", to));
        }
    }
    paths
}

impl<E: OutNeighbours> AllPaths<E> {
    fn enter(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        let next: Vec<VertexId> = self.extractor.out_neighbours(vertex)?.collect();
        self.path.push(vertex);
        self.on_path.insert(vertex);
        self.frames.push(next.into_iter());
        Ok(())
    }

    fn leave(&mut self) {
        self.frames.pop();
        if let Some(vertex) = self.path.pop() {
            self.on_path.remove(&vertex);
        }
    }
}

impl<E: OutNeighbours> Iterator for AllPaths<E> {
    type Item = Result<Vec<VertexId>, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }
        loop {
            let candidate = self.frames.last_mut()?.next();
            let Some(vertex) = candidate else {
                self.leave();
                continue;
            };
            if self.on_path.contains(&vertex) {
                continue;
            }
            if vertex == self.to {
                let mut found = self.path.clone();
                found.push(vertex);
                return Some(Ok(found));
            }
            if let Err(err) = self.enter(vertex) {
                self.frames.clear();
                return Some(Err(err.with_context("to", self.to)));
            }
        }
    }
}

/// Shortest-path record produced by [`bellman_ford`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Cumulative weight from the nearest source; infinite when unreached.
    pub weight: f64,
    /// Previous vertex on the best path, `None` for sources and unreached vertices.
    pub predecessor: Option<VertexId>,
}

impl Mark {
    const UNREACHED: Mark = Mark {
        weight: f64::INFINITY,
        predecessor: None,
    };

    /// Whether a source reaches this vertex.
    pub fn is_reached(&self) -> bool {
        self.weight.is_finite()
    }
}

/// Multi-source shortest paths over arcs, tolerating negative weights.
///
/// Returns one [`Mark`] per vertex, or `None` when a negative cycle is
/// reachable from the sources.
pub fn bellman_ford<G, W>(
    graph: &G,
    sources: &[VertexId],
    weight: W,
) -> Result<Option<BTreeMap<VertexId, Mark>>, GraphError>
where
    G: DirectedEdges + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    let mut marks: BTreeMap<VertexId, Mark> =
        graph.vertices().map(|vertex| (vertex, Mark::UNREACHED)).collect();
    for source in sources {
        let mark = marks
            .get_mut(source)
            .ok_or_else(|| GraphError::unknown_vertex(*source).with_context("role", "source"))?;
        mark.weight = 0.0;
    }

    for _ in 0..graph.order() {
        if !relax(graph, &mut marks, &weight) {
            return Ok(Some(marks));
        }
    }
    if relax(graph, &mut marks, &weight) {
        debug!("bellman-ford found a negative cycle");
        return Ok(None);
    }
    Ok(Some(marks))
}

/// [`bellman_ford`] from a single source.
pub fn bellman_ford_single_source<G, W>(
    graph: &G,
    source: VertexId,
    weight: W,
) -> Result<Option<BTreeMap<VertexId, Mark>>, GraphError>
where
    G: DirectedEdges + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    bellman_ford(graph, &[source], weight)
}

// One pass over every arc; reports whether any mark improved.
fn relax<G, W>(graph: &G, marks: &mut BTreeMap<VertexId, Mark>, weight: &W) -> bool
where
    G: DirectedEdges + ?Sized,
    W: Fn(VertexId, VertexId) -> f64,
{
    let mut changed = false;
    for arc in graph.arcs() {
        let Some(tail) = marks.get(&arc.tail).copied() else {
            continue;
        };
        if !tail.is_reached() {
            continue;
        }
        let candidate = tail.weight + weight(arc.tail, arc.head);
        if let Some(head) = marks.get_mut(&arc.head) {
            if candidate < head.weight {
                head.weight = candidate;
                head.predecessor = Some(arc.tail);
                changed = true;
            }
        }
    }
    changed
}

/// Rebuilds the best path to `destination` from [`bellman_ford`] marks.
///
/// Returns an empty path when the destination is unknown or unreached.
pub fn path_from_marks(marks: &BTreeMap<VertexId, Mark>, destination: VertexId) -> Vec<VertexId> {
    let reached = marks
        .get(&destination)
        .is_some_and(|mark| mark.is_reached());
    if !reached {
        return Vec::new();
    }
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = marks.get(&current).and_then(|mark| mark.predecessor) {
        if path.len() > marks.len() {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
