use std::collections::BTreeMap;

use grafo_core::{DirectedEdges, GraphError, VertexId};
use log::debug;

use crate::neighbours::{DirectedNeighbours, OutNeighbours};

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Orders the vertices so that every arc points forward.
///
/// Returns `None` when the graph has a cycle, including cycles that no source
/// reaches.
pub fn topological_sort<G>(graph: &G) -> Result<Option<Vec<VertexId>>, GraphError>
where
    G: DirectedEdges + ?Sized,
{
    let extractor = DirectedNeighbours::new(graph);
    let mut states = BTreeMap::new();
    let mut slots = vec![None; graph.order()];
    let mut fill = slots.len();

    let attach = |err: GraphError| err.with_context("operation", "topological_sort");
    for source in graph.sources().map_err(attach)? {
        let cycle = visit(&extractor, source, &mut states, &mut slots, &mut fill)
            .map_err(|err| attach(err).with_context("source", source))?;
        if cycle {
            debug!("topological sort hit a cycle below source {source}");
            return Ok(None);
        }
    }

    // Unfilled slots belong to vertices sitting on or behind a sourceless cycle.
    let order: Option<Vec<VertexId>> = slots.into_iter().collect();
    if order.is_none() {
        debug!("topological sort left {fill} vertices unreached");
    }
    Ok(order)
}

// Post-order DFS writing finished vertices back to front. Returns `true` on
// reaching a vertex that is still in progress.
fn visit<E: OutNeighbours + ?Sized>(
    extractor: &E,
    vertex: VertexId,
    states: &mut BTreeMap<VertexId, VisitState>,
    slots: &mut [Option<VertexId>],
    fill: &mut usize,
) -> Result<bool, GraphError> {
    match states.get(&vertex) {
        Some(VisitState::InProgress) => return Ok(true),
        Some(VisitState::Done) => return Ok(false),
        None => {}
    }
    states.insert(vertex, VisitState::InProgress);
    let successors = extractor
        .out_neighbours(vertex)
        .map_err(|err| err.with_context("vertex", vertex))?;
    for next in successors {
        if visit(extractor, next, states, slots, fill)? {
            return Ok(true);
        }
    }
    states.insert(vertex, VisitState::Done);
    *fill -= 1;
    slots[*fill] = Some(vertex);
    Ok(false)
}

#[cfg(test)]
mod tests {
    use grafo_core::{Connections, DirectedEdgesWriter, VertexStore, Vertices};

    use super::*;
    use crate::DirectedMap;

    // Reports an accessor that was never added as a vertex.
    struct Dangling(DirectedMap);

    impl VertexStore for Dangling {
        fn order(&self) -> usize {
            self.0.order()
        }

        fn check_vertex(&self, vertex: VertexId) -> bool {
            self.0.check_vertex(vertex)
        }

        fn vertices(&self) -> Vertices<'_> {
            self.0.vertices()
        }
    }

    impl DirectedEdges for Dangling {
        fn arcs_count(&self) -> usize {
            self.0.arcs_count()
        }

        fn check_arc(&self, tail: VertexId, head: VertexId) -> Result<bool, GraphError> {
            self.0.check_arc(tail, head)
        }

        fn accessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
            let known = self.0.accessors(vertex)?;
            Ok(Box::new(known.chain(std::iter::once(VertexId::from(99)))))
        }

        fn predecessors(&self, vertex: VertexId) -> Result<Vertices<'_>, GraphError> {
            self.0.predecessors(vertex)
        }

        fn arcs(&self) -> Connections<'_> {
            self.0.arcs()
        }
    }

    #[test]
    fn backend_errors_name_the_sort() {
        let mut inner = DirectedMap::new();
        inner.add_arc(VertexId::from(1), VertexId::from(2)).unwrap();
        let err = topological_sort(&Dangling(inner)).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex(_)));
        let context = &err.info().context;
        assert_eq!(context["vertex"], "99");
        assert_eq!(context["operation"], "topological_sort");
        assert_eq!(context["source"], "1");
    }
}
