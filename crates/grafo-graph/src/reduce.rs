use grafo_core::{DirectedEdges, DirectedEdgesWriter, GraphError, VertexId};
use log::{debug, trace};

use crate::filter::ArcFilter;
use crate::search::{check_directed_path_dijkstra, unit_weight, StopFn};

/// Pruning predicate for [`reduce_direct_paths`]: receives the tail of the arc
/// under test, the vertex being reached and the cumulative weight.
pub type ReduceStopFn<'a> = &'a dyn Fn(VertexId, VertexId, f64) -> bool;

/// Copies `source` into `dest` without its redundant arcs.
///
/// An arc `tail -> head` is redundant when `head` stays reachable from `tail`
/// with that arc hidden. Every vertex of `source` is copied, including the
/// ones left isolated. Loops are always kept. Returns the number of arcs
/// dropped.
pub fn reduce_direct_paths<G, D>(
    source: &G,
    dest: &mut D,
    stop: Option<ReduceStopFn<'_>>,
) -> Result<usize, GraphError>
where
    G: DirectedEdges + ?Sized,
    D: DirectedEdgesWriter + ?Sized,
{
    for vertex in source.vertices() {
        if !dest.check_vertex(vertex) {
            dest.add_vertex(vertex)?;
        }
    }

    let mut dropped = 0;
    for arc in source.arcs() {
        if arc.tail == arc.head {
            dest.add_arc(arc.tail, arc.head)?;
            continue;
        }
        let view = ArcFilter::single(source, arc.tail, arc.head);
        let tail = arc.tail;
        let bound =
            stop.map(|stop| move |vertex: VertexId, weight: f64| stop(tail, vertex, weight));
        let bound_ref = bound.as_ref().map(|bound| bound as StopFn<'_>);

        let detour =
            check_directed_path_dijkstra(&view, arc.tail, arc.head, bound_ref, unit_weight)
                .map_err(|err| err.with_context("arc", arc))?;
        match detour {
            Some(weight) => {
                debug!("dropping arc {arc}: detour of weight {weight}");
                dropped += 1;
            }
            None => {
                trace!("keeping arc {arc}");
                dest.add_arc(arc.tail, arc.head)?;
            }
        }
    }
    Ok(dropped)
}
