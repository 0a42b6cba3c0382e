//! Structural comparison of graphs.
//!
//! Inclusion walks the connections of the included graph and looks each one
//! up in the including graph. Equality is inclusion plus equal counts.

use grafo_core::{DirectedEdges, GraphError, MixedEdges, UndirectedEdges, VertexStore};

/// Whether every vertex of `inner` is a vertex of `outer`.
pub fn includes_vertices<A, B>(outer: &A, inner: &B) -> bool
where
    A: VertexStore + ?Sized,
    B: VertexStore + ?Sized,
{
    inner.vertices().all(|vertex| outer.check_vertex(vertex))
}

/// Whether `outer` holds every vertex and arc of `inner`.
pub fn directed_includes<A, B>(outer: &A, inner: &B) -> Result<bool, GraphError>
where
    A: DirectedEdges + ?Sized,
    B: DirectedEdges + ?Sized,
{
    if !includes_vertices(outer, inner) {
        return Ok(false);
    }
    for arc in inner.arcs() {
        if !outer.check_arc(arc.tail, arc.head)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether both graphs hold the same vertices and arcs.
pub fn directed_equals<A, B>(left: &A, right: &B) -> Result<bool, GraphError>
where
    A: DirectedEdges + ?Sized,
    B: DirectedEdges + ?Sized,
{
    if left.order() != right.order() || left.arcs_count() != right.arcs_count() {
        return Ok(false);
    }
    directed_includes(left, right)
}

/// Whether `outer` holds every vertex and edge of `inner`.
pub fn undirected_includes<A, B>(outer: &A, inner: &B) -> Result<bool, GraphError>
where
    A: UndirectedEdges + ?Sized,
    B: UndirectedEdges + ?Sized,
{
    if !includes_vertices(outer, inner) {
        return Ok(false);
    }
    for edge in inner.edges() {
        if !outer.check_edge(edge.tail, edge.head)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether both graphs hold the same vertices and edges.
pub fn undirected_equals<A, B>(left: &A, right: &B) -> Result<bool, GraphError>
where
    A: UndirectedEdges + ?Sized,
    B: UndirectedEdges + ?Sized,
{
    if left.order() != right.order() || left.edges_count() != right.edges_count() {
        return Ok(false);
    }
    undirected_includes(left, right)
}

/// Whether `outer` holds every vertex and typed connection of `inner`.
pub fn mixed_includes<A, B>(outer: &A, inner: &B) -> Result<bool, GraphError>
where
    A: MixedEdges + ?Sized,
    B: MixedEdges + ?Sized,
{
    if !includes_vertices(outer, inner) {
        return Ok(false);
    }
    for conn in inner.typed_connections() {
        if outer.connection_type(conn.tail, conn.head)? != conn.kind {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether both graphs hold the same vertices and typed connections.
pub fn mixed_equals<A, B>(left: &A, right: &B) -> Result<bool, GraphError>
where
    A: MixedEdges + ?Sized,
    B: MixedEdges + ?Sized,
{
    if left.order() != right.order()
        || left.arcs_count() != right.arcs_count()
        || left.edges_count() != right.edges_count()
    {
        return Ok(false);
    }
    mixed_includes(left, right)
}
