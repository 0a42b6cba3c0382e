use grafo_core::{
    DirectedEdges, DirectedEdgesWriter, GraphError, MixedConnectionType, MixedEdges,
    MixedEdgesWriter, UndirectedEdges, UndirectedEdgesWriter, VertexStore, VertexWriter,
};

fn copy_vertices<S, D>(source: &S, dest: &mut D) -> Result<(), GraphError>
where
    S: VertexStore + ?Sized,
    D: VertexWriter + ?Sized,
{
    for vertex in source.vertices() {
        if !dest.check_vertex(vertex) {
            dest.add_vertex(vertex)?;
        }
    }
    Ok(())
}

/// Copies every vertex and arc of `source` into `dest`.
///
/// Vertices already in `dest` are kept; an arc already in `dest` is an error.
pub fn copy_directed<S, D>(source: &S, dest: &mut D) -> Result<(), GraphError>
where
    S: DirectedEdges + ?Sized,
    D: DirectedEdgesWriter + ?Sized,
{
    copy_vertices(source, dest)?;
    for arc in source.arcs() {
        dest.add_arc(arc.tail, arc.head)?;
    }
    Ok(())
}

/// Copies every vertex and edge of `source` into `dest`.
pub fn copy_undirected<S, D>(source: &S, dest: &mut D) -> Result<(), GraphError>
where
    S: UndirectedEdges + ?Sized,
    D: UndirectedEdgesWriter + ?Sized,
{
    copy_vertices(source, dest)?;
    for edge in source.edges() {
        dest.add_edge(edge.tail, edge.head)?;
    }
    Ok(())
}

/// Copies every vertex, arc and edge of `source` into `dest`.
pub fn copy_mixed<S, D>(source: &S, dest: &mut D) -> Result<(), GraphError>
where
    S: MixedEdges + ?Sized,
    D: MixedEdgesWriter + ?Sized,
{
    copy_vertices(source, dest)?;
    for conn in source.typed_connections() {
        match conn.kind {
            MixedConnectionType::Directed => dest.add_arc(conn.tail, conn.head)?,
            MixedConnectionType::DirectedReversed => dest.add_arc(conn.head, conn.tail)?,
            MixedConnectionType::Undirected => dest.add_edge(conn.tail, conn.head)?,
            MixedConnectionType::None => {}
        }
    }
    Ok(())
}
