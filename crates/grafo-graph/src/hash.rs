use grafo_core::{
    DirectedEdges, MixedEdges, TypedConnection, UndirectedEdges, VertexId, VertexStore,
};
use sha2::{Digest, Sha256};

/// SHA-256 fingerprint of the vertex set and arcs.
///
/// Structurally equal graphs hash equally whatever their backend.
pub fn directed_hash<G: DirectedEdges + ?Sized>(graph: &G) -> String {
    digest(
        graph,
        graph
            .arcs()
            .map(|arc| TypedConnection::directed(arc.tail, arc.head)),
    )
}

/// SHA-256 fingerprint of the vertex set and edges.
pub fn undirected_hash<G: UndirectedEdges + ?Sized>(graph: &G) -> String {
    digest(
        graph,
        graph
            .edges()
            .map(|edge| TypedConnection::undirected(edge.tail, edge.head)),
    )
}

/// SHA-256 fingerprint of the vertex set and typed connections.
pub fn mixed_hash<G: MixedEdges + ?Sized>(graph: &G) -> String {
    digest(graph, graph.typed_connections())
}

fn digest<G: VertexStore + ?Sized>(
    graph: &G,
    connections: impl Iterator<Item = TypedConnection>,
) -> String {
    let mut hasher = Sha256::new();

    let mut vertices: Vec<VertexId> = graph.vertices().collect();
    vertices.sort();
    hasher.update((vertices.len() as u64).to_le_bytes());
    for vertex in &vertices {
        hasher.update(vertex.as_raw().to_le_bytes());
    }

    let mut connections: Vec<TypedConnection> = connections.collect();
    connections.sort();
    hasher.update((connections.len() as u64).to_le_bytes());
    for conn in &connections {
        hasher.update(conn.tail.as_raw().to_le_bytes());
        hasher.update(conn.head.as_raw().to_le_bytes());
        hasher.update(conn.kind.to_string().as_bytes());
    }

    format!("{:x}", hasher.finalize())
}
