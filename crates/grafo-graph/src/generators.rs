use grafo_core::{
    DirectedEdgesWriter, GraphError, MixedEdgesWriter, RngHandle, UndirectedEdgesWriter,
    VertexId, VertexWriter,
};
use rand::Rng;

/// Fills `graph` with vertices `1..=vertices` and random forward arcs.
///
/// Each pair `i < j` receives the arc `i -> j` with probability `density`, so
/// the result is always acyclic.
pub fn gen_random_dag<D>(
    graph: &mut D,
    vertices: usize,
    density: f64,
    rng: &mut RngHandle,
) -> Result<(), GraphError>
where
    D: DirectedEdgesWriter + ?Sized,
{
    let ids = add_vertices(graph, vertices)?;
    for (i, tail) in ids.iter().enumerate() {
        for head in &ids[i + 1..] {
            if rng.gen::<f64>() < density {
                graph.add_arc(*tail, *head)?;
            }
        }
    }
    Ok(())
}

/// Fills `graph` with vertices `1..=vertices` and random edges.
pub fn gen_random_undirected<D>(
    graph: &mut D,
    vertices: usize,
    density: f64,
    rng: &mut RngHandle,
) -> Result<(), GraphError>
where
    D: UndirectedEdgesWriter + ?Sized,
{
    let ids = add_vertices(graph, vertices)?;
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            if rng.gen::<f64>() < density {
                graph.add_edge(*a, *b)?;
            }
        }
    }
    Ok(())
}

/// Fills `graph` with vertices `1..=vertices` and random connections.
///
/// A connected pair becomes an arc with probability `directed_share`, pointing
/// either way with equal odds, and an edge otherwise.
pub fn gen_random_mixed<D>(
    graph: &mut D,
    vertices: usize,
    density: f64,
    directed_share: f64,
    rng: &mut RngHandle,
) -> Result<(), GraphError>
where
    D: MixedEdgesWriter + ?Sized,
{
    let ids = add_vertices(graph, vertices)?;
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            if rng.gen::<f64>() >= density {
                continue;
            }
            if rng.gen::<f64>() < directed_share {
                if rng.gen::<bool>() {
                    graph.add_arc(*a, *b)?;
                } else {
                    graph.add_arc(*b, *a)?;
                }
            } else {
                graph.add_edge(*a, *b)?;
            }
        }
    }
    Ok(())
}

fn add_vertices<D: VertexWriter + ?Sized>(
    graph: &mut D,
    count: usize,
) -> Result<Vec<VertexId>, GraphError> {
    let ids: Vec<VertexId> = (1..=count as u64).map(VertexId::from_raw).collect();
    for id in &ids {
        graph.add_vertex(*id)?;
    }
    Ok(ids)
}
