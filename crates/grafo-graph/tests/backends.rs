use grafo_core::{
    ArcRemover, DirectedEdges, DirectedEdgesWriter, EdgeRemover, GraphError, MixedConnectionType,
    MixedEdges, UndirectedEdges, UndirectedEdgesWriter, VertexId, VertexRemover, VertexStore,
    VertexWriter,
};
use grafo_graph::{
    DirectedMap, DirectedNeighbours, InNeighbours, MixedMap, MixedMatrix, MixedNeighbours,
    OutNeighbours, UndirectedMap, UndirectedMatrix, UndirectedNeighbours,
};

fn v(raw: u64) -> VertexId {
    VertexId::from(raw)
}

fn collect(iter: impl Iterator<Item = VertexId>) -> Vec<VertexId> {
    iter.collect()
}

#[test]
fn directed_map_keeps_both_directions_in_sync() {
    let mut graph = DirectedMap::new();
    graph.add_arc(v(1), v(2)).unwrap();
    graph.add_arc(v(1), v(3)).unwrap();
    graph.add_arc(v(3), v(2)).unwrap();

    assert_eq!(graph.order(), 3);
    assert_eq!(graph.arcs_count(), 3);
    assert_eq!(collect(graph.accessors(v(1)).unwrap()), vec![v(2), v(3)]);
    assert_eq!(collect(graph.predecessors(v(2)).unwrap()), vec![v(1), v(3)]);
    assert!(graph.check_arc(v(1), v(2)).unwrap());
    assert!(!graph.check_arc(v(2), v(1)).unwrap());
    assert_eq!(graph.sources().unwrap(), vec![v(1)]);
    assert_eq!(graph.sinks().unwrap(), vec![v(2)]);

    graph.remove_arc(v(1), v(2)).unwrap();
    assert_eq!(graph.arcs_count(), 2);
    assert!(!graph.check_arc(v(1), v(2)).unwrap());
    assert_eq!(collect(graph.predecessors(v(2)).unwrap()), vec![v(3)]);
}

#[test]
fn directed_map_rejects_duplicates_and_missing_removals() {
    let mut graph = DirectedMap::new();
    graph.add_vertex(v(1)).unwrap();
    let err = graph.add_vertex(v(1)).unwrap_err();
    assert_eq!(err.code(), "duplicate-vertex");

    graph.add_arc(v(1), v(2)).unwrap();
    let err = graph.add_arc(v(1), v(2)).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateConnection(_)));
    assert_eq!(err.info().context.get("tail").map(String::as_str), Some("1"));

    let err = graph.remove_arc(v(2), v(1)).unwrap_err();
    assert!(matches!(err, GraphError::NotFound(_)));
    assert!(matches!(
        graph.check_arc(v(1), v(9)),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn directed_map_vertex_removal_drops_incident_arcs() {
    let mut graph = DirectedMap::new();
    graph.add_arc(v(1), v(2)).unwrap();
    graph.add_arc(v(2), v(3)).unwrap();
    graph.add_arc(v(2), v(2)).unwrap();
    graph.add_arc(v(3), v(1)).unwrap();
    assert_eq!(graph.arcs_count(), 4);

    graph.remove_vertex(v(2)).unwrap();
    assert_eq!(graph.order(), 2);
    assert_eq!(graph.arcs_count(), 1);
    assert_eq!(collect(graph.accessors(v(1)).unwrap()), Vec::<VertexId>::new());
    assert_eq!(collect(graph.predecessors(v(3)).unwrap()), Vec::<VertexId>::new());
    assert!(matches!(
        graph.remove_vertex(v(2)),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn undirected_map_is_symmetric() {
    let mut graph = UndirectedMap::new();
    graph.add_edge(v(2), v(1)).unwrap();
    graph.add_edge(v(2), v(3)).unwrap();
    graph.add_vertex(v(9)).unwrap();

    assert_eq!(graph.edges_count(), 2);
    assert!(graph.check_edge(v(1), v(2)).unwrap());
    assert!(graph.check_edge(v(2), v(1)).unwrap());
    assert_eq!(collect(graph.neighbours(v(2)).unwrap()), vec![v(1), v(3)]);
    assert_eq!(graph.edges().count(), 2);
    assert!(matches!(
        graph.add_edge(v(1), v(2)),
        Err(GraphError::DuplicateConnection(_))
    ));

    graph.remove_edge(v(1), v(2)).unwrap();
    assert!(!graph.check_edge(v(2), v(1)).unwrap());
    assert_eq!(graph.edges_count(), 1);

    graph.remove_vertex(v(3)).unwrap();
    assert_eq!(graph.edges_count(), 0);
    assert_eq!(collect(graph.vertices()), vec![v(1), v(2), v(9)]);
}

#[test]
fn mixed_map_reports_types_from_either_end() {
    let mut graph = MixedMap::new();
    graph.add_arc(v(1), v(2)).unwrap();
    graph.add_edge(v(2), v(3)).unwrap();
    graph.add_vertex(v(4)).unwrap();

    assert_eq!(
        graph.connection_type(v(1), v(2)).unwrap(),
        MixedConnectionType::Directed
    );
    assert_eq!(
        graph.connection_type(v(2), v(1)).unwrap(),
        MixedConnectionType::DirectedReversed
    );
    assert_eq!(
        graph.connection_type(v(3), v(2)).unwrap(),
        MixedConnectionType::Undirected
    );
    assert_eq!(
        graph.connection_type(v(1), v(4)).unwrap(),
        MixedConnectionType::None
    );
    assert_eq!(graph.arcs_count(), 1);
    assert_eq!(graph.edges_count(), 1);
    assert_eq!(graph.connections_count(), 2);

    // A pair holds one connection at most, whatever its kind.
    assert!(matches!(
        graph.add_edge(v(2), v(1)),
        Err(GraphError::DuplicateConnection(_))
    ));
    assert!(matches!(
        graph.add_arc(v(3), v(3)),
        Err(GraphError::UnsupportedOperation(_))
    ));

    // Removal checks the kind.
    assert!(matches!(
        graph.remove_edge(v(1), v(2)),
        Err(GraphError::NotFound(_))
    ));
    graph.remove_arc(v(1), v(2)).unwrap();
    assert_eq!(
        graph.connection_type(v(1), v(2)).unwrap(),
        MixedConnectionType::None
    );
}

#[test]
fn matrices_are_grow_only_with_fixed_capacity() {
    let mut graph = UndirectedMatrix::with_capacity(3);
    graph.add_edge(v(10), v(20)).unwrap();
    graph.add_edge(v(20), v(30)).unwrap();
    assert_eq!(graph.capacity(), 3);
    assert!(graph.check_edge(v(30), v(20)).unwrap());
    assert!(!graph.check_edge(v(10), v(30)).unwrap());

    let err = graph.add_edge(v(30), v(40)).unwrap_err();
    assert!(matches!(err, GraphError::CapacityExceeded(_)));
    assert!(!graph.check_vertex(v(40)));
    assert!(matches!(
        graph.remove_vertex(v(10)),
        Err(GraphError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        graph.add_edge(v(10), v(10)),
        Err(GraphError::UnsupportedOperation(_))
    ));

    let mut mixed = MixedMatrix::with_capacity(4);
    mixed.add_arc(v(3), v(1)).unwrap();
    mixed.add_edge(v(1), v(2)).unwrap();
    assert_eq!(
        mixed.connection_type(v(1), v(3)).unwrap(),
        MixedConnectionType::DirectedReversed
    );
    assert!(mixed.check_arc(v(3), v(1)).unwrap());
    assert!(!mixed.check_arc(v(1), v(3)).unwrap());
    assert_eq!(collect(mixed.accessors(v(3)).unwrap()), vec![v(1)]);
    assert_eq!(collect(mixed.neighbours(v(2)).unwrap()), vec![v(1)]);
    assert!(matches!(
        mixed.remove_vertex(v(3)),
        Err(GraphError::UnsupportedOperation(_))
    ));
}

#[test]
fn matrix_capacity_is_checked_before_allocating() {
    let err = UndirectedMatrix::try_with_capacity(usize::MAX).unwrap_err();
    assert!(matches!(err, GraphError::UnsupportedOperation(_)));
    assert_eq!(err.info().context["capacity"], usize::MAX.to_string());
    assert!(matches!(
        MixedMatrix::try_with_capacity(1 << 40),
        Err(GraphError::UnsupportedOperation(_))
    ));

    let mut small = MixedMatrix::try_with_capacity(3).unwrap();
    small.add_arc(v(1), v(2)).unwrap();
    assert_eq!(small.capacity(), 3);
    assert!(small.check_arc(v(1), v(2)).unwrap());
}

#[test]
fn neighbour_adapters_report_incoming_vertices() {
    let mut arcs = DirectedMap::new();
    arcs.add_arc(v(1), v(3)).unwrap();
    arcs.add_arc(v(2), v(3)).unwrap();
    arcs.add_arc(v(3), v(4)).unwrap();
    let directed = DirectedNeighbours::new(&arcs);
    assert_eq!(collect(directed.in_neighbours(v(3)).unwrap()), vec![v(1), v(2)]);
    assert_eq!(collect(directed.out_neighbours(v(3)).unwrap()), vec![v(4)]);
    assert!(directed.in_neighbours(v(1)).unwrap().next().is_none());

    let mut edges = UndirectedMap::new();
    edges.add_edge(v(1), v(2)).unwrap();
    edges.add_edge(v(2), v(3)).unwrap();
    let undirected = UndirectedNeighbours::new(&edges);
    assert_eq!(collect(undirected.in_neighbours(v(2)).unwrap()), vec![v(1), v(3)]);
    assert_eq!(
        collect(undirected.in_neighbours(v(2)).unwrap()),
        collect(undirected.out_neighbours(v(2)).unwrap())
    );

    let mut mixed = MixedMap::new();
    mixed.add_arc(v(1), v(2)).unwrap();
    mixed.add_edge(v(3), v(2)).unwrap();
    mixed.add_arc(v(2), v(4)).unwrap();
    let both = MixedNeighbours::new(&mixed);
    let mut incoming = collect(both.in_neighbours(v(2)).unwrap());
    incoming.sort();
    assert_eq!(incoming, vec![v(1), v(3)]);
    let mut outgoing = collect(both.out_neighbours(v(2)).unwrap());
    outgoing.sort();
    assert_eq!(outgoing, vec![v(3), v(4)]);
}

#[test]
fn neighbour_adapters_reject_unknown_vertices() {
    let mut arcs = DirectedMap::new();
    arcs.add_arc(v(1), v(2)).unwrap();
    let mut edges = UndirectedMap::new();
    edges.add_edge(v(1), v(2)).unwrap();
    let mut mixed = MixedMap::new();
    mixed.add_edge(v(1), v(2)).unwrap();

    assert!(matches!(
        DirectedNeighbours::new(&arcs).in_neighbours(v(9)),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        UndirectedNeighbours::new(&edges).in_neighbours(v(9)),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        MixedNeighbours::new(&mixed).in_neighbours(v(9)),
        Err(GraphError::UnknownVertex(_))
    ));
}
