use grafo_core::{
    Connection, DirectedEdges, DirectedEdgesWriter, GraphError, MixedConnectionType, MixedEdges,
    TypedConnection, UndirectedEdges, UndirectedEdgesWriter, VertexId, VertexStore, VertexWriter,
};
use grafo_graph::{
    copy_directed, copy_mixed, directed_equals, directed_includes, mixed_equals,
    read_directed_line, read_undirected_line, reduce_direct_paths, split_directed, split_mixed,
    split_undirected, topological_sort, undirected_equals, ArcFilter, DirectedMap, EdgeFilter,
    MixedFilter, MixedMap, MixedMatrix, UndirectedMap,
};

fn v(raw: u64) -> VertexId {
    VertexId::from(raw)
}

fn directed(arcs: &[(u64, u64)]) -> DirectedMap {
    let mut graph = DirectedMap::new();
    for (tail, head) in arcs {
        graph.add_arc(v(*tail), v(*head)).unwrap();
    }
    graph
}

fn position(order: &[VertexId], vertex: u64) -> usize {
    order.iter().position(|x| *x == v(vertex)).unwrap()
}

#[test]
fn topological_sort_orders_a_dag() {
    let graph = directed(&[(1, 2), (2, 3), (1, 4), (4, 3)]);
    let order = topological_sort(&graph).unwrap().expect("acyclic");
    assert_eq!(order.len(), 4);
    assert!(position(&order, 1) < position(&order, 2));
    assert!(position(&order, 1) < position(&order, 4));
    assert!(position(&order, 2) < position(&order, 3));
    assert!(position(&order, 4) < position(&order, 3));
}

#[test]
fn topological_sort_detects_cycles() {
    assert!(topological_sort(&directed(&[(1, 2), (2, 3), (3, 1)]))
        .unwrap()
        .is_none());
    // A cycle no source reaches.
    assert!(topological_sort(&directed(&[(1, 2), (3, 4), (4, 3)]))
        .unwrap()
        .is_none());
    assert!(topological_sort(&directed(&[(1, 1)])).unwrap().is_none());
}

#[test]
fn topological_sort_keeps_isolated_vertices() {
    let mut graph = directed(&[(1, 2)]);
    graph.add_vertex(v(7)).unwrap();
    let order = topological_sort(&graph).unwrap().unwrap();
    assert_eq!(order.len(), 3);
    assert!(order.contains(&v(7)));
}

#[test]
fn reduction_drops_implied_arcs() {
    let graph = directed(&[(1, 2), (2, 3), (1, 3)]);
    let mut reduced = DirectedMap::new();
    let dropped = reduce_direct_paths(&graph, &mut reduced, None).unwrap();
    assert_eq!(dropped, 1);
    assert!(directed_equals(&reduced, &directed(&[(1, 2), (2, 3)])).unwrap());

    let graph = directed(&[(1, 2), (2, 3), (3, 4), (2, 4), (4, 5), (1, 6), (2, 6)]);
    let mut reduced = DirectedMap::new();
    assert_eq!(reduce_direct_paths(&graph, &mut reduced, None).unwrap(), 2);
    assert!(!reduced.check_arc(v(2), v(4)).unwrap());
    assert!(!reduced.check_arc(v(1), v(6)).unwrap());
    assert_eq!(reduced.order(), 6);
}

#[test]
fn reduction_stop_predicate_keeps_arcs() {
    let graph = directed(&[(1, 2), (2, 3), (1, 3)]);
    let mut reduced = DirectedMap::new();
    let never = |_tail: VertexId, _vertex: VertexId, _weight: f64| true;
    let dropped = reduce_direct_paths(&graph, &mut reduced, Some(&never)).unwrap();
    assert_eq!(dropped, 0);
    assert!(directed_equals(&reduced, &graph).unwrap());
}

#[test]
fn split_separates_disjoint_pieces() {
    let first = directed(&[(1, 2), (2, 3)]);
    let second = directed(&[(4, 5)]);
    let mut merged = DirectedMap::new();
    copy_directed(&first, &mut merged).unwrap();
    copy_directed(&second, &mut merged).unwrap();

    let parts = split_directed(&merged, |_| DirectedMap::new()).unwrap();
    assert_eq!(parts.len(), 2);
    assert!(directed_equals(&parts[0], &first).unwrap());
    assert!(directed_equals(&parts[1], &second).unwrap());
}

#[test]
fn split_merges_components_reached_from_several_sources() {
    let mut graph = DirectedMap::new();
    for line in ["1-2-3-4", "2-6", "5-4-2", "10-11-12", "14-13-11", "15-12-16-17"] {
        read_directed_line(&mut graph, &line.replace('-', ">")).unwrap();
    }
    graph.add_vertex(v(30)).unwrap();
    let mut sizes = Vec::new();
    let parts = split_directed(&graph, |size| {
        sizes.push(size);
        DirectedMap::new()
    })
    .unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(sizes, vec![6, 8, 1]);
    assert!(parts[0].check_arc(v(5), v(4)).unwrap());
    assert_eq!(parts[1].arcs_count(), 7);

    let mut undirected = UndirectedMap::new();
    for line in ["1-2-3-4", "2-6", "5-4-2", "10-11-12", "14-13-11", "15-12-16-17"] {
        read_undirected_line(&mut undirected, line).unwrap();
    }
    let parts = split_undirected(&undirected, |_| UndirectedMap::new()).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].order(), 6);
    assert_eq!(parts[1].edges_count(), 7);
}

#[test]
fn split_mixed_follows_arcs_backwards() {
    let mut graph = MixedMap::new();
    graph.add_arc(v(2), v(1)).unwrap();
    graph.add_edge(v(2), v(3)).unwrap();
    graph.add_arc(v(5), v(4)).unwrap();
    let parts = split_mixed(&graph, MixedMatrix::with_capacity).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].order(), 3);
    assert!(parts[0].check_arc(v(2), v(1)).unwrap());
    assert!(parts[0].check_edge(v(3), v(2)).unwrap());
    assert_eq!(parts[1].capacity(), 2);
}

#[test]
fn filters_hide_connections() {
    let graph = directed(&[(1, 2), (2, 3), (1, 3)]);
    let view = ArcFilter::single(&graph, v(1), v(3));
    assert_eq!(view.arcs_count(), 2);
    assert!(!view.check_arc(v(1), v(3)).unwrap());
    assert_eq!(view.accessors(v(1)).unwrap().collect::<Vec<_>>(), vec![v(2)]);
    assert_eq!(view.predecessors(v(3)).unwrap().collect::<Vec<_>>(), vec![v(2)]);
    assert!(directed_includes(&graph, &view).unwrap());
    assert!(!directed_includes(&view, &graph).unwrap());

    let mut edges = UndirectedMap::new();
    edges.add_edge(v(1), v(2)).unwrap();
    edges.add_edge(v(2), v(3)).unwrap();
    let view = EdgeFilter::new(&edges, [Connection::new(2u64, 1u64)]);
    assert_eq!(view.edges_count(), 1);
    assert!(!view.check_edge(v(1), v(2)).unwrap());
    assert_eq!(view.neighbours(v(2)).unwrap().collect::<Vec<_>>(), vec![v(3)]);
}

#[test]
fn filtering_an_absent_connection_changes_nothing() {
    let graph = directed(&[(1, 2), (2, 3)]);
    let view = ArcFilter::single(&graph, v(3), v(1));
    assert!(directed_equals(&view, &graph).unwrap());

    let mut edges = UndirectedMap::new();
    edges.add_edge(v(1), v(2)).unwrap();
    let view = EdgeFilter::single(&edges, v(1), v(3));
    assert!(undirected_equals(&view, &edges).unwrap());
}

#[test]
fn hidden_connections_with_unknown_ends_are_not_counted() {
    let graph = directed(&[(1, 2), (2, 3)]);
    let hidden = [
        Connection::new(1u64, 2u64),
        Connection::new(2u64, 9u64),
        Connection::new(8u64, 9u64),
    ];
    let view = ArcFilter::new(&graph, hidden);
    assert_eq!(view.arcs_count(), 1);
    assert_eq!(view.arcs().count(), 1);
    assert!(view.hides(v(8), v(9)));

    let mut edges = UndirectedMap::new();
    edges.add_edge(v(1), v(2)).unwrap();
    let view = EdgeFilter::new(&edges, [Connection::new(7u64, 1u64)]);
    assert_eq!(view.edges_count(), 1);
    assert!(undirected_equals(&view, &edges).unwrap());
}

#[test]
fn split_errors_name_the_component() {
    let graph = directed(&[(1, 2), (5, 6), (6, 7)]);
    let err = split_directed(&graph, |_| MixedMatrix::with_capacity(2)).unwrap_err();
    assert!(matches!(err, GraphError::CapacityExceeded(_)));
    assert_eq!(err.info().context["component"], "1");
}

#[test]
fn mixed_filter_dispatches_on_kind() {
    let mut graph = MixedMap::new();
    graph.add_arc(v(1), v(2)).unwrap();
    graph.add_edge(v(2), v(3)).unwrap();

    // Hiding the edge 1 -- 2 leaves the arc 1 -> 2 in place.
    let view = MixedFilter::new(&graph, [TypedConnection::undirected(1u64, 2u64)]);
    assert!(mixed_equals(&view, &graph).unwrap());

    let view = MixedFilter::new(
        &graph,
        [
            TypedConnection::directed(1u64, 2u64),
            TypedConnection::undirected(3u64, 2u64),
        ],
    );
    assert_eq!(view.connections_count(), 0);
    assert_eq!(view.typed_connections().count(), 0);
    assert_eq!(
        view.connection_type(v(2), v(1)).unwrap(),
        MixedConnectionType::None
    );
}

#[test]
fn copy_between_backends_preserves_structure() {
    let mut source = MixedMap::new();
    source.add_arc(v(4), v(1)).unwrap();
    source.add_edge(v(1), v(2)).unwrap();
    source.add_vertex(v(9)).unwrap();

    let mut dense = MixedMatrix::with_capacity(4);
    copy_mixed(&source, &mut dense).unwrap();
    assert!(mixed_equals(&source, &dense).unwrap());
    assert!(mixed_equals(&dense, &source).unwrap());
    assert!(dense.check_vertex(v(9)));
}
