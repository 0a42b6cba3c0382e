use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grafo_core::{RngHandle, VertexId};
use grafo_graph::{
    all_paths, bellman_ford_single_source, check_directed_path_dijkstra, gen_random_dag,
    topological_sort, unit_weight, DirectedMap, DirectedNeighbours,
};

fn queries_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let mut graph = DirectedMap::new();
    gen_random_dag(&mut graph, 1_000, 0.01, &mut rng).unwrap();
    let first = VertexId::from(1);
    let last = VertexId::from(1_000);

    c.bench_function("dijkstra_first_to_last", |b| {
        b.iter(|| {
            black_box(
                check_directed_path_dijkstra(&graph, first, last, None, unit_weight).unwrap(),
            );
        });
    });

    c.bench_function("bellman_ford_from_first", |b| {
        b.iter(|| {
            black_box(bellman_ford_single_source(&graph, first, unit_weight).unwrap());
        });
    });

    c.bench_function("topological_sort", |b| {
        b.iter(|| {
            black_box(topological_sort(&graph).unwrap());
        });
    });

    c.bench_function("first_hundred_paths", |b| {
        b.iter(|| {
            let paths = all_paths(DirectedNeighbours::new(&graph), first, last);
            black_box(paths.take(100).count());
        });
    });
}

criterion_group!(benches, queries_bench);
criterion_main!(benches);
