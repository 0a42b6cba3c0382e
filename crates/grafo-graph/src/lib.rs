#![deny(missing_docs)]

//! Graph engine implementing the `grafo-core` contracts.
//!
//! Provides adjacency-map and packed-matrix storage for directed, undirected
//! and mixed graphs, together with the algorithms that run over any of them
//! through the capability traits: best-first and Bellman-Ford path search,
//! simple path enumeration, topological sort, component splitting and
//! transitive reduction. Filters give read-only views with connections
//! hidden. The line-format reader and DOT renderer sit at the boundary.

mod compare;
mod copy;
mod directed_map;
mod dot;
mod filter;
mod flags;
mod generators;
mod hash;
mod indexer;
mod input;
mod mixed_map;
mod mixed_matrix;
mod neighbours;
mod queue;
mod reduce;
mod search;
mod split;
mod topo;
mod undirected_map;
mod undirected_matrix;

pub use compare::{
    directed_equals, directed_includes, includes_vertices, mixed_equals, mixed_includes,
    undirected_equals, undirected_includes,
};
pub use copy::{copy_directed, copy_mixed, copy_undirected};
pub use directed_map::DirectedMap;
pub use dot::{
    default_connection_style, default_vertex_style, render_directed, render_mixed,
    render_undirected, ConnectionStyleFn, DotStyle, Style, VertexStyleFn,
};
pub use filter::{ArcFilter, EdgeFilter, MixedFilter};
pub use flags::{GraphConfig, GraphKind, Storage};
pub use generators::{gen_random_dag, gen_random_mixed, gen_random_undirected};
pub use hash::{directed_hash, mixed_hash, undirected_hash};
pub use indexer::{checked_triangular_len, triangular_len, triangular_slot};
pub use input::{
    read_directed, read_directed_line, read_mixed, read_mixed_line, read_undirected,
    read_undirected_line,
};
pub use mixed_map::MixedMap;
pub use mixed_matrix::MixedMatrix;
pub use neighbours::{
    DirectedNeighbours, InNeighbours, MixedNeighbours, OutNeighbours, UndirectedNeighbours,
};
pub use queue::PriorityQueue;
pub use reduce::{reduce_direct_paths, ReduceStopFn};
pub use search::{
    all_paths, bellman_ford, bellman_ford_single_source, check_directed_path_dijkstra,
    check_mixed_path_dijkstra, check_path, check_undirected_path_dijkstra, path_from_marks,
    unit_weight, AllPaths, Mark, StopFn,
};
pub use split::{split_directed, split_mixed, split_undirected};
pub use topo::topological_sort;
pub use undirected_map::UndirectedMap;
pub use undirected_matrix::UndirectedMatrix;
