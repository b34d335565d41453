//! Micro-benchmarks for graph loading and breadth-first traversal.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use graphbench::{load_graph_from_reader, EdgeListGraph};

/// Square grid with `side * side` nodes named `"row:col"`.
fn grid_edge_list(side: usize) -> String {
    let mut csv = String::new();
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                csv.push_str(&format!("{}:{},{}:{}\n", row, col, row, col + 1));
            }
            if row + 1 < side {
                csv.push_str(&format!("{}:{},{}:{}\n", row, col, row + 1, col));
            }
        }
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let csv = grid_edge_list(100);
    c.bench_function("load_grid_100x100", |b| {
        b.iter(|| black_box(load_graph_from_reader(csv.as_bytes()).unwrap()));
    });
}

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_tree");
    group.sample_size(10);
    for side in [32usize, 128, 256] {
        let graph: EdgeListGraph = load_graph_from_reader(grid_edge_list(side).as_bytes()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &graph, |b, graph| {
            b.iter(|| black_box(graph.bfs_tree("0:0").unwrap().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_bfs);
criterion_main!(benches);
