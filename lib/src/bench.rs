// lib/src/bench.rs

//! Wall-clock timing of full breadth-first traversals. Only durations are
//! reported; traversal output is discarded.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;
use models::{GraphError, GraphResult, NodeId};

use crate::engine::EdgeListGraph;

/// Aggregate timing of back-to-back traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub iterations: u32,
    pub total: Duration,
}

impl BenchmarkReport {
    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }
}

fn ensure_start_node(graph: &EdgeListGraph, start: &str) -> GraphResult<()> {
    if graph.contains_node(start) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound(NodeId::from(start)))
    }
}

/// Times one traversal from `start`.
pub fn bfs_benchmark(graph: &EdgeListGraph, start: &str) -> GraphResult<Duration> {
    ensure_start_node(graph, start)?;

    let timer = Instant::now();
    let tree = black_box(graph.bfs_tree(start)?);
    let elapsed = timer.elapsed();

    debug!("BFS from {} reached {} nodes in {:?}", start, tree.len(), elapsed);
    Ok(elapsed)
}

/// Times `iterations` traversals from `start` under a single timer.
///
/// No warm-up run is excluded and no per-iteration statistics are kept.
pub fn bfs_benchmark_repeated(
    graph: &EdgeListGraph,
    start: &str,
    iterations: u32,
) -> GraphResult<BenchmarkReport> {
    if iterations == 0 {
        return Err(GraphError::InvalidData(
            "benchmark needs at least one iteration".to_string(),
        ));
    }
    ensure_start_node(graph, start)?;

    let timer = Instant::now();
    for _ in 0..iterations {
        black_box(graph.bfs_tree(start)?);
    }
    let total = timer.elapsed();

    debug!("{} BFS runs from {} took {:?}", iterations, start, total);
    Ok(BenchmarkReport { iterations, total })
}
