// lib/src/suite.rs

//! Runs the benchmark over a list of datasets, printing progress and timing
//! lines to the given writer.

use std::io::Write;
use std::time::Duration;

use log::{info, warn};
use models::{Dataset, GraphResult};

use crate::bench::{bfs_benchmark, bfs_benchmark_repeated};
use crate::config::BenchmarkConfig;
use crate::loader::load_graph_from_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkMode {
    /// One traversal, timed on its own.
    Single,
    /// `iterations` traversals under one timer; only the total is reported.
    Repeated { iterations: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkOutcome {
    Completed {
        nodes: usize,
        edges: usize,
        elapsed: Duration,
    },
    /// The start node was not in the graph; nothing was traversed.
    StartNodeMissing,
}

impl BenchmarkOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, BenchmarkOutcome::Completed { .. })
    }
}

/// Loads one dataset and times BFS from its start node.
pub fn run_dataset<W: Write>(
    dataset: &Dataset,
    mode: BenchmarkMode,
    out: &mut W,
) -> GraphResult<BenchmarkOutcome> {
    let path = dataset.path.display();
    let start = dataset.start_node.as_str();

    writeln!(out, "Loading graph from {}...", path)?;
    let graph = load_graph_from_csv(&dataset.path)?;

    if !graph.contains_node(start) {
        writeln!(out, "Node {} not found in the graph.", start)?;
        warn!("Start node {} missing from {}", start, path);
        return Ok(BenchmarkOutcome::StartNodeMissing);
    }

    writeln!(
        out,
        "Running BFS on {} with {} nodes from node {}...",
        path,
        graph.node_count(),
        start
    )?;

    let elapsed = match mode {
        BenchmarkMode::Single => {
            let elapsed = bfs_benchmark(&graph, start)?;
            writeln!(
                out,
                "BFS benchmark completed, execution time: {}  seconds",
                elapsed.as_secs_f64()
            )?;
            elapsed
        }
        BenchmarkMode::Repeated { iterations } => {
            let report = bfs_benchmark_repeated(&graph, start, iterations)?;
            writeln!(
                out,
                "BFS benchmark completed, {} iterations, total execution time: {}  seconds",
                report.iterations,
                report.total_secs()
            )?;
            report.total
        }
    };

    Ok(BenchmarkOutcome::Completed {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        elapsed,
    })
}

/// Runs every configured dataset in order. A missing start node ends the run:
/// later datasets are not loaded.
pub fn run_suite<W: Write>(config: &BenchmarkConfig, out: &mut W) -> GraphResult<Vec<BenchmarkOutcome>> {
    config.validate()?;
    let mode = config.mode();
    let mut outcomes = Vec::with_capacity(config.datasets.len());

    for dataset in &config.datasets {
        let outcome = run_dataset(dataset, mode, out)?;
        let stop = !outcome.is_completed();
        outcomes.push(outcome);
        if stop {
            info!("Stopping benchmark run after {}", dataset.path.display());
            break;
        }
    }

    out.flush()?;
    Ok(outcomes)
}
