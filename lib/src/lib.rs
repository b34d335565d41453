// lib/src/lib.rs

//! Loads undirected edge lists from CSV into a `petgraph` graph and times
//! breadth-first traversals over them.

pub mod bench;
pub mod config;
pub mod engine;
pub mod loader;
pub mod suite;

// Shared types live in the `models` crate.
pub use models::{Dataset, EdgeRecord, GraphError, GraphResult, NodeId};

pub use crate::bench::{bfs_benchmark, bfs_benchmark_repeated, BenchmarkReport};
pub use crate::config::{load_benchmark_config, BenchmarkConfig, ModeSetting};
pub use crate::engine::{BfsTree, EdgeListGraph};
pub use crate::loader::{load_graph_from_csv, load_graph_from_reader, read_edge_records};
pub use crate::suite::{run_dataset, run_suite, BenchmarkMode, BenchmarkOutcome};
