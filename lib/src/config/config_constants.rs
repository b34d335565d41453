// lib/src/config/config_constants.rs

// Paths are relative to the directory the runner is started from.
pub const DEFAULT_ROADS_CSV_PATH: &str = "benchmark/data/roads.csv";
pub const DEFAULT_ROADS_START_NODE: &str = "140000";
pub const DEFAULT_TWITCH_CSV_PATH: &str = "benchmark/data/large_twitch_edges.csv";
pub const DEFAULT_TWITCH_START_NODE: &str = "0";

pub const DEFAULT_BENCHMARK_ITERATIONS: u32 = 2;
