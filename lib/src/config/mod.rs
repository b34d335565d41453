// lib/src/config/mod.rs

pub mod config_constants;
pub mod config_helpers;
pub mod config_serializers;
pub mod config_structs;

pub use config_constants::*;
pub use config_helpers::{load_benchmark_config, parse_benchmark_config};
pub use config_structs::{BenchmarkConfig, ModeSetting};
