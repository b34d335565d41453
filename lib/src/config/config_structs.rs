// lib/src/config/config_structs.rs

use std::fmt;
use std::str::FromStr;

use models::{Dataset, GraphError, GraphResult};
use serde::{Deserialize, Serialize};

use crate::config::config_constants::*;
use crate::config::config_serializers::mode_setting_serde;
use crate::suite::BenchmarkMode;

/// How each dataset is timed, as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeSetting {
    #[default]
    Single,
    Repeated,
}

impl FromStr for ModeSetting {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(ModeSetting::Single),
            "repeated" => Ok(ModeSetting::Repeated),
            _ => Err(GraphError::ConfigError(format!("Unknown benchmark mode: {}", s))),
        }
    }
}

impl fmt::Display for ModeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSetting::Single => write!(f, "single"),
            ModeSetting::Repeated => write!(f, "repeated"),
        }
    }
}

/// Benchmark run description. Every field falls back to the built-in defaults
/// when missing from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub datasets: Vec<Dataset>,
    #[serde(with = "mode_setting_serde")]
    pub mode: ModeSetting,
    pub iterations: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            datasets: default_datasets(),
            mode: ModeSetting::Single,
            iterations: DEFAULT_BENCHMARK_ITERATIONS,
        }
    }
}

pub fn default_datasets() -> Vec<Dataset> {
    vec![
        Dataset::new(DEFAULT_ROADS_CSV_PATH, DEFAULT_ROADS_START_NODE),
        Dataset::new(DEFAULT_TWITCH_CSV_PATH, DEFAULT_TWITCH_START_NODE),
    ]
}

impl BenchmarkConfig {
    pub fn mode(&self) -> BenchmarkMode {
        match self.mode {
            ModeSetting::Single => BenchmarkMode::Single,
            ModeSetting::Repeated => BenchmarkMode::Repeated {
                iterations: self.iterations,
            },
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.datasets.is_empty() {
            return Err(GraphError::ConfigError("no datasets configured".to_string()));
        }
        if self.iterations == 0 {
            return Err(GraphError::ConfigError(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
