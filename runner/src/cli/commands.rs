// runner/src/cli/commands.rs

use std::path::PathBuf;

use clap::Parser;
use graphbench::config::{load_benchmark_config, BenchmarkConfig, ModeSetting};
use models::{Dataset, GraphResult};

/// Command line arguments for the benchmark runner. Every flag is optional.
#[derive(Parser, Debug)]
#[command(name = "bfs-benchmark")]
#[command(version = "0.1.0")]
#[command(about = "Load CSV edge lists and time breadth-first traversals")]
pub struct CliArgs {
    /// YAML file listing datasets and the timing mode
    #[arg(long, value_name = "FILE", env = "GRAPHBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Benchmark this edge list instead of the configured datasets
    #[arg(long, value_name = "CSV", requires = "start")]
    pub dataset: Option<PathBuf>,

    /// Start node for --dataset
    #[arg(long, value_name = "NODE", requires = "dataset")]
    pub start: Option<String>,

    /// Time several traversals under one timer (defaults to the configured count)
    #[arg(long, value_name = "ITERATIONS", num_args = 0..=1)]
    pub repeat: Option<Option<u32>>,
}

impl CliArgs {
    /// Merges the flags over the config file (or the built-in defaults).
    pub fn resolve(&self) -> GraphResult<BenchmarkConfig> {
        let mut config = load_benchmark_config(self.config.as_deref())?;

        if let (Some(path), Some(start)) = (&self.dataset, &self.start) {
            config.datasets = vec![Dataset::new(path.clone(), start.as_str())];
        }
        if let Some(iterations) = self.repeat {
            config.mode = ModeSetting::Repeated;
            if let Some(iterations) = iterations {
                config.iterations = iterations;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses `args` with `--config` read from `env` instead of `GRAPHBENCH_CONFIG`.
    #[cfg(test)]
    pub(crate) fn parse_with_config_env(env: Option<&'static str>, args: &[&str]) -> CliArgs {
        use clap::{CommandFactory, FromArgMatches};

        let matches = CliArgs::command()
            .mut_arg("config", |arg| arg.env(env))
            .try_get_matches_from(args)
            .unwrap();
        CliArgs::from_arg_matches(&matches).unwrap()
    }
}
