// runner/src/cli/cli.rs

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use graphbench::suite::{run_suite, BenchmarkOutcome};
use log::info;

use crate::cli::commands::CliArgs;

/// Parses the process arguments and runs the configured benchmark suite.
pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_args(&args, &mut out).map(|_| ())
}

pub fn run_with_args<W: Write>(args: &CliArgs, out: &mut W) -> Result<Vec<BenchmarkOutcome>> {
    let config = args
        .resolve()
        .context("Failed to resolve benchmark configuration")?;
    info!(
        "Running {} dataset(s) in {:?} mode",
        config.datasets.len(),
        config.mode()
    );

    let outcomes = run_suite(&config, out).context("Benchmark run failed")?;
    let completed = outcomes.iter().filter(|o| o.is_completed()).count();
    info!("{} of {} dataset(s) completed", completed, config.datasets.len());
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn runs_single_dataset_from_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0,1").unwrap();
        writeln!(file, "1,2").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let args = CliArgs::parse_with_config_env(None, &["bfs-benchmark", "--dataset", path, "--start", "0"]);
        let mut out = Vec::new();
        let outcomes = run_with_args(&args, &mut out).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_completed());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("with 3 nodes from node 0..."));
    }

    #[test]
    fn missing_start_node_is_not_a_failure() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a,b").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let args = CliArgs::parse_with_config_env(None, &["bfs-benchmark", "--dataset", path, "--start", "0"]);
        let mut out = Vec::new();
        let outcomes = run_with_args(&args, &mut out).unwrap();

        assert_eq!(outcomes, vec![BenchmarkOutcome::StartNodeMissing]);
        assert!(String::from_utf8(out).unwrap().contains("Node 0 not found in the graph."));
    }
}
