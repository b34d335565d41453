// runner/src/main.rs

// Entry point for the BFS benchmark runner. With no flags it times the
// built-in datasets exactly as configured in `graphbench::config`.

use anyhow::Result;
use graphbench_runner::cli::start_cli;

fn main() -> Result<()> {
    env_logger::init();
    start_cli()
}
