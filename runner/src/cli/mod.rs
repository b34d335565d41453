// runner/src/cli/mod.rs

pub mod cli;
pub mod commands;

pub use cli::{run_with_args, start_cli};
pub use commands::CliArgs;
