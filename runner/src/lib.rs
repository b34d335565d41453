// runner/src/lib.rs

pub mod cli;
