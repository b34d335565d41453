// models/src/errors.rs

use std::io;
pub use thiserror::Error;

use crate::identifiers::NodeId;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid data provided: {0}")]
    InvalidData(String),

    #[error("node {0} was not found in the graph")]
    NodeNotFound(NodeId),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[cfg(feature = "csv-errors")]
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl GraphError {
    /// True when the error only says the requested start node is absent.
    pub fn is_node_not_found(&self) -> bool {
        matches!(self, GraphError::NodeNotFound(_))
    }
}

/// A type alias for a `Result` that returns a `GraphError` on failure.
pub type GraphResult<T> = Result<T, GraphError>;
