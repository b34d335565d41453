// models/src/datasets.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::identifiers::NodeId;

/// An edge list on disk together with the node every traversal starts from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub path: PathBuf,
    pub start_node: NodeId,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>, start_node: impl Into<NodeId>) -> Self {
        Self {
            path: path.into(),
            start_node: start_node.into(),
        }
    }
}
