// models/src/edges.rs
use crate::identifiers::NodeId;
use serde::{Deserialize, Serialize};

/// One undirected edge read from an edge list row.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
}

impl EdgeRecord {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Builds a record from the fields of one row.
    ///
    /// Only rows with exactly two fields describe an edge; anything else
    /// yields `None`.
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let source = fields.next()?;
        let target = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(source, target))
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
