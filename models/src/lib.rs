// models/src/lib.rs

//! Shared value types for the benchmark workspace: node identifiers, edge
//! records, dataset descriptors and the common error type.

pub mod datasets;
pub mod edges;
pub mod errors;
pub mod identifiers;

pub use datasets::Dataset;
pub use edges::EdgeRecord;
pub use errors::{GraphError, GraphResult};
pub use identifiers::NodeId;
