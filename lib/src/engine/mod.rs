pub mod graph;
pub mod traversal;

// Public re-exports
pub use graph::EdgeListGraph;
pub use traversal::BfsTree;
