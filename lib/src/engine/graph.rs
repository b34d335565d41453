// lib/src/engine/graph.rs

use hashbrown::HashMap;
use models::{EdgeRecord, NodeId};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Undirected, unweighted graph keyed by raw string identifiers.
///
/// Nodes are created the first time an edge mentions them. Adding an edge
/// that already exists, in either orientation, leaves the graph unchanged.
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    graph: UnGraph<NodeId, ()>,
    index: HashMap<NodeId, NodeIndex>,
}

impl EdgeListGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            graph.add_record(&record);
        }
        graph
    }

    /// Returns the index of `id`, inserting the node if it is new.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&ix) = self.index.get(id) {
            return ix;
        }
        let node = NodeId::from(id);
        let ix = self.graph.add_node(node.clone());
        self.index.insert(node, ix);
        ix
    }

    /// Adds the edge `source -- target`. Returns `false` when it was already present.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let a = self.add_node(source);
        let b = self.add_node(target);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    pub fn add_record(&mut self, record: &EdgeRecord) -> bool {
        self.add_edge(record.source.as_str(), record.target.as_str())
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_id(&self, ix: NodeIndex) -> Option<&NodeId> {
        self.graph.node_weight(ix)
    }

    /// Node identifiers in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.graph.node_weights()
    }

    /// Edges as identifier pairs in insertion order, oriented as first added.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(move |edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }

    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.node_index(id)
            .into_iter()
            .flat_map(move |ix| self.graph.neighbors(ix))
            .map(move |n| &self.graph[n])
    }

    /// Borrow the underlying `petgraph` graph.
    pub fn as_petgraph(&self) -> &UnGraph<NodeId, ()> {
        &self.graph
    }
}
