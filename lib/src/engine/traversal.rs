// lib/src/engine/traversal.rs

use crate::engine::graph::EdgeListGraph;
use hashbrown::HashMap;
use models::{GraphError, GraphResult, NodeId};
use petgraph::graph::NodeIndex;
use petgraph::visit::Bfs;

/// Result of a full breadth-first traversal: the visit order and the parent
/// of every reached node except the root.
#[derive(Debug, Clone)]
pub struct BfsTree<'g> {
    graph: &'g EdgeListGraph,
    root: NodeIndex,
    order: Vec<NodeIndex>,
    parents: HashMap<NodeIndex, NodeIndex>,
}

impl EdgeListGraph {
    /// Breadth-first traversal from `start` over every reachable node.
    pub fn bfs_tree(&self, start: &str) -> GraphResult<BfsTree<'_>> {
        let root = self
            .node_index(start)
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(start)))?;
        let graph = self.as_petgraph();

        let mut order = Vec::new();
        let mut parents = HashMap::new();
        let mut bfs = Bfs::new(graph, root);

        // `Bfs` discovers the neighbours of each popped node in this same
        // order, so the first node to reach a neighbour is its BFS parent.
        while let Some(current) = bfs.next(graph) {
            order.push(current);
            for next in graph.neighbors(current) {
                if next != root {
                    parents.entry(next).or_insert(current);
                }
            }
        }

        Ok(BfsTree {
            graph: self,
            root,
            order,
            parents,
        })
    }
}

impl<'g> BfsTree<'g> {
    pub fn root(&self) -> &'g NodeId {
        &self.graph.as_petgraph()[self.root]
    }

    /// Reached nodes in visit order, root first.
    pub fn order(&self) -> impl Iterator<Item = &'g NodeId> + '_ {
        let graph = self.graph.as_petgraph();
        self.order.iter().map(move |&ix| &graph[ix])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        match self.graph.node_index(id) {
            Some(ix) => ix == self.root || self.parents.contains_key(&ix),
            None => false,
        }
    }

    pub fn parent(&self, id: &str) -> Option<&'g NodeId> {
        let ix = self.graph.node_index(id)?;
        let parent = self.parents.get(&ix)?;
        self.graph.node_id(*parent)
    }

    /// Distance in edges from the root, or `None` if `id` was not reached.
    pub fn depth(&self, id: &str) -> Option<usize> {
        let mut ix = self.graph.node_index(id)?;
        let mut depth = 0;
        while ix != self.root {
            ix = *self.parents.get(&ix)?;
            depth += 1;
        }
        Some(depth)
    }
}
