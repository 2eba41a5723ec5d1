//! The normalized runtime graph produced by every decoder.

use super::{Edge, Node, Stack};
use serde::{Deserialize, Serialize};

/// Nodes, edges and stacks of one decoded snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Runtime {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub stacks: Vec<Stack>,
}

impl Runtime {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, stacks: Vec<Stack>) -> Self {
        Self {
            nodes,
            edges,
            stacks,
        }
    }

    /// Find a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Edges owned by `node`, in the order listed by its `edge_ids`
    pub fn edges_from<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.from_node_id == node.id)
    }

    /// Number of nodes carrying access metrics
    pub fn energy_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.energy.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.stacks.is_empty()
    }
}
