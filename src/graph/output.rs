//! The finalized property graph handed to sinks

use super::edge::EdgeRecord;
use super::node::NodeRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A flat property graph: `{nodes, edges}` in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeRecord> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats::from_records(self.nodes.iter(), self.edges.iter())
    }
}

/// Counts describing how complete a graph is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Edges still missing a source or a target
    pub open_edges: usize,
    /// Endpoints naming an id no node carries
    pub dangling_endpoints: usize,
}

impl GraphStats {
    pub fn from_records<'a>(
        nodes: impl Iterator<Item = &'a NodeRecord>,
        edges: impl Iterator<Item = &'a EdgeRecord>,
    ) -> Self {
        let mut stats = Self::default();
        let mut node_ids: HashSet<&str> = HashSet::new();
        for node in nodes {
            stats.nodes += 1;
            node_ids.insert(node.id.as_str());
        }
        for edge in edges {
            stats.edges += 1;
            if !edge.is_connected() {
                stats.open_edges += 1;
            }
            stats.dangling_endpoints += [&edge.source, &edge.target]
                .into_iter()
                .flatten()
                .filter(|id| !node_ids.contains(id.as_str()))
                .count();
        }
        stats
    }
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} edges ({} open, {} dangling endpoints)",
            self.nodes, self.edges, self.open_edges, self.dangling_endpoints
        )
    }
}
