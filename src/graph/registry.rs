//! Identity registry: de-duplicated node and edge records for one build
//!
//! Records are keyed by id and kept in first-seen order. Upserts are
//! idempotent creators; the only field an upsert ever changes on an existing
//! record is an edge label that was never set explicitly.

use super::edge::EdgeRecord;
use super::node::{NodeDefaults, NodeRecord};
use super::output::Graph;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

/// Running node and edge maps for a single build pass
#[derive(Debug, Default)]
pub struct Registry {
    nodes: IndexMap<String, NodeRecord>,
    edges: IndexMap<String, EdgeRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the node `id` if it does not exist yet.
    ///
    /// An existing node is returned untouched, whatever `label` says.
    pub fn upsert_node(&mut self, id: &str, label: Option<&str>) -> &mut NodeRecord {
        self.nodes.entry(id.to_string()).or_insert_with(|| {
            trace!(id, "new node");
            NodeRecord::new(id, label)
        })
    }

    /// Create the edge `id` if it does not exist yet.
    ///
    /// On an existing edge, a non-empty `label` replaces the label only while
    /// that label still equals the bare id. `kind` and `raw_source` only
    /// apply to a newly created edge.
    pub fn upsert_edge(
        &mut self,
        kind: Option<&str>,
        id: &str,
        label: Option<&str>,
        raw_source: Option<Value>,
    ) -> &mut EdgeRecord {
        match self.edges.entry(id.to_string()) {
            Entry::Occupied(entry) => {
                let edge = entry.into_mut();
                if let Some(label) = label.filter(|l| !l.is_empty()) {
                    if edge.has_bare_label() {
                        trace!(id, label, "backfilled edge label");
                        edge.label = label.to_string();
                    }
                }
                edge
            }
            Entry::Vacant(entry) => {
                trace!(id, "new edge");
                let mut edge = EdgeRecord::new(id, label);
                edge.kind = kind.map(str::to_string);
                edge.raw_source = raw_source;
                entry.insert(edge)
            }
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeRecord> {
        self.edges.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Project both maps into a graph, filling every node from `defaults`
    pub fn finish(self, defaults: &NodeDefaults) -> Graph {
        let nodes = self
            .nodes
            .into_values()
            .map(|node| defaults.fill(node))
            .collect();
        let edges = self.edges.into_values().collect();
        Graph::with_records(nodes, edges)
    }
}
