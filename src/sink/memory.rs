//! MemoryGraph: an in-process graph-bearing sink
//!
//! Holds nodes and edges keyed by id in load order, the way a rendering
//! widget holds the graph it displays.

use super::traits::GraphSink;
use crate::graph::{EdgeRecord, Graph, GraphStats, NodeRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration a [`MemoryGraph`] is constructed from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryGraphConfig {
    /// Name reported by the constructed instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Graph loaded at construction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
}

impl MemoryGraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            graph: None,
        }
    }

    /// Attach the graph a new instance starts from
    pub fn attach(&mut self, graph: Graph) {
        self.graph = Some(graph);
    }
}

/// A graph held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    name: Option<String>,
    nodes: IndexMap<String, NodeRecord>,
    edges: IndexMap<String, EdgeRecord>,
    loads: usize,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MemoryGraphConfig) -> Self {
        let mut instance = Self {
            name: config.name,
            ..Self::default()
        };
        if let Some(graph) = config.graph {
            instance.read(graph);
        }
        instance
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// How many graphs have been read into this instance
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeRecord> {
        self.edges.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats::from_records(self.nodes(), self.edges())
    }

    /// Copy the current state out as a graph
    pub fn to_graph(&self) -> Graph {
        Graph::with_records(self.nodes().cloned().collect(), self.edges().cloned().collect())
    }
}

impl GraphSink for MemoryGraph {
    type Config = MemoryGraphConfig;

    fn from_config(mut config: Self::Config, graph: Graph) -> Self {
        config.attach(graph);
        MemoryGraph::with_config(config)
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    fn read(&mut self, graph: Graph) {
        self.loads += 1;
        for node in graph.nodes {
            self.nodes.insert(node.id.clone(), node);
        }
        for edge in graph.edges {
            self.edges.insert(edge.id.clone(), edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{deliver, Callback, Delivered, Delivery, Destination};
    use std::cell::Cell;

    fn sample() -> Graph {
        Graph::with_records(
            vec![NodeRecord::new("A", Some("Alpha")), NodeRecord::new("B", None)],
            vec![EdgeRecord::new("e1", Some("Link")).with_source("A").with_target("B")],
        )
    }

    #[test]
    fn constructed_from_config_with_attached_graph() {
        let mut config = MemoryGraphConfig::named("people");
        config.attach(sample());

        let graph = MemoryGraph::with_config(config);

        assert_eq!(graph.name(), Some("people"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge("e1").unwrap().label, "Link");
        assert_eq!(graph.loads(), 1);
        assert_eq!(graph.to_graph(), sample());
    }

    #[test]
    fn existing_instance_is_replaced_not_merged() {
        let mut instance = MemoryGraph::with_config(MemoryGraphConfig {
            name: None,
            graph: Some(Graph::with_records(vec![NodeRecord::new("old", None)], vec![])),
        });

        let outcome = deliver(sample(), Destination::Existing(&mut instance), None);

        assert!(matches!(outcome, Delivery::Updated));
        assert!(instance.node("old").is_none());
        assert_eq!(instance.node_count(), 2);
        assert_eq!(instance.loads(), 2);
    }

    #[test]
    fn config_destination_builds_a_named_instance() {
        let seen = Cell::new(0);
        let callback: Callback<'_, MemoryGraph> =
            Box::new(|delivered: Delivered<'_, MemoryGraph>| {
                if let Delivered::Sink(sink) = delivered {
                    seen.set(sink.node_count());
                }
            });

        let outcome = deliver(
            sample(),
            Destination::Config(MemoryGraphConfig::named("fresh")),
            Some(callback),
        );

        assert_eq!(seen.get(), 2);
        let instance = outcome.into_sink().unwrap();
        assert_eq!(instance.name(), Some("fresh"));
        assert_eq!(instance.stats().dangling_endpoints, 0);
    }
}
