//! GraphBuilder: turns a SNAP JSON-LD document into a property graph
//!
//! Each element of `@graph` is classified on its own (see [`Element`]) and
//! applied to one [`Registry`]. Once every element is in, the registry is
//! projected into a [`Graph`] and every node is filled from the defaults.

use super::element::{Element, Role};
use super::error::{DocumentError, DocumentResult};
use super::vocab;
use crate::graph::{Graph, NodeDefaults, Registry};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Reusable document-to-graph converter
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    defaults: NodeDefaults,
    keep_raw_source: bool,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the attribute table nodes are filled from
    pub fn with_defaults(mut self, defaults: NodeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Attach each originating element to the record it produced
    pub fn keep_raw_source(mut self, keep: bool) -> Self {
        self.keep_raw_source = keep;
        self
    }

    /// Build a graph from an already-parsed document.
    ///
    /// Fails without a partial graph if `@graph` is missing or any element
    /// is malformed.
    pub fn build(&self, document: &Value) -> DocumentResult<Graph> {
        let elements = document
            .get(vocab::GRAPH)
            .ok_or_else(|| {
                DocumentError::MalformedDocument(format!(
                    "missing `{}` key at the root",
                    vocab::GRAPH
                ))
            })?
            .as_array()
            .ok_or_else(|| {
                DocumentError::MalformedDocument(format!("`{}` is not an array", vocab::GRAPH))
            })?;

        debug!(elements = elements.len(), "building graph");
        let mut registry = Registry::new();
        for (index, value) in elements.iter().enumerate() {
            let element = Element::parse(index, value)?;
            self.apply(&mut registry, &element);
        }

        let graph = registry.finish(&self.defaults);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Parse JSON text, then build
    pub fn build_str(&self, text: &str) -> DocumentResult<Graph> {
        let document: Value = serde_json::from_str(text)?;
        self.build(&document)
    }

    fn apply(&self, registry: &mut Registry, element: &Element<'_>) {
        match &element.role {
            Role::LinkedNode { bonds, places } => {
                trace!(
                    index = element.index,
                    id = element.id,
                    bonds = bonds.len(),
                    places = places.len(),
                    "linked node"
                );
                self.add_node(registry, element);

                for bond in bonds {
                    let edge = registry.upsert_edge(None, bond.id, bond.label, None);
                    edge.source = Some(element.id.to_string());
                }

                // A place link has no id of its own: key it by place id + node id.
                for place in places {
                    let edge_id = format!("{}{}", place.id, element.id);
                    let edge = registry.upsert_edge(None, &edge_id, None, None);
                    edge.source = Some(element.id.to_string());
                    edge.target = Some(place.id.to_string());
                }
            }
            Role::Relationship { partners } => {
                trace!(
                    index = element.index,
                    id = element.id,
                    partners = partners.len(),
                    "relationship"
                );
                if partners.len() > 1 {
                    warn!(
                        id = element.id,
                        partners = partners.len(),
                        "bond has several partners, the last one becomes its target"
                    );
                }

                let raw_source = self.raw_source(element);
                let edge = registry.upsert_edge(None, element.id, None, raw_source.clone());
                if edge.raw_source.is_none() {
                    edge.raw_source = raw_source;
                }
                if let Some(kind) = element.kind {
                    edge.kind = Some(kind.to_string());
                }
                if let Some(partner) = partners.last() {
                    edge.target = Some(partner.id.to_string());
                }

                for partner in partners {
                    registry.upsert_node(partner.id, None);
                }
            }
            Role::Node => {
                trace!(index = element.index, id = element.id, "node");
                self.add_node(registry, element);
            }
        }
    }

    fn add_node(&self, registry: &mut Registry, element: &Element<'_>) {
        let raw_source = self.raw_source(element);
        let node = registry.upsert_node(element.id, element.label);
        if node.raw_source.is_none() {
            node.raw_source = raw_source;
        }
    }

    fn raw_source(&self, element: &Element<'_>) -> Option<Value> {
        self.keep_raw_source.then(|| element.raw().clone())
    }
}

/// Build a graph with the built-in defaults
pub fn build_graph(document: &Value) -> DocumentResult<Graph> {
    GraphBuilder::new().build(document)
}

/// Parse JSON text and build a graph with the built-in defaults
pub fn build_graph_from_str(text: &str) -> DocumentResult<Graph> {
    GraphBuilder::new().build_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeRecord, NodeRecord};
    use serde_json::json;

    fn filled(id: &str, label: &str) -> NodeRecord {
        crate::graph::fill_node(NodeRecord::new(id, Some(label)))
    }

    #[test]
    fn bond_then_relationship_end_to_end() {
        let document = json!({"@graph": [
            {"@id": "A", "rdfs:label": "Alpha", "snap:has-bond": {"@id": "e1", "rdfs:label": "Link"}},
            {"@id": "e1", "snap:bond-with": {"@id": "B"}}
        ]});

        let graph = build_graph(&document).unwrap();

        assert_eq!(graph.nodes, vec![filled("A", "Alpha"), filled("B", "B")]);
        assert_eq!(
            graph.edges,
            vec![EdgeRecord::new("e1", Some("Link")).with_source("A").with_target("B")]
        );
        assert_eq!(
            serde_json::to_value(&graph).unwrap(),
            json!({
                "nodes": [
                    {"id": "A", "label": "Alpha", "x": 1, "y": 1, "size": 10},
                    {"id": "B", "label": "B", "x": 1, "y": 1, "size": 10}
                ],
                "edges": [
                    {"id": "e1", "label": "Link", "source": "A", "target": "B"}
                ]
            })
        );
    }

    #[test]
    fn relationship_before_bond_still_gets_the_label() {
        let document = json!({"@graph": [
            {"@id": "e1", "@type": "snap:Friendship", "snap:bond-with": {"@id": "B"}},
            {"@id": "A", "snap:has-bond": {"@id": "e1", "rdfs:label": "Link"}}
        ]});

        let graph = build_graph(&document).unwrap();

        let edge = graph.edge("e1").unwrap();
        assert_eq!(edge.label, "Link");
        assert_eq!(edge.source.as_deref(), Some("A"));
        assert_eq!(edge.target.as_deref(), Some("B"));
        assert_eq!(edge.kind.as_deref(), Some("snap:Friendship"));
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn to_one_and_to_many_bonds_produce_the_same_edges() {
        let single = json!({"@graph": [
            {"@id": "A", "snap:has-bond": {"@id": "e1", "rdfs:label": "Link"}}
        ]});
        let many = json!({"@graph": [
            {"@id": "A", "snap:has-bond": [{"@id": "e1", "rdfs:label": "Link"}]}
        ]});

        let single = build_graph(&single).unwrap();
        let many = build_graph(&many).unwrap();
        assert_eq!(single.edges, many.edges);
        assert_eq!(single.edges[0].source.as_deref(), Some("A"));
    }

    #[test]
    fn every_bond_in_an_array_becomes_an_edge() {
        let document = json!({"@graph": [
            {"@id": "A", "snap:has-bond": [{"@id": "e1"}, {"@id": "e2", "rdfs:label": "Two"}]}
        ]});

        let graph = build_graph(&document).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge("e1").unwrap().label, "e1");
        assert_eq!(graph.edge("e2").unwrap().label, "Two");
        assert!(graph.edges.iter().all(|e| e.source.as_deref() == Some("A")));
    }

    #[test]
    fn place_edges_use_place_id_then_node_id() {
        let single = json!({"@graph": [
            {"@id": "A", "snap:associated-place": {"@id": "P"}}
        ]});
        let many = json!({"@graph": [
            {"@id": "A", "snap:associated-place": [{"@id": "P"}, {"@id": "Q"}]}
        ]});

        let single = build_graph(&single).unwrap();
        let edge = single.edge("PA").unwrap();
        assert_eq!(edge.source.as_deref(), Some("A"));
        assert_eq!(edge.target.as_deref(), Some("P"));
        assert_eq!(edge.label, "PA");

        let many = build_graph(&many).unwrap();
        let ids: Vec<&str> = many.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["PA", "QA"]);
    }

    #[test]
    fn bond_and_place_on_one_element_both_contribute() {
        let document = json!({"@graph": [
            {
                "@id": "A",
                "snap:has-bond": {"@id": "e1"},
                "snap:associatedPlace": {"@id": "P"}
            }
        ]});

        let graph = build_graph(&document).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edge("e1").is_some());
        assert!(graph.edge("PA").is_some());
    }

    #[test]
    fn dangling_partner_gets_a_node_labelled_with_its_id() {
        let document = json!({"@graph": [
            {"@id": "e1", "snap:bond-with": {"@id": "Z", "rdfs:label": "Zeta"}}
        ]});

        let graph = build_graph(&document).unwrap();

        assert_eq!(graph.nodes, vec![filled("Z", "Z")]);
        let edge = graph.edge("e1").unwrap();
        assert_eq!(edge.label, "e1");
        assert!(edge.source.is_none());
    }

    #[test]
    fn partner_node_keeps_a_label_given_earlier() {
        let document = json!({"@graph": [
            {"@id": "B", "rdfs:label": "Beta"},
            {"@id": "e1", "snap:bond-with": {"@id": "B"}}
        ]});

        let graph = build_graph(&document).unwrap();
        assert_eq!(graph.node("B").unwrap().label, "Beta");
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn several_partners_each_get_a_node_and_the_last_is_the_target() {
        let document = json!({"@graph": [
            {"@id": "e1", "snap:bond-with": [{"@id": "B"}, {"@id": "C"}]}
        ]});

        let graph = build_graph(&document).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge("e1").unwrap().target.as_deref(), Some("C"));
    }

    #[test]
    fn duplicate_plain_nodes_keep_the_first_label() {
        let document = json!({"@graph": [
            {"@id": "A", "rdfs:label": "First"},
            {"@id": "A", "rdfs:label": "Second"}
        ]});

        let graph = build_graph(&document).unwrap();
        assert_eq!(graph.nodes, vec![filled("A", "First")]);
    }

    #[test]
    fn custom_defaults_are_applied() {
        let builder = GraphBuilder::new().with_defaults(NodeDefaults::empty().with("size", 2));
        let graph = builder.build(&json!({"@graph": [{"@id": "A"}]})).unwrap();

        let node = &graph.nodes[0];
        assert_eq!(node.attribute("size"), Some(&json!(2)));
        assert!(node.attribute("x").is_none());
    }

    #[test]
    fn raw_sources_are_kept_on_request() {
        let document = json!({"@graph": [
            {"@id": "A", "snap:has-bond": {"@id": "e1"}},
            {"@id": "e1", "snap:bond-with": {"@id": "B"}}
        ]});

        let graph = GraphBuilder::new().keep_raw_source(true).build(&document).unwrap();
        assert_eq!(graph.node("A").unwrap().raw_source.as_ref(), Some(&document["@graph"][0]));
        assert_eq!(graph.edge("e1").unwrap().raw_source.as_ref(), Some(&document["@graph"][1]));
        assert!(graph.node("B").unwrap().raw_source.is_none());

        let plain = build_graph(&document).unwrap();
        assert!(plain.nodes.iter().all(|n| n.raw_source.is_none()));
        assert!(plain.edges.iter().all(|e| e.raw_source.is_none()));
    }

    #[test]
    fn missing_graph_key_is_a_malformed_document() {
        let err = build_graph(&json!({"nodes": []})).unwrap_err();
        assert!(matches!(err, DocumentError::MalformedDocument(_)));
        assert_eq!(
            err.to_string(),
            "malformed document: missing `@graph` key at the root"
        );

        let err = build_graph(&json!({"@graph": {"@id": "A"}})).unwrap_err();
        assert!(matches!(err, DocumentError::MalformedDocument(_)));
    }

    #[test]
    fn one_bad_element_fails_the_whole_build() {
        let document = json!({"@graph": [
            {"@id": "A"},
            {"rdfs:label": "no id"}
        ]});
        let err = build_graph(&document).unwrap_err();
        assert!(matches!(err, DocumentError::MalformedElement { index: 1, .. }));
    }

    #[test]
    fn empty_graph_builds_an_empty_graph() {
        assert!(build_graph(&json!({"@graph": []})).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_text_is_reported() {
        let err = build_graph_from_str("{\"@graph\": [").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));

        let graph = build_graph_from_str(r#"{"@graph": [{"@id": "A"}]}"#).unwrap();
        assert_eq!(graph.node_count(), 1);
    }
}
