//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// A small prosopography: two people, a friendship, a kinship, and places
pub fn prosopography() -> Value {
    json!({
        "@context": {
            "snap": "http://data.snapdrgn.net/ontology/snap#",
            "rdfs": "http://www.w3.org/2000/01/rdf-schema#"
        },
        "@graph": [
            {
                "@id": "person:cicero",
                "@type": "snap:Person",
                "rdfs:label": "Marcus Tullius Cicero",
                "snap:has-bond": [
                    {"@id": "bond:friend-1", "rdfs:label": "friend of Atticus"},
                    {"@id": "bond:kin-1", "rdfs:label": "brother of Quintus"}
                ],
                "snap:associated-place": {"@id": "place:arpinum", "rdfs:label": "Arpinum"}
            },
            {
                "@id": "bond:friend-1",
                "@type": "snap:FriendshipFor",
                "snap:bond-with": {"@id": "person:atticus"}
            },
            {
                "@id": "bond:kin-1",
                "@type": ["snap:SiblingOf", "snap:KinOf"],
                "snap:bond-with": {"@id": "person:quintus"}
            },
            {
                "@id": "person:atticus",
                "@type": "snap:Person",
                "rdfs:label": "Titus Pomponius Atticus",
                "snap:associatedPlace": [{"@id": "place:rome"}]
            },
            {
                "@id": "place:arpinum",
                "rdfs:label": "Arpinum"
            }
        ]
    })
}

/// Write `document` to a temporary file
pub fn document_file(document: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", document).expect("write document");
    file
}

pub fn node_ids(graph: &snap_graph::Graph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.id.as_str()).collect()
}

pub fn edge_ids(graph: &snap_graph::Graph) -> Vec<&str> {
    graph.edges.iter().map(|e| e.id.as_str()).collect()
}
