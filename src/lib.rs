//! snap-graph: SNAP ontology JSON-LD to flat property graphs
//!
//! Reads a JSON-LD document written against the SNAP vocabulary and produces
//! a `{nodes, edges}` graph that generic graph renderers can load.
//!
//! # Core Concepts
//!
//! - **Elements**: entries of the document's `@graph`, each classified as a
//!   linked node, a relationship, or a plain node
//! - **Registry**: de-duplicates nodes and edges by id while a document is read
//! - **Sinks**: destinations for the finished graph (an existing sink, a new
//!   one built from configuration, or just a callback)
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use snap_graph::build_graph;
//!
//! let document = json!({"@graph": [
//!     {"@id": "A", "rdfs:label": "Alpha", "snap:has-bond": {"@id": "e1", "rdfs:label": "Link"}},
//!     {"@id": "e1", "snap:bond-with": {"@id": "B"}}
//! ]});
//!
//! let graph = build_graph(&document).unwrap();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edges[0].target.as_deref(), Some("B"));
//! ```

pub mod acquire;
pub mod config;
pub mod document;
mod graph;
pub mod sink;

pub use acquire::{
    AcquireError, AcquireResult, DocumentLoader, DocumentSource, FileTransport, StaticTransport,
    Transport,
};
pub use config::{ConfigError, SnapConfig};
pub use document::{build_graph, build_graph_from_str, DocumentError, DocumentResult, GraphBuilder};
pub use graph::{
    fill_node, is_reserved_attribute, Attributes, EdgeRecord, Graph, GraphStats, NodeDefaults,
    NodeRecord, Registry, RESERVED_ATTRIBUTES,
};
pub use sink::{
    deliver, Callback, Delivered, Delivery, Destination, GraphSink, MemoryGraph, MemoryGraphConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
