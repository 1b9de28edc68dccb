//! SNAP JSON-LD documents: vocabulary, element classification and the graph builder

mod builder;
mod element;
mod error;
pub mod vocab;

pub use builder::{build_graph, build_graph_from_str, GraphBuilder};
pub use element::{Element, Reference, Role};
pub use error::{DocumentError, DocumentResult};
