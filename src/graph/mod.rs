//! Property graph records and the registry that de-duplicates them

mod edge;
mod node;
mod output;
mod registry;


pub use edge::EdgeRecord;
pub use node::{
    fill_node, is_reserved_attribute, Attributes, NodeDefaults, NodeRecord, RESERVED_ATTRIBUTES,
};
pub use output::{Graph, GraphStats};
pub use registry::Registry;
