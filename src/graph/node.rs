//! Node records and the rendering attribute defaults they are filled with

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Rendering attributes carried by a node (`x`, `y`, `size`, ...)
pub type Attributes = Map<String, Value>;

/// Keys a node object already uses for its own fields. Attributes are
/// flattened beside them, so none of these may be an attribute key.
pub const RESERVED_ATTRIBUTES: [&str; 3] = ["id", "label", "rawSource"];

/// Whether `key` collides with a node field once attributes are flattened
pub fn is_reserved_attribute(key: &str) -> bool {
    RESERVED_ATTRIBUTES.contains(&key)
}

/// A node in the property graph
///
/// Attributes are flattened into the node object on serialization, so a
/// finalized node reads `{"id": "A", "label": "Alpha", "size": 10, "x": 1, "y": 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Identifier, unique across the nodes of one graph
    pub id: String,
    /// Display label; the id itself when the source gave none
    pub label: String,
    /// Rendering attributes
    #[serde(flatten)]
    pub attributes: Attributes,
    /// The source element this node was materialized from, when retained
    #[serde(rename = "rawSource", default, skip_serializing_if = "Option::is_none")]
    pub raw_source: Option<Value>,
}

impl NodeRecord {
    /// Create a node, falling back to `id` for an absent or empty label
    pub fn new(id: impl Into<String>, label: Option<&str>) -> Self {
        let id = id.into();
        let label = match label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => id.clone(),
        };
        Self {
            id,
            label,
            attributes: Attributes::new(),
            raw_source: None,
        }
    }

    /// Set an attribute, replacing any previous value. Reserved keys are ignored.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if is_reserved_attribute(&key) {
            warn!(id = %self.id, key = %key, "ignoring reserved node attribute");
            return self;
        }
        self.attributes.insert(key, value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// The minimum attribute set a renderer needs on every node.
///
/// Applied once per node when a build is finalized. Only absent keys are
/// filled; a present value (zero and `""` included) is never replaced.
/// The table never holds a key from [`RESERVED_ATTRIBUTES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeDefaults(Attributes);

impl NodeDefaults {
    /// Default table with no entries
    pub fn empty() -> Self {
        Self(Attributes::new())
    }

    /// Add or replace one default. Reserved keys are ignored.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if is_reserved_attribute(&key) {
            warn!(key = %key, "ignoring reserved default attribute");
            return self;
        }
        self.0.insert(key, value.into());
        self
    }

    /// Layer `overrides` on top of this table, skipping reserved keys
    pub fn merged(self, overrides: &Attributes) -> Self {
        overrides
            .iter()
            .fold(self, |defaults, (key, value)| defaults.with(key.clone(), value.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill the node's missing attributes from this table
    pub fn fill(&self, mut node: NodeRecord) -> NodeRecord {
        for (key, value) in &self.0 {
            if !node.attributes.contains_key(key) && !is_reserved_attribute(key) {
                node.attributes.insert(key.clone(), value.clone());
            }
        }
        node
    }
}

impl Default for NodeDefaults {
    /// `{x: 1, y: 1, size: 10}`
    fn default() -> Self {
        Self::empty().with("x", 1).with("y", 1).with("size", 10)
    }
}

/// Fill a node with the built-in defaults
pub fn fill_node(node: NodeRecord) -> NodeRecord {
    NodeDefaults::default().fill(node)
}
