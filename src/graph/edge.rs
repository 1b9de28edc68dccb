//! Edge records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An edge in the property graph.
///
/// Endpoints are plain node ids and may be filled in one at a time as later
/// elements of a document contribute them. Nothing checks that they resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Identifier, unique across the edges of one graph
    pub id: String,
    /// Display label; the id itself until an explicit label arrives
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Relationship type, copied from the element's `@type`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "rawSource", default, skip_serializing_if = "Option::is_none")]
    pub raw_source: Option<Value>,
}

impl EdgeRecord {
    /// Create an edge, falling back to `id` for an absent or empty label
    pub fn new(id: impl Into<String>, label: Option<&str>) -> Self {
        let id = id.into();
        let label = match label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => id.clone(),
        };
        Self {
            id,
            label,
            source: None,
            target: None,
            kind: None,
            raw_source: None,
        }
    }

    /// An edge known only by its id
    pub fn bare(id: impl Into<String>) -> Self {
        Self::new(id, None)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// True while the edge has never been given an explicit label
    pub fn has_bare_label(&self) -> bool {
        self.label == self.id
    }

    /// True when both endpoints are known
    pub fn is_connected(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }
}
