//! DocumentLoader: obtain a document, build its graph, deliver it
//!
//! Pipeline:
//! 1. Retrieve the text through the injected transport (or take a parsed value)
//! 2. Build the graph
//! 3. Hand it to the sink adapter

use super::error::{AcquireError, AcquireResult};
use super::transport::Transport;
use crate::document::{DocumentError, GraphBuilder};
use crate::graph::Graph;
use crate::sink::{deliver, Callback, Delivery, Destination, GraphSink};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Where a document comes from
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Retrieve through the loader's transport
    Location(String),
    /// Already parsed by the caller
    Parsed(Value),
}

impl From<Value> for DocumentSource {
    fn from(value: Value) -> Self {
        Self::Parsed(value)
    }
}

impl From<&str> for DocumentSource {
    fn from(location: &str) -> Self {
        Self::Location(location.to_string())
    }
}

impl From<String> for DocumentSource {
    fn from(location: String) -> Self {
        Self::Location(location)
    }
}

/// Obtains documents and turns them into delivered graphs.
#[derive(Clone, Default)]
pub struct DocumentLoader {
    transport: Option<Arc<dyn Transport>>,
    builder: GraphBuilder,
}

impl DocumentLoader {
    /// A loader with no transport; only parsed documents can be built
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_builder(mut self, builder: GraphBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Retrieve and parse the document at `location`
    pub async fn fetch(&self, location: &str) -> AcquireResult<Value> {
        let transport = self
            .transport
            .as_ref()
            .filter(|t| t.handles(location))
            .ok_or_else(|| AcquireError::TransportUnavailable(location.to_string()))?;

        debug!(location, "fetching document");
        let text = transport
            .fetch(location)
            .await
            .map_err(|source| AcquireError::Transport {
                location: location.to_string(),
                source,
            })?;

        let document: Value = serde_json::from_str(&text).map_err(DocumentError::from)?;
        Ok(document)
    }

    /// Obtain the document and build its graph
    pub async fn build(&self, source: DocumentSource) -> AcquireResult<Graph> {
        let graph = match source {
            DocumentSource::Location(location) => {
                let document = self.fetch(&location).await?;
                self.builder.build(&document)?
            }
            DocumentSource::Parsed(document) => self.builder.build(&document)?,
        };
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "document converted"
        );
        Ok(graph)
    }

    /// Obtain, build, and deliver in one call
    pub async fn load<S: GraphSink>(
        &self,
        source: DocumentSource,
        destination: Destination<'_, S>,
        callback: Option<Callback<'_, S>>,
    ) -> AcquireResult<Delivery<S>> {
        let graph = self.build(source).await?;
        Ok(deliver(graph, destination, callback))
    }
}

impl std::fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLoader")
            .field("has_transport", &self.transport.is_some())
            .field("builder", &self.builder)
            .finish()
    }
}
