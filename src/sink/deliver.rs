//! Delivery of a finished graph to its destination
//!
//! Exactly one of three things happens to the graph: it replaces the state of
//! an existing sink, it seeds a newly constructed sink, or no sink takes it.
//! The callback, when present, runs last and sees the sink if there is one,
//! otherwise the bare graph.

use super::traits::GraphSink;
use crate::graph::Graph;
use tracing::debug;

/// Where a graph goes
pub enum Destination<'a, S: GraphSink> {
    /// Replace the graph held by this sink
    Existing(&'a mut S),
    /// Construct a new sink from this configuration
    Config(S::Config),
    /// No sink; only the callback (if any) sees the graph
    None,
}

/// What a delivery callback is handed
#[derive(Debug)]
pub enum Delivered<'a, S> {
    Sink(&'a S),
    Graph(&'a Graph),
}

/// Callback run after delivery
pub type Callback<'a, S> = Box<dyn FnOnce(Delivered<'_, S>) + 'a>;

/// Outcome of a delivery
#[derive(Debug)]
pub enum Delivery<S> {
    /// The existing sink now holds the graph
    Updated,
    /// A new sink was constructed around the graph
    Created(S),
    /// No sink took the graph; it is handed back
    Detached(Graph),
}

impl<S> Delivery<S> {
    pub fn into_sink(self) -> Option<S> {
        match self {
            Self::Created(sink) => Some(sink),
            _ => None,
        }
    }

    pub fn into_graph(self) -> Option<Graph> {
        match self {
            Self::Detached(graph) => Some(graph),
            _ => None,
        }
    }
}

/// Hand `graph` to `destination`, then run `callback`
pub fn deliver<S: GraphSink>(
    graph: Graph,
    destination: Destination<'_, S>,
    callback: Option<Callback<'_, S>>,
) -> Delivery<S> {
    match destination {
        Destination::Existing(sink) => {
            debug!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "replacing sink graph"
            );
            sink.clear();
            sink.read(graph);
            if let Some(callback) = callback {
                callback(Delivered::Sink(&*sink));
            }
            Delivery::Updated
        }
        Destination::Config(config) => {
            debug!(nodes = graph.node_count(), edges = graph.edge_count(), "constructing sink");
            let sink = S::from_config(config, graph);
            if let Some(callback) = callback {
                callback(Delivered::Sink(&sink));
            }
            Delivery::Created(sink)
        }
        Destination::None => {
            debug!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "no sink, graph detached"
            );
            if let Some(callback) = callback {
                callback(Delivered::Graph(&graph));
            }
            Delivery::Detached(graph)
        }
    }
}
