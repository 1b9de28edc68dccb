//! GraphSink trait: the capability a graph-bearing destination provides

use crate::graph::Graph;

/// A destination that holds a property graph.
///
/// An existing sink is refreshed with `clear` followed by `read`; a new one is
/// constructed from its configuration with the graph attached.
pub trait GraphSink: Sized {
    /// Configuration a new instance is constructed from
    type Config;

    /// Attach `graph` to `config` and construct a new instance from it
    fn from_config(config: Self::Config, graph: Graph) -> Self;

    /// Drop the current graph state
    fn clear(&mut self);

    /// Load every node and edge of `graph`
    fn read(&mut self, graph: Graph);
}
