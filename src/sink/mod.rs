//! Sink adapter: delivers a finished graph to an existing sink, a new sink,
//! or a callback

mod deliver;
mod memory;
mod traits;

pub use deliver::{deliver, Callback, Delivered, Delivery, Destination};
pub use memory::{MemoryGraph, MemoryGraphConfig};
pub use traits::GraphSink;
