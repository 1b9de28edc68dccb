//! Document acquisition: injected transports and the loader that runs
//! retrieve → build → deliver

mod error;
mod loader;
mod transport;

pub use error::{AcquireError, AcquireResult};
pub use loader::{DocumentLoader, DocumentSource};
pub use transport::{FileTransport, StaticTransport, Transport};
