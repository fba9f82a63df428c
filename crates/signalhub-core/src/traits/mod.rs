//! Capability traits shared across the workspace.

pub mod transport;

pub use transport::{ListenerId, TransportClient, TransportFactory, TransportHandler};
