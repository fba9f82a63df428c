//! Transport implementations.
//!
//! Real deployments inject their own [`TransportFactory`] wrapping an
//! actual Socket.io-style client; the in-process memory transport here
//! covers tests and single-process loopback wiring.
//!
//! [`TransportFactory`]: signalhub_core::traits::transport::TransportFactory

pub mod memory;

pub use memory::{MemoryTransport, MemoryTransportFactory};
