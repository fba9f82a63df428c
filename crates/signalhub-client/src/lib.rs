//! # signalhub-client
//!
//! Real-time connector client for Signalhub. Provides:
//!
//! - A generic [`Connector`] interface and its Socket.io-style binding
//! - A lazily-materializing channel registry with key namespacing
//! - Public, private, and presence channel wrappers
//! - An in-process memory transport for tests and loopback wiring

pub mod channel;
pub mod connector;
pub mod event;
pub mod transport;

pub use channel::{Channel, ChannelHandle, ChannelRegistry, ChannelVariant, EventCallback};
pub use connector::{Connector, SocketIoConnector};
pub use event::formatter::EventFormatter;
pub use transport::memory::{MemoryTransport, MemoryTransportFactory};
