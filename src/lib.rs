//! # signalhub
//!
//! Umbrella crate for the Signalhub real-time connector client.
//!
//! Signalhub binds a generic real-time connector interface to an injected
//! Socket.io-style transport client and maintains a namespaced registry of
//! channel wrappers (public, private, presence). The transport wire
//! protocol itself stays behind the [`TransportClient`] /
//! [`TransportFactory`] traits; this library only performs option
//! pass-through, channel-key namespacing, and delegation.

pub use signalhub_client::{
    Channel, ChannelHandle, ChannelRegistry, ChannelVariant, Connector, EventCallback,
    EventFormatter, MemoryTransport, MemoryTransportFactory, SocketIoConnector,
};
pub use signalhub_core::traits::transport::{
    ListenerId, TransportClient, TransportFactory, TransportHandler,
};
pub use signalhub_core::{ConnectorConfig, ErrorKind, HubError, HubResult};
