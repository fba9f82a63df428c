//! Connector facade over an injected transport client.

pub mod socketio;

use std::sync::Arc;

use signalhub_core::result::HubResult;
use signalhub_core::traits::transport::TransportClient;

use crate::channel::{ChannelHandle, EventCallback};

/// Generic real-time connector interface.
///
/// A connector owns one transport connection and a registry of channel
/// wrappers keyed by fully-qualified name. All operations are synchronous
/// and non-blocking; the transport's own event machinery delivers frames.
pub trait Connector: Send + Sync {
    /// Establish the transport connection.
    fn connect(&self) -> HubResult<Arc<dyn TransportClient>>;

    /// Listen for an event on a channel, subscribing on first use.
    fn listen(&self, name: &str, event: &str, callback: EventCallback) -> ChannelHandle;

    /// Get a public channel by name.
    fn channel(&self, name: &str) -> ChannelHandle;

    /// Get a private channel by name.
    fn private_channel(&self, name: &str) -> ChannelHandle;

    /// Get a presence channel by name.
    fn presence_channel(&self, name: &str) -> ChannelHandle;

    /// Leave a channel together with its private and presence variants.
    fn leave(&self, name: &str);

    /// Leave exactly one fully-qualified channel key.
    fn leave_channel(&self, name: &str);

    /// Connection identifier of the live transport, if established.
    fn socket_id(&self) -> Option<String>;

    /// Tear down the transport connection.
    fn disconnect(&self);
}

pub use socketio::SocketIoConnector;
