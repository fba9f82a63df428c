//! Transport capability traits.
//!
//! The connector treats the real-time transport as an opaque collaborator
//! behind these object-safe traits. Implementations wrap an actual
//! Socket.io-style client; the library never speaks the wire protocol
//! itself, and connection recovery is the transport's own concern.

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::Value;

use crate::config::ConnectorConfig;
use crate::result::HubResult;

/// Identifier for a single event listener registration.
pub type ListenerId = u64;

/// Callback invoked with `(channel, payload)` for every frame the
/// transport receives for a bound event.
pub type TransportHandler = Arc<dyn Fn(&str, &Value) + Send + Sync>;

/// A live transport connection.
pub trait TransportClient: Send + Sync + Debug {
    /// Connection identifier, valid only once the connection establishes.
    fn id(&self) -> Option<String>;

    /// Emit an event frame to the server.
    fn emit(&self, event: &str, payload: Value);

    /// Bind a listener for an inbound event, returning its registration id.
    fn on(&self, event: &str, handler: TransportHandler) -> ListenerId;

    /// Remove a single listener registration for an event.
    fn off(&self, event: &str, listener: ListenerId);

    /// Tear down the connection.
    fn disconnect(&self);
}

/// Factory producing transport connections from a host and options.
pub trait TransportFactory: Send + Sync {
    /// Open a connection to `host`.
    ///
    /// The full connector configuration is passed through so transport
    /// implementations can honor their own options from
    /// [`ConnectorConfig::extra`].
    fn connect(&self, host: &str, config: &ConnectorConfig)
    -> HubResult<Arc<dyn TransportClient>>;
}
