//! Socket.io-style connector.

use std::sync::Arc;

use parking_lot::RwLock;

use signalhub_core::config::ConnectorConfig;
use signalhub_core::error::HubError;
use signalhub_core::result::HubResult;
use signalhub_core::traits::transport::{TransportClient, TransportFactory};

use crate::channel::registry::ChannelRegistry;
use crate::channel::types::ChannelVariant;
use crate::channel::{ChannelHandle, EventCallback};

use super::Connector;

/// Binds the generic [`Connector`] interface to an injected Socket.io-style
/// transport client.
///
/// Holds no state beyond the transport handle and the channel registry.
/// The transport factory must be injected explicitly; there is no ambient
/// fallback.
pub struct SocketIoConnector {
    /// Shared connector configuration.
    config: Arc<ConnectorConfig>,
    /// Injected transport factory; `connect` fails without one.
    factory: Option<Arc<dyn TransportFactory>>,
    /// Live transport handle, set by `connect`.
    socket: RwLock<Option<Arc<dyn TransportClient>>>,
    /// Registry of subscribed channels.
    channels: ChannelRegistry,
}

impl SocketIoConnector {
    /// Creates a connector without a transport factory.
    ///
    /// `connect` fails with a configuration error until a factory is
    /// provided; use [`with_client`](Self::with_client) to inject one.
    pub fn new(config: ConnectorConfig) -> Self {
        let config = Arc::new(config);
        Self {
            factory: None,
            socket: RwLock::new(None),
            channels: ChannelRegistry::new(config.clone()),
            config,
        }
    }

    /// Creates a connector with an injected transport factory.
    pub fn with_client(config: ConnectorConfig, factory: Arc<dyn TransportFactory>) -> Self {
        let mut connector = Self::new(config);
        connector.factory = Some(factory);
        connector
    }

    /// Current transport handle, if connected.
    pub fn socket(&self) -> Option<Arc<dyn TransportClient>> {
        self.socket.read().clone()
    }

    /// The channel registry backing this connector.
    pub fn channels(&self) -> &ChannelRegistry {
        &self.channels
    }

    /// Shared configuration.
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    fn resolve(&self, name: &str, variant: ChannelVariant) -> ChannelHandle {
        self.channels.resolve(self.socket(), name, variant)
    }
}

impl Connector for SocketIoConnector {
    fn connect(&self) -> HubResult<Arc<dyn TransportClient>> {
        let factory = self.factory.clone().ok_or_else(|| {
            HubError::configuration(
                "transport client factory not configured; inject one with SocketIoConnector::with_client",
            )
        })?;
        let socket = factory.connect(&self.config.host, &self.config)?;
        tracing::debug!(host = %self.config.host, "transport connected");
        *self.socket.write() = Some(socket.clone());
        Ok(socket)
    }

    fn listen(&self, name: &str, event: &str, callback: EventCallback) -> ChannelHandle {
        let channel = self.channel(name);
        channel.listen(event, callback);
        channel
    }

    fn channel(&self, name: &str) -> ChannelHandle {
        self.resolve(name, ChannelVariant::Public)
    }

    fn private_channel(&self, name: &str) -> ChannelHandle {
        self.resolve(name, ChannelVariant::Private)
    }

    fn presence_channel(&self, name: &str) -> ChannelHandle {
        self.resolve(name, ChannelVariant::Presence)
    }

    fn leave(&self, name: &str) {
        self.channels.leave(name);
    }

    fn leave_channel(&self, name: &str) {
        self.channels.leave_channel(name);
    }

    fn socket_id(&self) -> Option<String> {
        self.socket.read().as_ref().and_then(|socket| socket.id())
    }

    fn disconnect(&self) {
        if let Some(socket) = self.socket.read().as_ref() {
            socket.disconnect();
        }
    }
}
