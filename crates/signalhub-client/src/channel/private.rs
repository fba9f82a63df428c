//! Private channel wrapper.

use std::sync::Arc;

use serde_json::{Value, json};

use signalhub_core::config::ConnectorConfig;
use signalhub_core::traits::transport::TransportClient;

use super::socketio::SocketIoChannel;
use super::{Channel, EventCallback};

/// A private channel.
///
/// Subscription is authorized server-side using the configured auth
/// payload; this wrapper only forwards it. On top of the public channel
/// behavior it supports client-to-client whispers.
pub struct SocketIoPrivateChannel {
    inner: SocketIoChannel,
}

impl SocketIoPrivateChannel {
    /// Creates the wrapper and subscribes on the transport.
    pub fn new(
        socket: Option<Arc<dyn TransportClient>>,
        name: String,
        config: Arc<ConnectorConfig>,
    ) -> Self {
        Self {
            inner: SocketIoChannel::new(socket, name, config),
        }
    }

    /// Sends a client event to the other subscribers of this channel.
    ///
    /// The event name is prefixed with `client-` so the server relays it
    /// without treating it as a broadcast of its own.
    pub fn whisper(&self, event: &str, data: Value) {
        let Some(socket) = self.inner.socket() else {
            tracing::warn!(channel = %self.inner.name(), event, "whisper skipped: connector not connected");
            return;
        };
        socket.emit(
            "client event",
            json!({
                "channel": self.inner.name(),
                "event": format!("client-{event}"),
                "data": data,
            }),
        );
    }

    /// Binds a raw (unformatted) transport event, filtered to this channel.
    pub(crate) fn bind(&self, event: &str, callback: EventCallback) {
        self.inner.bind(event, callback);
    }
}

impl Channel for SocketIoPrivateChannel {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn listen(&self, event: &str, callback: EventCallback) {
        self.inner.listen(event, callback);
    }

    fn stop_listening(&self, event: &str) {
        self.inner.stop_listening(event);
    }

    fn unsubscribe(&self) {
        self.inner.unsubscribe();
    }
}
