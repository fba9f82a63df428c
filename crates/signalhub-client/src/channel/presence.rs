//! Presence channel wrapper.

use std::sync::Arc;

use serde_json::Value;

use signalhub_core::config::ConnectorConfig;
use signalhub_core::traits::transport::TransportClient;

use super::private::SocketIoPrivateChannel;
use super::{Channel, EventCallback};

/// A presence channel.
///
/// Behaves like a private channel and additionally surfaces the
/// transport's member announcements. Payloads are forwarded verbatim;
/// member bookkeeping is the caller's concern.
pub struct SocketIoPresenceChannel {
    inner: SocketIoPrivateChannel,
}

impl SocketIoPresenceChannel {
    /// Creates the wrapper and subscribes on the transport.
    pub fn new(
        socket: Option<Arc<dyn TransportClient>>,
        name: String,
        config: Arc<ConnectorConfig>,
    ) -> Self {
        Self {
            inner: SocketIoPrivateChannel::new(socket, name, config),
        }
    }

    /// Invokes the callback with the member snapshot sent on join.
    pub fn here(&self, callback: EventCallback) -> &Self {
        self.inner.bind("presence:subscribed", callback);
        self
    }

    /// Invokes the callback whenever a member joins the channel.
    pub fn joining(&self, callback: EventCallback) -> &Self {
        self.inner.bind("presence:joining", callback);
        self
    }

    /// Invokes the callback whenever a member leaves the channel.
    pub fn leaving(&self, callback: EventCallback) -> &Self {
        self.inner.bind("presence:leaving", callback);
        self
    }

    /// Sends a client event to the other subscribers of this channel.
    pub fn whisper(&self, event: &str, data: Value) {
        self.inner.whisper(event, data);
    }
}

impl Channel for SocketIoPresenceChannel {
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
