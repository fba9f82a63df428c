//! Public channel wrapper over a Socket.io-style transport.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Value, json};

use signalhub_core::config::ConnectorConfig;
use signalhub_core::traits::transport::{ListenerId, TransportClient};

use crate::event::formatter::EventFormatter;

use super::{Channel, EventCallback};

/// A public channel bound to a transport connection.
///
/// Emits the `subscribe` frame on construction and tracks its own
/// transport listener registrations so [`unsubscribe`](Channel::unsubscribe)
/// unbinds exactly what this wrapper bound.
///
/// The transport handle is captured at creation and never swapped. A
/// wrapper resolved before the connector connected carries no handle: its
/// operations log a warning and no-op.
pub struct SocketIoChannel {
    /// Transport handle captured at creation.
    socket: Option<Arc<dyn TransportClient>>,
    /// Fully-qualified channel key.
    name: String,
    /// Shared connector configuration.
    config: Arc<ConnectorConfig>,
    /// Event name formatter.
    formatter: EventFormatter,
    /// Event name → listener registration bound on the transport.
    bindings: Mutex<Vec<(String, ListenerId)>>,
}

impl SocketIoChannel {
    /// Creates the wrapper and subscribes on the transport.
    pub fn new(
        socket: Option<Arc<dyn TransportClient>>,
        name: String,
        config: Arc<ConnectorConfig>,
    ) -> Self {
        let channel = Self {
            formatter: EventFormatter::new(config.namespace.clone()),
            socket,
            name,
            config,
            bindings: Mutex::new(Vec::new()),
        };
        channel.subscribe();
        channel
    }

    /// Transport handle this wrapper was bound to, if any.
    pub(crate) fn socket(&self) -> Option<&Arc<dyn TransportClient>> {
        self.socket.as_ref()
    }

    /// Emits the subscribe frame for this channel.
    fn subscribe(&self) {
        let Some(socket) = &self.socket else {
            tracing::warn!(channel = %self.name, "subscribe skipped: connector not connected");
            return;
        };
        socket.emit(
            "subscribe",
            json!({ "channel": self.name, "auth": self.config.auth }),
        );
        tracing::debug!(channel = %self.name, "subscribed");
    }

    /// Binds a raw (unformatted) transport event, filtered to this channel.
    pub(crate) fn bind(&self, event: &str, callback: EventCallback) {
        let Some(socket) = &self.socket else {
            tracing::warn!(channel = %self.name, event, "listen skipped: connector not connected");
            return;
        };
        let name = self.name.clone();
        let listener = socket.on(
            event,
            Arc::new(move |channel: &str, payload: &Value| {
                if channel == name {
                    callback(payload);
                }
            }),
        );
        self.bindings.lock().push((event.to_string(), listener));
    }

    /// Removes bindings for one event, or all of them when `event` is
    /// `None`.
    fn unbind(&self, event: Option<&str>) {
        let Some(socket) = &self.socket else {
            return;
        };
        let mut bindings = self.bindings.lock();
        bindings.retain(|(bound, listener)| {
            if event.map_or(true, |e| e == bound) {
                socket.off(bound, *listener);
                false
            } else {
                true
            }
        });
    }
}

impl Channel for SocketIoChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn listen(&self, event: &str, callback: EventCallback) {
        let formatted = self.formatter.format(event);
        self.bind(&formatted, callback);
    }

    fn stop_listening(&self, event: &str) {
        let formatted = self.formatter.format(event);
        self.unbind(Some(&formatted));
    }

    fn unsubscribe(&self) {
        self.unbind(None);
        let Some(socket) = &self.socket else {
            return;
        };
        socket.emit(
            "unsubscribe",
            json!({ "channel": self.name, "auth": self.config.auth }),
        );
        tracing::debug!(channel = %self.name, "unsubscribed");
    }
}
