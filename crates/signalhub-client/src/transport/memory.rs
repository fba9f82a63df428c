//! In-process transport for tests and single-process loopback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

use signalhub_core::config::ConnectorConfig;
use signalhub_core::result::HubResult;
use signalhub_core::traits::transport::{
    ListenerId, TransportClient, TransportFactory, TransportHandler,
};

/// A single outbound frame, recorded for inspection.
#[derive(Debug, Clone)]
pub struct EmittedFrame {
    /// Event name.
    pub event: String,
    /// Frame payload.
    pub payload: Value,
}

/// In-process transport connection.
///
/// Dispatches inbound frames to bound listeners synchronously and records
/// every outbound emit. Serves as the test double for the connector and
/// as the reference for custom [`TransportClient`] implementations.
pub struct MemoryTransport {
    /// Connection identifier.
    id: String,
    /// When the connection was established.
    connected_at: DateTime<Utc>,
    /// Event name → bound listeners.
    listeners: DashMap<String, Vec<(ListenerId, TransportHandler)>>,
    /// Recorded outbound frames.
    emitted: Mutex<Vec<EmittedFrame>>,
    /// Next listener registration id.
    next_listener: AtomicU64,
    /// Whether the connection is still up.
    connected: AtomicBool,
}

impl MemoryTransport {
    /// Creates a fresh, already-established connection.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            connected_at: Utc::now(),
            listeners: DashMap::new(),
            emitted: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(1),
            connected: AtomicBool::new(true),
        }
    }

    /// When the connection was established.
    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Whether the connection is still up.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Simulates an inbound frame for `channel`, invoking every listener
    /// bound for `event`.
    pub fn dispatch(&self, event: &str, channel: &str, payload: &Value) {
        let handlers: Vec<TransportHandler> = self
            .listeners
            .get(event)
            .map(|entry| entry.iter().map(|(_, handler)| handler.clone()).collect())
            .unwrap_or_default();
        for handler in handlers {
            handler(channel, payload);
        }
    }

    /// Snapshot of all recorded outbound frames.
    pub fn emitted(&self) -> Vec<EmittedFrame> {
        self.emitted.lock().clone()
    }

    /// Number of recorded outbound frames for one event name.
    pub fn emit_count(&self, event: &str) -> usize {
        self.emitted
            .lock()
            .iter()
            .filter(|frame| frame.event == event)
            .count()
    }

    /// Number of listener registrations currently bound for an event.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .get(event)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTransport")
            .field("id", &self.id)
            .field("connected_at", &self.connected_at)
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

impl TransportClient for MemoryTransport {
    fn id(&self) -> Option<String> {
        self.is_connected().then(|| self.id.clone())
    }

    fn emit(&self, event: &str, payload: Value) {
        self.emitted.lock().push(EmittedFrame {
            event: event.to_string(),
            payload,
        });
    }

    fn on(&self, event: &str, handler: TransportHandler) -> ListenerId {
        let listener = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .entry(event.to_string())
            .or_default()
            .push((listener, handler));
        listener
    }

    fn off(&self, event: &str, listener: ListenerId) {
        if let Some(mut handlers) = self.listeners.get_mut(event) {
            handlers.retain(|(id, _)| *id != listener);
        }
    }

    fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
        tracing::debug!(id = %self.id, "memory transport disconnected");
    }
}

/// Factory handing out fresh in-process transports.
///
/// Keeps a handle to every connection it opened so tests can reach the
/// transport behind a connector.
#[derive(Default)]
pub struct MemoryTransportFactory {
    connections: Mutex<Vec<Arc<MemoryTransport>>>,
}

impl MemoryTransportFactory {
    /// Creates a factory with no open connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently opened connection, if any.
    pub fn last_connection(&self) -> Option<Arc<MemoryTransport>> {
        self.connections.lock().last().cloned()
    }

    /// Number of connections opened so far.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }
}

impl TransportFactory for MemoryTransportFactory {
    fn connect(
        &self,
        host: &str,
        _config: &ConnectorConfig,
    ) -> HubResult<Arc<dyn TransportClient>> {
        let transport = Arc::new(MemoryTransport::new());
        tracing::debug!(host, id = %transport.id, "memory transport connected");
        self.connections.lock().push(transport.clone());
        Ok(transport)
    }
}
