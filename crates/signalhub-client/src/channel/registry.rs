//! Channel registry — lazily materializes and caches channel wrappers.

use std::sync::Arc;

use dashmap::DashMap;

use signalhub_core::config::ConnectorConfig;
use signalhub_core::traits::transport::TransportClient;

use super::handle::ChannelHandle;
use super::presence::SocketIoPresenceChannel;
use super::private::SocketIoPrivateChannel;
use super::socketio::SocketIoChannel;
use super::types::ChannelVariant;

/// Registry of live channel wrappers keyed by fully-qualified name.
///
/// At most one wrapper exists per key; resolving an existing key returns
/// the cached wrapper unchanged. Entries are only ever removed by an
/// explicit leave; there is no bulk reset.
pub struct ChannelRegistry {
    /// Shared connector configuration.
    config: Arc<ConnectorConfig>,
    /// Fully-qualified key → live wrapper handle.
    channels: DashMap<String, ChannelHandle>,
}

impl ChannelRegistry {
    /// Creates an empty registry.
    pub fn new(config: Arc<ConnectorConfig>) -> Self {
        Self {
            config,
            channels: DashMap::new(),
        }
    }

    /// Resolves the wrapper for `(base, variant)`, creating it on first
    /// access.
    ///
    /// The transport handle is captured by the wrapper at creation; later
    /// resolves return the cached wrapper unchanged even if the handle or
    /// options have since changed.
    pub fn resolve(
        &self,
        socket: Option<Arc<dyn TransportClient>>,
        base: &str,
        variant: ChannelVariant,
    ) -> ChannelHandle {
        let key = variant.qualify(&self.config.key_prefix, base);
        self.channels
            .entry(key.clone())
            .or_insert_with(|| {
                tracing::debug!(channel = %key, ?variant, "creating channel wrapper");
                match variant {
                    ChannelVariant::Public => ChannelHandle::Public(Arc::new(
                        SocketIoChannel::new(socket, key.clone(), self.config.clone()),
                    )),
                    ChannelVariant::Private => ChannelHandle::Private(Arc::new(
                        SocketIoPrivateChannel::new(socket, key.clone(), self.config.clone()),
                    )),
                    ChannelVariant::Presence => ChannelHandle::Presence(Arc::new(
                        SocketIoPresenceChannel::new(socket, key.clone(), self.config.clone()),
                    )),
                }
            })
            .clone()
    }

    /// Leaves a channel together with its private and presence variants.
    ///
    /// Callers think in terms of the logical channel name, so a single
    /// leave cleans up every encoding that might be live. Absent variants
    /// are silently skipped.
    pub fn leave(&self, base: &str) {
        for variant in ChannelVariant::ALL {
            self.leave_channel(&variant.qualify(&self.config.key_prefix, base));
        }
    }

    /// Leaves exactly one fully-qualified key; a silent no-op if absent.
    pub fn leave_channel(&self, key: &str) {
        if let Some((_, handle)) = self.channels.remove(key) {
            handle.unsubscribe();
            tracing::debug!(channel = %key, "left channel");
        }
    }

    /// Whether a fully-qualified key is live.
    pub fn contains(&self, key: &str) -> bool {
        self.channels.contains_key(key)
    }

    /// Number of live channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the registry has no live channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
