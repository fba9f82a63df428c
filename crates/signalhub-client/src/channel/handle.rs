//! Variant-tagged handle to a live channel wrapper.

use std::sync::Arc;

use super::presence::SocketIoPresenceChannel;
use super::private::SocketIoPrivateChannel;
use super::socketio::SocketIoChannel;
use super::types::ChannelVariant;
use super::{Channel, EventCallback};

/// A cloneable, variant-tagged handle to a channel wrapper.
///
/// Clones share the same underlying wrapper; the registry guarantees at
/// most one wrapper per fully-qualified key.
#[derive(Clone)]
pub enum ChannelHandle {
    /// Public channel.
    Public(Arc<SocketIoChannel>),
    /// Private channel.
    Private(Arc<SocketIoPrivateChannel>),
    /// Presence channel.
    Presence(Arc<SocketIoPresenceChannel>),
}

impl ChannelHandle {
    /// The wrapper as the capability interface.
    pub fn as_channel(&self) -> &dyn Channel {
        match self {
            Self::Public(channel) => channel.as_ref(),
            Self::Private(channel) => channel.as_ref(),
            Self::Presence(channel) => channel.as_ref(),
        }
    }

    /// Variant tag of this handle.
    pub fn variant(&self) -> ChannelVariant {
        match self {
            Self::Public(_) => ChannelVariant::Public,
            Self::Private(_) => ChannelVariant::Private,
            Self::Presence(_) => ChannelVariant::Presence,
        }
    }

    /// Fully-qualified channel key.
    pub fn name(&self) -> &str {
        self.as_channel().name()
    }

    /// Listen for an event on the underlying channel.
    pub fn listen(&self, event: &str, callback: EventCallback) -> &Self {
        self.as_channel().listen(event, callback);
        self
    }

    /// Stop listening for a single event, keeping the subscription alive.
    pub fn stop_listening(&self, event: &str) -> &Self {
        self.as_channel().stop_listening(event);
        self
    }

    /// Unbind all listeners and leave the channel on the transport.
    pub fn unsubscribe(&self) {
        self.as_channel().unsubscribe();
    }

    /// The private wrapper behind this handle, if it is one.
    pub fn as_private(&self) -> Option<Arc<SocketIoPrivateChannel>> {
        match self {
            Self::Private(channel) => Some(channel.clone()),
            _ => None,
        }
    }

    /// The presence wrapper behind this handle, if it is one.
    pub fn as_presence(&self) -> Option<Arc<SocketIoPresenceChannel>> {
        match self {
            Self::Presence(channel) => Some(channel.clone()),
            _ => None,
        }
    }

    /// Whether two handles point at the same underlying wrapper.
    pub fn ptr_eq(&self, other: &ChannelHandle) -> bool {
        match (self, other) {
            (Self::Public(a), Self::Public(b)) => Arc::ptr_eq(a, b),
            (Self::Private(a), Self::Private(b)) => Arc::ptr_eq(a, b),
            (Self::Presence(a), Self::Presence(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
