//! Channel wrappers and the channel registry.

pub mod handle;
pub mod presence;
pub mod private;
pub mod registry;
pub mod socketio;
pub mod types;

use std::sync::Arc;

use serde_json::Value;

/// Callback invoked with the payload of a channel event.
pub type EventCallback = Arc<dyn Fn(&Value) + Send + Sync>;

/// Capability interface every channel wrapper exposes.
///
/// Wrapper variants are dispatched through this trait; callers that need
/// variant-specific operations (whisper, presence events) go through
/// [`ChannelHandle`].
pub trait Channel: Send + Sync {
    /// Fully-qualified channel key.
    fn name(&self) -> &str;

    /// Listen for an event on this channel.
    fn listen(&self, event: &str, callback: EventCallback);

    /// Stop listening for a single event, keeping the subscription alive.
    fn stop_listening(&self, event: &str);

    /// Unbind all listeners and leave the channel on the transport.
    fn unsubscribe(&self);
}

pub use handle::ChannelHandle;
pub use registry::ChannelRegistry;
pub use types::ChannelVariant;
