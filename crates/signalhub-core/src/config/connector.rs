//! Real-time connector configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Real-time connector configuration.
///
/// Shared read-only by the connector facade, the channel registry, and
/// every channel wrapper. Options the library does not recognize are
/// collected into [`extra`](Self::extra) and handed to the transport
/// factory untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Transport endpoint, e.g. `http://localhost:6001`.
    pub host: String,
    /// Namespace prefix prepended to every channel key.
    ///
    /// Lets independent consumers share one transport connection without
    /// key collisions.
    #[serde(default)]
    pub key_prefix: String,
    /// Event namespace prepended to unqualified event names.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Opaque auth payload forwarded in subscribe/unsubscribe frames.
    ///
    /// Authorization itself happens server-side; the connector never
    /// inspects this value.
    #[serde(default)]
    pub auth: Map<String, Value>,
    /// Transport-specific passthrough options.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConnectorConfig {
    /// Create a configuration for the given endpoint with default values
    /// for everything else.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            key_prefix: String::new(),
            namespace: None,
            auth: Map::new(),
            extra: Map::new(),
        }
    }
}
