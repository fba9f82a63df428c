//! Channel variant definitions and key qualification.

use serde::{Deserialize, Serialize};

/// Access-control variant of a channel, encoded as a tag within the
/// fully-qualified channel key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelVariant {
    /// Openly subscribable channel.
    Public,
    /// Channel requiring server-side authorization to join.
    Private,
    /// Private channel that additionally announces member joins/leaves.
    Presence,
}

impl ChannelVariant {
    /// All variants, in the order a leave fans out over them.
    pub const ALL: [ChannelVariant; 3] = [Self::Public, Self::Private, Self::Presence];

    /// Key tag encoded into the fully-qualified channel key.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Public => "",
            Self::Private => "private-",
            Self::Presence => "presence-",
        }
    }

    /// Computes the fully-qualified channel key for a base name.
    pub fn qualify(&self, prefix: &str, base: &str) -> String {
        format!("{prefix}{}{base}", self.tag())
    }
}
