//! Presence channel configuration.

use serde::{Deserialize, Serialize};

/// Where and how the client subscribes to the presence room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    pub enabled: bool,
    /// Host (and optional port) of the relay, without scheme.
    pub host: String,
    pub party: String,
    pub room: String,
    /// Use `wss://` instead of `ws://`.
    pub secure: bool,
    pub reconnect_delay_secs: u64,
    pub max_reconnect_delay_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "localhost:1999".into(),
            party: "main".into(),
            room: "globe".into(),
            secure: false,
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}
