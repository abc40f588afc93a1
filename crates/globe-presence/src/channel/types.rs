//! Configuration and event/command enums for the presence channel.

use globe_common::{ConnectionId, PresenceError};

use crate::protocol::PresenceMessage;

/// Configuration for connecting to a presence room.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Host and optional port, no scheme.
    pub host: String,
    pub party: String,
    pub room: String,
    /// `wss://` when true.
    pub secure: bool,
    /// Our own id; the room reports our marker under it.
    pub connection_id: ConnectionId,
    pub reconnect_delay_secs: u64,
    pub max_reconnect_delay_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            host: "localhost:1999".into(),
            party: "main".into(),
            room: "globe".into(),
            secure: false,
            connection_id: ConnectionId::new(),
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}

impl ChannelConfig {
    /// `{scheme}://{host}/parties/{party}/{room}?_pk={connection_id}`
    pub fn ws_url(&self) -> Result<String, PresenceError> {
        if self.host.is_empty() || self.host.contains('/') || self.host.contains("://") {
            return Err(PresenceError::InvalidUrl(format!("bad host '{}'", self.host)));
        }
        for (name, segment) in [("party", &self.party), ("room", &self.room)] {
            if !is_path_safe(segment) {
                return Err(PresenceError::InvalidUrl(format!(
                    "{name} '{segment}' must be non-empty and use only [A-Za-z0-9._-]"
                )));
            }
        }
        if !is_path_safe(self.connection_id.as_str()) {
            return Err(PresenceError::InvalidUrl(format!(
                "connection id '{}' is not url safe",
                self.connection_id
            )));
        }

        let scheme = if self.secure { "wss" } else { "ws" };
        Ok(format!(
            "{scheme}://{}/parties/{}/{}?_pk={}",
            self.host, self.party, self.room, self.connection_id
        ))
    }
}

fn is_path_safe(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Events from the background connection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    Connected,
    Message(PresenceMessage),
    Disconnected,
    Error(String),
}

/// Commands to the background connection.
#[derive(Debug)]
pub(crate) enum ChannelCommand {
    Close,
}
