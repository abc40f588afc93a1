//! Presence channel: the wire format of the visitor room and a
//! reconnecting WebSocket client that turns frames into messages.

pub mod channel;
pub mod protocol;

pub use channel::{ChannelConfig, ChannelEvent, PresenceChannel};
pub use protocol::{decode, Position, PresenceMessage};
