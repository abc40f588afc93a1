//! Reconnecting WebSocket client for one presence room.
//!
//! The client only listens: frames are decoded into [`PresenceMessage`]s
//! and forwarded on an mpsc channel together with connection state
//! changes. Malformed frames are logged and dropped.
//!
//! [`PresenceMessage`]: crate::protocol::PresenceMessage

mod client;
mod connection;
mod types;

pub use client::PresenceChannel;
pub use types::{ChannelConfig, ChannelEvent};
