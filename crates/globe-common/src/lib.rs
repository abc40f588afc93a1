pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DecodeError, GlobeError, PresenceError, RendererError};
pub use id::{new_id, ConnectionId};
pub use types::{Color, Location, Marker, PEER_MARKER_SIZE, SELF_MARKER_SIZE};

pub type Result<T> = std::result::Result<T, GlobeError>;
