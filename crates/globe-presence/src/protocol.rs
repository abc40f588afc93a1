//! Presence room wire protocol.
//!
//! Every frame is a JSON object tagged by `type`. `add-marker` carries a
//! `position`; any other tag is a removal and carries the `id` to drop.

use globe_common::DecodeError;
use serde::{Deserialize, Serialize};

pub mod events {
    pub const ADD_MARKER: &str = "add-marker";
    pub const REMOVE_MARKER: &str = "remove-marker";
}

/// Where a participant is, as announced by the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

/// A decoded presence frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PresenceMessage {
    AddMarker { position: Position },
    RemoveMarker { id: String },
}

impl PresenceMessage {
    pub fn add(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::AddMarker {
            position: Position {
                id: id.into(),
                lat,
                lng,
            },
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::RemoveMarker { id: id.into() }
    }

    /// Participant this message is about.
    pub fn id(&self) -> &str {
        match self {
            Self::AddMarker { position } => &position.id,
            Self::RemoveMarker { id } => id,
        }
    }

    /// JSON text frame for this message.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Loose shape used for decoding so that unknown tags still parse.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    position: Option<Position>,
    #[serde(default)]
    id: Option<String>,
}

/// Decode one text frame.
pub fn decode(text: &str) -> Result<PresenceMessage, DecodeError> {
    let raw: RawMessage = serde_json::from_str(text)?;

    if raw.kind == events::ADD_MARKER {
        let position = raw.position.ok_or(DecodeError::MissingField {
            kind: raw.kind,
            field: "position",
        })?;
        return Ok(PresenceMessage::AddMarker { position });
    }

    match raw.id {
        Some(id) => Ok(PresenceMessage::RemoveMarker { id }),
        None => Err(DecodeError::MissingField {
            kind: raw.kind,
            field: "id",
        }),
    }
}
