use serde::{Deserialize, Serialize};

/// Marker size for the local participant.
pub const SELF_MARKER_SIZE: f64 = 0.1;

/// Marker size for everyone else.
pub const PEER_MARKER_SIZE: f64 = 0.05;

/// A point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lat, lng]`, the layout the renderer consumes.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// One participant shown on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    #[serde(with = "pair")]
    pub location: Location,
    pub size: f64,
}

impl Marker {
    pub fn new(id: impl Into<String>, location: Location, is_self: bool) -> Self {
        Self {
            id: id.into(),
            location,
            size: if is_self {
                SELF_MARKER_SIZE
            } else {
                PEER_MARKER_SIZE
            },
        }
    }

    pub fn is_self(&self) -> bool {
        self.size >= SELF_MARKER_SIZE
    }
}

/// Serializes a `Location` as `[lat, lng]`.
mod pair {
    use super::Location;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(loc: &Location, s: S) -> Result<S::Ok, S::Error> {
        loc.as_pair().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Location, D::Error> {
        let [lat, lng] = <[f64; 2]>::deserialize(d)?;
        Ok(Location { lat, lng })
    }
}

/// RGB colour as used by the globe surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb(r, g, b))
            }
            _ => None,
        }
    }
}
