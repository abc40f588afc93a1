//! Parsing of the upgrade request: which room, which connection id and,
//! when the edge provides it, where the visitor is.

use globe_common::{new_id, Location};
use tokio_tungstenite::tungstenite::http::HeaderMap;

/// Latitude/longitude header pairs, in order of preference.
const LOCATION_HEADERS: [(&str, &str); 2] = [
    ("cf-iplatitude", "cf-iplongitude"),
    ("x-latitude", "x-longitude"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct JoinRequest {
    pub party: String,
    pub room: String,
    pub connection_id: String,
    pub location: Option<Location>,
}

impl JoinRequest {
    /// Key under which the room's peers are stored.
    pub fn room_key(&self) -> String {
        format!("{}/{}", self.party, self.room)
    }
}

/// Parse `/parties/{party}/{room}?_pk={id}` plus location headers.
pub fn parse_join(path_and_query: &str, headers: &HeaderMap) -> Result<JoinRequest, String> {
    let (path, query) = path_and_query
        .split_once('?')
        .unwrap_or((path_and_query, ""));

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let (party, room) = match segments.as_slice() {
        ["parties", party, room] if !party.is_empty() && !room.is_empty() => (*party, *room),
        _ => return Err(format!("unknown path '{path}'")),
    };

    let connection_id = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "_pk")
        .map(|(_, v)| v.to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(new_id);

    Ok(JoinRequest {
        party: party.to_string(),
        room: room.to_string(),
        connection_id,
        location: location_from_headers(headers),
    })
}

fn location_from_headers(headers: &HeaderMap) -> Option<Location> {
    LOCATION_HEADERS.iter().find_map(|(lat_key, lng_key)| {
        let lat = header_f64(headers, lat_key)?;
        let lng = header_f64(headers, lng_key)?;
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
            Some(Location::new(lat, lng))
        } else {
            None
        }
    })
}

fn header_f64(headers: &HeaderMap, key: &str) -> Option<f64> {
    headers
        .get(key)?
        .to_str()
        .ok()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
