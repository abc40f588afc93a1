//! Colour string parsing for the globe palette.
//!
//! Supports `#RGB`, `#RRGGBB` and `rgb(r,g,b)`.

use globe_common::{Color, ConfigError};
use regex::Regex;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// Parse a colour string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if HEX_RE.is_match(s) {
        return Color::from_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if let Some(caps) = RGB_RE.captures(s) {
        let channel = |i: usize| -> Result<u8, ConfigError> {
            caps[i]
                .parse::<u8>()
                .map_err(|_| ConfigError::ParseError(format!("rgb channel out of range: {s}")))
        };
        return Ok(Color::from_rgb(channel(1)?, channel(2)?, channel(3)?));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Whether `s` parses as a colour.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
