//! Tests for the full validation pipeline.

use super::*;
use crate::schema::GlobeAppConfig;

#[test]
fn default_config_validates() {
    let config = GlobeAppConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_frame_rate() {
    let mut config = GlobeAppConfig::default();
    config.render.frame_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("render.frame_rate"));
}

#[test]
fn catches_non_positive_rotation_step() {
    let mut config = GlobeAppConfig::default();
    config.globe.rotation_step = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.rotation_step"));
}

#[test]
fn catches_nan_theta() {
    let mut config = GlobeAppConfig::default();
    config.globe.theta = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.theta"));
}

#[test]
fn catches_bad_color() {
    let mut config = GlobeAppConfig::default();
    config.globe.marker_color = "blue".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.marker_color"));
}

#[test]
fn catches_empty_room_and_scheme_in_host() {
    let mut config = GlobeAppConfig::default();
    config.presence.room = "  ".into();
    config.presence.host = "wss://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("presence.room"));
    assert!(err.contains("must not include a scheme"));
}

#[test]
fn catches_inverted_backoff() {
    let mut config = GlobeAppConfig::default();
    config.presence.reconnect_delay_secs = 10;
    config.presence.max_reconnect_delay_secs = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("presence.max_reconnect_delay_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GlobeAppConfig::default();
    config.globe.width = 0;
    config.render.rows = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.width"));
    assert!(err.contains("render.rows"));
    assert!(err.contains("; "));
}
