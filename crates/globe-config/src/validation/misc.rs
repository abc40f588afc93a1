//! Validation for the presence and render sections.

use crate::schema::GlobeAppConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_presence(errors: &mut Vec<String>, config: &GlobeAppConfig) {
    let p = &config.presence;
    validate_non_empty(errors, "presence.host", &p.host);
    validate_non_empty(errors, "presence.party", &p.party);
    validate_non_empty(errors, "presence.room", &p.room);
    if p.host.contains("://") {
        errors.push(format!("presence.host = '{}' must not include a scheme", p.host));
    }
    validate_range(errors, "presence.reconnect_delay_secs", p.reconnect_delay_secs, 1, 60);
    if p.max_reconnect_delay_secs < p.reconnect_delay_secs {
        errors.push(format!(
            "presence.max_reconnect_delay_secs = {} is below reconnect_delay_secs = {}",
            p.max_reconnect_delay_secs, p.reconnect_delay_secs
        ));
    }
    validate_range(errors, "presence.connect_timeout_secs", p.connect_timeout_secs, 1, 120);
}

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &GlobeAppConfig) {
    let r = &config.render;
    validate_range(errors, "render.frame_rate", r.frame_rate, 1, 240);
    validate_range(errors, "render.columns", r.columns, 20, 400);
    validate_range(errors, "render.rows", r.rows, 10, 200);
}
