//! Building renderer and channel settings from the loaded config.

use globe_common::{ConfigError, ConnectionId};
use globe_config::colors::parse_color;
use globe_config::schema::{GlobeConfig, PresenceConfig, RenderConfig};
use globe_presence::ChannelConfig;
use globe_renderer::{AsciiSurface, GlobeOptions, GlobeSurface, HeadlessSurface};

pub(super) fn globe_options(config: &GlobeConfig) -> Result<GlobeOptions, ConfigError> {
    Ok(GlobeOptions {
        width: config.width,
        height: config.height,
        device_pixel_ratio: config.device_pixel_ratio,
        phi: config.phi,
        theta: config.theta,
        dark: config.dark,
        diffuse: config.diffuse,
        map_samples: config.map_samples,
        map_brightness: config.map_brightness,
        base_color: parse_color(&config.base_color)?,
        marker_color: parse_color(&config.marker_color)?,
        glow_color: parse_color(&config.glow_color)?,
        rotation_step: config.rotation_step,
    })
}

pub(super) fn channel_config(config: &PresenceConfig, connection_id: ConnectionId) -> ChannelConfig {
    ChannelConfig {
        host: config.host.clone(),
        party: config.party.clone(),
        room: config.room.clone(),
        secure: config.secure,
        connection_id,
        reconnect_delay_secs: config.reconnect_delay_secs,
        max_reconnect_delay_secs: config.max_reconnect_delay_secs,
        connect_timeout_secs: config.connect_timeout_secs,
    }
}

/// Pick the drawing surface. A terminal that can't host the globe falls
/// back to headless once instead of failing the app.
pub(super) fn mount_surface(render: &RenderConfig, options: &GlobeOptions) -> Box<dyn GlobeSurface> {
    if render.headless {
        return Box::new(HeadlessSurface::new());
    }
    match AsciiSurface::stdout(render.columns, render.rows, options) {
        Ok(surface) => Box::new(surface),
        Err(e) => {
            tracing::error!(error = %e, "Globe surface unavailable, running headless");
            Box::new(HeadlessSurface::new())
        }
    }
}
