//! Globe appearance, passed through to the rendering surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    pub device_pixel_ratio: f64,
    /// Initial rotation around the vertical axis, radians.
    pub phi: f64,
    /// Tilt towards the viewer, radians.
    pub theta: f64,
    pub dark: f64,
    pub diffuse: f64,
    /// Number of dots sampled on the sphere.
    pub map_samples: u32,
    pub map_brightness: f64,
    pub base_color: String,
    pub marker_color: String,
    pub glow_color: String,
    /// Radians added to `phi` every frame.
    pub rotation_step: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1200,
            device_pixel_ratio: 2.0,
            phi: 0.0,
            theta: 0.3,
            dark: 1.0,
            diffuse: 1.2,
            map_samples: 16000,
            map_brightness: 6.0,
            base_color: "#4d4d4d".into(),
            marker_color: "#1accff".into(),
            glow_color: "#ffffff".into(),
            rotation_step: 0.01,
        }
    }
}
