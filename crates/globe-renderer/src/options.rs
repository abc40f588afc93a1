//! Render options handed to the surface unchanged, and the per-frame state.

use globe_common::{Color, Marker};

/// Static appearance of the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeOptions {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    pub device_pixel_ratio: f64,
    pub phi: f64,
    pub theta: f64,
    pub dark: f64,
    pub diffuse: f64,
    pub map_samples: u32,
    pub map_brightness: f64,
    pub base_color: Color,
    pub marker_color: Color,
    pub glow_color: Color,
    pub rotation_step: f64,
}

impl Default for GlobeOptions {
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
            base_color: Color::from_rgb(0x4d, 0x4d, 0x4d),
            marker_color: Color::from_rgb(0x1a, 0xcc, 0xff),
            glow_color: Color::from_rgb(0xff, 0xff, 0xff),
            rotation_step: 0.01,
        }
    }
}

/// What one animation frame draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameState {
    pub phi: f64,
    pub theta: f64,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<Marker>,
}

impl FrameState {
    pub fn from_options(options: &GlobeOptions) -> Self {
        Self {
            phi: options.phi,
            theta: options.theta,
            width: options.width,
            height: options.height,
            markers: Vec::new(),
        }
    }
}
