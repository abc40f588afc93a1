//! Per-frame glue between the marker store and the surface.

use globe_common::RendererError;
use tracing::{debug, info, warn};

use crate::options::{FrameState, GlobeOptions};
use crate::rotation::Rotation;
use crate::store::MarkerStore;
use crate::surface::GlobeSurface;

/// Owns the rotation and the surface for as long as the globe is mounted.
///
/// The host calls [`GlobeBridge::on_render`] once per animation frame.
/// Dropping the bridge releases the surface.
pub struct GlobeBridge {
    options: GlobeOptions,
    rotation: Rotation,
    surface: Box<dyn GlobeSurface>,
    frame: FrameState,
    frames: u64,
    draw_failures: u64,
}

impl GlobeBridge {
    pub fn new(
        options: GlobeOptions,
        surface: Box<dyn GlobeSurface>,
    ) -> Result<Self, RendererError> {
        if options.width == 0 || options.height == 0 {
            return Err(RendererError::InvalidSize {
                width: options.width,
                height: options.height,
            });
        }
        info!(
            surface = surface.name(),
            width = options.width,
            height = options.height,
            "Globe mounted"
        );
        Ok(Self {
            rotation: Rotation::new(options.phi, options.rotation_step),
            frame: FrameState::from_options(&options),
            options,
            surface,
            frames: 0,
            draw_failures: 0,
        })
    }

    /// Draw one frame from the current store contents, then advance the spin.
    pub fn on_render(&mut self, store: &MarkerStore) -> &FrameState {
        self.frame.markers = store.snapshot();
        self.frame.phi = self.rotation.angle();

        if let Err(e) = self.surface.draw(&self.options, &self.frame) {
            self.draw_failures += 1;
            if self.draw_failures == 1 {
                warn!(surface = self.surface.name(), error = %e, "Globe draw failed");
            } else {
                debug!(surface = self.surface.name(), error = %e, "Globe draw failed");
            }
        }

        self.rotation.advance();
        self.frames += 1;
        &self.frame
    }

    /// Angle the next frame will be drawn at.
    pub fn phi(&self) -> f64 {
        self.rotation.angle()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn draw_failures(&self) -> u64 {
        self.draw_failures
    }
}

impl Drop for GlobeBridge {
    fn drop(&mut self) {
        info!(frames = self.frames, "Globe unmounted");
    }
}
