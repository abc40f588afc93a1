//! Rendering surfaces the bridge can draw into.

mod ascii;
mod headless;

pub use ascii::AsciiSurface;
pub use headless::HeadlessSurface;

use globe_common::RendererError;

use crate::options::{FrameState, GlobeOptions};

/// A rendering backend. Receives the globe options once per frame
/// alongside the frame state; it must not keep the markers beyond the call.
pub trait GlobeSurface {
    fn name(&self) -> &'static str;

    fn draw(&mut self, options: &GlobeOptions, frame: &FrameState) -> Result<(), RendererError>;
}
