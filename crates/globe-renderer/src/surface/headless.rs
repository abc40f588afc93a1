use globe_common::RendererError;

use super::GlobeSurface;
use crate::options::{FrameState, GlobeOptions};

/// Draws nothing. Used when no terminal is available or none is wanted.
#[derive(Debug, Default)]
pub struct HeadlessSurface;

impl HeadlessSurface {
    pub fn new() -> Self {
        Self
    }
}

impl GlobeSurface for HeadlessSurface {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn draw(&mut self, _options: &GlobeOptions, _frame: &FrameState) -> Result<(), RendererError> {
        Ok(())
    }
}
