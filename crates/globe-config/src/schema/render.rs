use serde::{Deserialize, Serialize};

/// Frame loop and surface selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frames per second (valid range: 1-240).
    pub frame_rate: u32,
    /// Skip drawing; only track markers.
    pub headless: bool,
    /// Character grid size of the terminal surface.
    pub columns: u32,
    pub rows: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            headless: false,
            columns: 80,
            rows: 40,
        }
    }
}
