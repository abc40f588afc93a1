//! Configuration schema types for the visitor globe.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod globe;
mod presence;
mod render;
mod system;

pub use globe::*;
pub use presence::*;
pub use render::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeAppConfig {
    pub presence: PresenceConfig,
    pub globe: GlobeConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}
