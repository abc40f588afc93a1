//! Globe side of the visitor presence system.
//!
//! [`MarkerStore`] holds who is currently connected, [`GlobeBridge`] pulls
//! a snapshot of it every animation frame and hands it to a
//! [`GlobeSurface`] together with the current rotation.

pub mod bridge;
pub mod options;
pub mod rotation;
pub mod sphere;
pub mod store;
pub mod surface;

pub use bridge::GlobeBridge;
pub use options::{FrameState, GlobeOptions};
pub use rotation::Rotation;
pub use store::{MarkerStore, StoreChange};
pub use surface::{AsciiSurface, GlobeSurface, HeadlessSurface};
