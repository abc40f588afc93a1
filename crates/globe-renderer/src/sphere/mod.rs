//! Sphere geometry: rotation matrices, lat/lng mapping, dot sampling and
//! orthographic projection to surface coordinates.

pub mod matrix;
pub mod projection;

pub use projection::{
    fibonacci_points, location_to_unit, project_markers, ProjectedMarker, Viewport,
};
