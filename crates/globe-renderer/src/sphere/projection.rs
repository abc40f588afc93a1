//! Mapping between geographic coordinates, the unit sphere and a 2-D
//! surface.
//!
//! Convention: at `phi = 0, theta = 0` latitude/longitude (0, 0) faces the
//! viewer (+Z), north is +Y and east is +X.

use globe_common::Location;

use super::matrix::{globe_orientation, transform_point, Mat4};
use crate::options::FrameState;

/// Point on the unit sphere for a latitude/longitude in degrees.
pub fn location_to_unit(location: Location) -> [f32; 3] {
    let lat = location.lat.to_radians() as f32;
    let lng = location.lng.to_radians() as f32;
    let c = lat.cos();
    [c * lng.sin(), lat.sin(), c * lng.cos()]
}

/// `n` points spread evenly over the unit sphere (Fibonacci lattice).
pub fn fibonacci_points(n: u32) -> Vec<[f32; 3]> {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    let n_f = n as f32;
    (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / n_f;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let a = golden_angle * i as f32;
            [a.cos() * r, y, a.sin() * r]
        })
        .collect()
}

/// Where the globe sits on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_x: f32,
    pub center_y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Viewport {
    /// Terminal cells, roughly twice as tall as they are wide.
    pub fn cells(columns: u32, rows: u32) -> Self {
        let ry = ((rows as f32 / 2.0).min(columns as f32 / 4.0) - 1.0).max(1.0);
        Self {
            center_x: columns as f32 / 2.0,
            center_y: rows as f32 / 2.0,
            radius_x: ry * 2.0,
            radius_y: ry,
        }
    }

    /// Project an already oriented point. `None` for the far hemisphere.
    pub fn project(&self, p: [f32; 3]) -> Option<(f32, f32, f32)> {
        if p[2] <= 0.0 {
            return None;
        }
        Some((
            self.center_x + p[0] * self.radius_x,
            self.center_y - p[1] * self.radius_y,
            p[2],
        ))
    }

    /// Orient then project.
    pub fn project_with(&self, orientation: &Mat4, p: [f32; 3]) -> Option<(f32, f32, f32)> {
        self.project(transform_point(orientation, p))
    }
}

/// A marker that is visible in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMarker {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// 0 at the rim, 1 facing the viewer.
    pub depth: f32,
    pub size: f64,
    pub is_self: bool,
}

/// Project every front-facing marker of `frame` onto `viewport`.
pub fn project_markers(frame: &FrameState, viewport: &Viewport) -> Vec<ProjectedMarker> {
    let orientation = globe_orientation(frame.phi as f32, frame.theta as f32);
    frame
        .markers
        .iter()
        .filter_map(|m| {
            let (x, y, depth) = viewport.project_with(&orientation, location_to_unit(m.location))?;
            Some(ProjectedMarker {
                id: m.id.clone(),
                x,
                y,
                depth,
                size: m.size,
                is_self: m.is_self(),
            })
        })
        .collect()
}
