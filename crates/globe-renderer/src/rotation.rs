//! Rotation of the globe around its vertical axis.

use std::f64::consts::TAU;

/// Spin angle `phi`, kept in `[0, 2π)`.
///
/// There is only one state: every frame advances the angle by `step`.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    phi: f64,
    step: f64,
}

impl Rotation {
    pub fn new(initial: f64, step: f64) -> Self {
        Self {
            phi: wrap(initial),
            step,
        }
    }

    pub fn angle(&self) -> f64 {
        self.phi
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Advance one frame and return the new angle.
    pub fn advance(&mut self) -> f64 {
        self.phi = wrap(self.phi + self.step);
        self.phi
    }
}

fn wrap(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
