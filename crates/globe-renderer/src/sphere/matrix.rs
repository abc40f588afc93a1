//! Rotation matrices for the globe orientation.
//!
//! Column-major `[f32; 16]`, the same layout a GPU uniform would take.
//! Only rotations are needed; the translation column stays zero.

pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = from_cols([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);

/// Build a pure rotation from the images of the three basis vectors.
const fn from_cols(x: [f32; 3], y: [f32; 3], z: [f32; 3]) -> Mat4 {
    [
        x[0], x[1], x[2], 0.0, //
        y[0], y[1], y[2], 0.0, //
        z[0], z[1], z[2], 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Tilt around X. Positive angles bring the north pole towards the viewer.
pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    from_cols([1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c])
}

/// Spin around Y.
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    from_cols([c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c])
}

/// `a × b`: applies `b` first.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    std::array::from_fn(|i| {
        let (col, row) = (i / 4, i % 4);
        (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum()
    })
}

/// Apply the rotation part to a point.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    std::array::from_fn(|row| m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row])
}

/// Spin by `phi`, then tilt by `theta`.
pub fn globe_orientation(phi: f32, theta: f32) -> Mat4 {
    mul(&rotate_x(theta), &rotate_y(phi))
}
