//! XY rotation matrix.
//!
//! Rotates about X first, then about Y. Written column-major like every
//! other `mtx` builder.

use glam::{Mat4, Vec4};

/// Combined rotation about X by `ax` and Y by `ay` (radians).
///
/// Equals `Mat4::from_rotation_y(-ay) * Mat4::from_rotation_x(-ax)`: applied
/// to a column vector it rotates about X first, then about Y.
pub fn rotate_xy(ax: f32, ay: f32) -> Mat4 {
    let (sx, cx) = ax.sin_cos();
    let (sy, cy) = ay.sin_cos();

    Mat4::from_cols(
        Vec4::new(cy, 0.0, sy, 0.0),
        Vec4::new(sx * sy, cx, -sx * cy, 0.0),
        Vec4::new(-cx * sy, sx, cx * cy, 0.0),
        Vec4::W,
    )
}

/// Flat form of `rotate_xy` writing 16 floats into `result`.
pub fn mtx_rotate_xy(result: &mut [f32; 16], ax: f32, ay: f32) {
    *result = rotate_xy(ax, ay).to_cols_array();
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
