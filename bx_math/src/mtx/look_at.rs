//! Look-at view matrix.
//!
//! Left-handed: the camera looks down +Z in view space. Degenerate input
//! (`at == eye`, or `up` parallel to the view direction) is out of
//! contract and yields NaNs; nothing is checked.

use glam::{Mat4, Vec3};

/// Build a view matrix looking from `eye` toward `at`.
///
/// `up` defaults to +Y when `None`. It does not need to be normalized or
/// orthogonal to the view direction.
pub fn look_at(eye: Vec3, at: Vec3, up: Option<Vec3>) -> Mat4 {
    Mat4::look_at_lh(eye, at, up.unwrap_or(Vec3::Y))
}

/// Flat form of `look_at` writing 16 floats into `result`.
pub fn mtx_look_at(result: &mut [f32; 16], eye: &[f32; 3], at: &[f32; 3], up: &[f32; 3]) {
    *result = look_at(Vec3::from_array(*eye), Vec3::from_array(*at), Some(Vec3::from_array(*up)))
        .to_cols_array();
}

#[cfg(test)]
#[path = "look_at_tests.rs"]
mod tests;
