//! Left-handed perspective projection.
//!
//! `proj` is the symmetric case of `proj_xywh`. Neither checks
//! `near < far`, a positive aspect or a non-zero field of view.

use glam::{Mat4, Vec4};
use super::DepthRange;

/// Perspective projection from a vertical field of view in degrees.
pub fn proj(fovy: f32, aspect: f32, near: f32, far: f32, depth: DepthRange) -> Mat4 {
    let height = 1.0 / (fovy.to_radians() * 0.5).tan();
    let width = height / aspect;
    proj_xywh(0.0, 0.0, width, height, near, far, depth)
}

/// Perspective projection from explicit x/y scale and off-center shift.
///
/// `width` and `height` are the clip-space scales of view x and y; `x` and
/// `y` shift the projection center.
pub fn proj_xywh(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    near: f32,
    far: f32,
    depth: DepthRange,
) -> Mat4 {
    let diff = far - near;
    let (aa, bb) = match depth {
        DepthRange::NegativeOneToOne => ((far + near) / diff, (2.0 * far * near) / diff),
        DepthRange::ZeroToOne => {
            let aa = far / diff;
            (aa, near * aa)
        }
    };

    Mat4::from_cols(
        Vec4::new(width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, height, 0.0, 0.0),
        Vec4::new(-x, -y, aa, 1.0),
        Vec4::new(0.0, 0.0, -bb, 0.0),
    )
}

/// Flat form of `proj` writing 16 floats into `result`.
///
/// `ogl_ndc` selects `DepthRange::NegativeOneToOne`.
pub fn mtx_proj(result: &mut [f32; 16], fovy: f32, aspect: f32, near: f32, far: f32, ogl_ndc: bool) {
    *result = proj(fovy, aspect, near, far, DepthRange::from_ogl_ndc(ogl_ndc)).to_cols_array();
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
