//! Bounds-checked slice views over caller buffers.
//!
//! These mirror the flat `mtx_*` builders for callers holding plain slices
//! (e.g. a window into a larger uniform buffer). A short slice is rejected
//! with `Error::InvalidBuffer` before anything is written; longer slices
//! use their leading elements.

use glam::Mat4;
use crate::error::{Error, Result};
use crate::shim::BxMath;
use super::{mtx_look_at, mtx_proj, mtx_rotate_xy, MTX_LEN, VEC3_LEN};

const SOURCE: &str = "bxmath::mtx";

fn too_short(name: &str, expected: usize, actual: usize) -> Error {
    BxMath::log_and_return_error(
        SOURCE,
        Error::InvalidBuffer(format!("{} needs {} floats, got {}", name, expected, actual)),
    )
}

fn mtx_view_mut<'a>(name: &str, buffer: &'a mut [f32]) -> Result<&'a mut [f32; MTX_LEN]> {
    let actual = buffer.len();
    buffer
        .get_mut(..MTX_LEN)
        .and_then(|slot| <&mut [f32; MTX_LEN]>::try_from(slot).ok())
        .ok_or_else(|| too_short(name, MTX_LEN, actual))
}

fn vec3_view<'a>(name: &str, buffer: &'a [f32]) -> Result<&'a [f32; VEC3_LEN]> {
    buffer
        .get(..VEC3_LEN)
        .and_then(|slot| <&[f32; VEC3_LEN]>::try_from(slot).ok())
        .ok_or_else(|| too_short(name, VEC3_LEN, buffer.len()))
}

/// Checked form of `mtx_look_at`.
pub fn try_mtx_look_at(result: &mut [f32], eye: &[f32], at: &[f32], up: &[f32]) -> Result<()> {
    let eye = vec3_view("eye", eye)?;
    let at = vec3_view("at", at)?;
    let up = vec3_view("up", up)?;
    let result = mtx_view_mut("result", result)?;
    mtx_look_at(result, eye, at, up);
    Ok(())
}

/// Checked form of `mtx_proj`.
pub fn try_mtx_proj(
    result: &mut [f32],
    fovy: f32,
    aspect: f32,
    near: f32,
    far: f32,
    ogl_ndc: bool,
) -> Result<()> {
    let result = mtx_view_mut("result", result)?;
    mtx_proj(result, fovy, aspect, near, far, ogl_ndc);
    Ok(())
}

/// Checked form of `mtx_rotate_xy`.
pub fn try_mtx_rotate_xy(result: &mut [f32], ax: f32, ay: f32) -> Result<()> {
    let result = mtx_view_mut("result", result)?;
    mtx_rotate_xy(result, ax, ay);
    Ok(())
}

/// Pack consecutive matrices into a flat float buffer.
///
/// Returns the number of floats written (`16 * mats.len()`). Fails without
/// writing if `out` is too short.
pub fn write_transforms(out: &mut [f32], mats: &[Mat4]) -> Result<usize> {
    let floats: &[f32] = bytemuck::cast_slice(mats);
    let available = out.len();
    let slot = out
        .get_mut(..floats.len())
        .ok_or_else(|| too_short("transforms", floats.len(), available))?;
    slot.copy_from_slice(floats);
    Ok(floats.len())
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
