//! C ABI for the bx matrix builders.
//!
//! Exposes `#[no_mangle] extern "C"` entry points with the signatures of
//! bx's `bx_mtx_*` helpers. Each one copies its inputs, builds the matrix
//! with `bx_math::mtx` and writes 16 column-major floats to `result`.
//!
//! Differences from a raw forwarding shim:
//! - a null `result`, `eye` or `at` logs an error and returns without writing
//! - a null `up` selects +Y
//! - inputs are read before the output is written, so overlap is harmless

use bx_math::bxmath::mtx::{self, DepthRange};
use bx_math::bxmath::Error;
use bx_math::bx_error;
use glam::Vec3;

const SOURCE: &str = "bxmath::ffi";

fn report_null(function: &str, argument: &str) {
    let error = Error::NullPointer(format!("{}: `{}`", function, argument));
    bx_error!(SOURCE, "{}", error);
}

/// Read 3 floats from a caller pointer.
///
/// # Safety
/// `ptr` must be non-null and valid for reading 3 `f32`.
unsafe fn read_vec3(ptr: *const f32) -> Vec3 {
    Vec3::from_array(std::ptr::read(ptr as *const [f32; 3]))
}

/// Write 16 floats to a caller pointer.
///
/// # Safety
/// `ptr` must be non-null and valid for writing 16 `f32`.
unsafe fn write_mtx(ptr: *mut f32, values: [f32; 16]) {
    std::ptr::write(ptr as *mut [f32; 16], values);
}

/// Build a left-handed look-at view matrix.
///
/// # Safety
/// `result` must be valid for writing 16 floats. `eye`, `at` and (if
/// non-null) `up` must be valid for reading 3 floats each.
#[no_mangle]
pub unsafe extern "C" fn bx_mtx_look_at(
    result: *mut f32,
    eye: *const f32,
    at: *const f32,
    up: *const f32,
) {
    if result.is_null() {
        return report_null("bx_mtx_look_at", "result");
    }
    if eye.is_null() {
        return report_null("bx_mtx_look_at", "eye");
    }
    if at.is_null() {
        return report_null("bx_mtx_look_at", "at");
    }

    let eye = read_vec3(eye);
    let at = read_vec3(at);
    let up = if up.is_null() { None } else { Some(read_vec3(up)) };

    #[cfg(feature = "trace-calls")]
    bx_math::bx_trace!(SOURCE, "bx_mtx_look_at(eye={}, at={}, up={:?})", eye, at, up);

    write_mtx(result, mtx::look_at(eye, at, up).to_cols_array());
}

/// Build a left-handed perspective projection matrix.
///
/// `fovy` is in degrees. `ogl_ndc` selects the [-1, 1] depth range,
/// otherwise [0, 1].
///
/// # Safety
/// `result` must be valid for writing 16 floats.
#[no_mangle]
pub unsafe extern "C" fn bx_mtx_proj(
    result: *mut f32,
    fovy: f32,
    aspect: f32,
    near: f32,
    far: f32,
    ogl_ndc: bool,
) {
    if result.is_null() {
        return report_null("bx_mtx_proj", "result");
    }

    let depth = DepthRange::from_ogl_ndc(ogl_ndc);

    #[cfg(feature = "trace-calls")]
    bx_math::bx_trace!(
        SOURCE,
        "bx_mtx_proj(fovy={}, aspect={}, near={}, far={}, ogl_ndc={})",
        fovy, aspect, near, far, depth.is_ogl_ndc()
    );

    write_mtx(result, mtx::proj(fovy, aspect, near, far, depth).to_cols_array());
}

/// Build a rotation about X by `ax` then Y by `ay` (radians).
///
/// # Safety
/// `result` must be valid for writing 16 floats.
#[no_mangle]
pub unsafe extern "C" fn bx_mtx_rotate_xy(result: *mut f32, ax: f32, ay: f32) {
    if result.is_null() {
        return report_null("bx_mtx_rotate_xy", "result");
    }

    #[cfg(feature = "trace-calls")]
    bx_math::bx_trace!(SOURCE, "bx_mtx_rotate_xy(ax={}, ay={})", ax, ay);

    write_mtx(result, mtx::rotate_xy(ax, ay).to_cols_array());
}
