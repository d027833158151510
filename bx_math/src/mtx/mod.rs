//! Matrix builders with bx `fpumath` semantics.
//!
//! Every builder comes in three shapes:
//! - a glam function returning `Mat4` (`look_at`, `proj`, `rotate_xy`)
//! - a flat fixed-size array form writing into `[f32; 16]` (`mtx_*`)
//! - a bounds-checked slice form returning `Result` (`try_mtx_*`)
//!
//! Matrices are column-major, left-handed. A `[f32; 16]` written here is
//! `Mat4::to_cols_array()` of the glam result, translation in `[12..15]`.

mod buffer;
mod depth_range;
mod look_at;
mod projection;
mod rotation;

pub use buffer::{try_mtx_look_at, try_mtx_proj, try_mtx_rotate_xy, write_transforms};
pub use depth_range::DepthRange;
pub use look_at::{look_at, mtx_look_at};
pub use projection::{mtx_proj, proj, proj_xywh};
pub use rotation::{mtx_rotate_xy, rotate_xy};

/// Floats in a 4x4 matrix buffer.
pub const MTX_LEN: usize = 16;

/// Floats in a 3-component vector buffer.
pub const VEC3_LEN: usize = 3;
