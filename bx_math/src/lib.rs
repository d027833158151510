/*!
# bx math

Matrix builders with the numeric layout of bx `fpumath`, implemented on glam.

The crate backs a C-linkage shim (`bx_math_ffi`) but is usable directly from
Rust. All matrices are column-major `[f32; 16]` / `glam::Mat4`, left-handed.

## Layout

- **mtx**: look-at, perspective projection and XY rotation builders, each as
  a glam function, a flat fixed-size array form and a bounds-checked slice form
- **log**: pluggable logger with colored console output
- **BxMath**: process-wide logger slot
*/

// Internal modules
mod error;
mod shim;
pub mod log;
pub mod mtx;

// Main bxmath namespace module
pub mod bxmath {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::shim::BxMath;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Matrix builders
    pub mod mtx {
        pub use crate::mtx::*;
    }
}

// Re-export math library at crate root
pub use glam;
