/// Depth range of normalized device coordinates produced by `proj`.
///
/// Replaces the raw `oglNdc` flag of the C interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthRange {
    /// OpenGL-style NDC: near maps to -1, far to +1.
    NegativeOneToOne,
    /// Direct3D/Vulkan/Metal-style NDC: near maps to 0, far to 1.
    #[default]
    ZeroToOne,
}

impl DepthRange {
    /// Map the C boundary's `oglNdc` flag.
    pub fn from_ogl_ndc(ogl_ndc: bool) -> Self {
        if ogl_ndc {
            DepthRange::NegativeOneToOne
        } else {
            DepthRange::ZeroToOne
        }
    }

    /// Inverse of `from_ogl_ndc`.
    pub fn is_ogl_ndc(self) -> bool {
        self == DepthRange::NegativeOneToOne
    }

    /// NDC depth of the near plane.
    pub fn near_ndc(self) -> f32 {
        match self {
            DepthRange::NegativeOneToOne => -1.0,
            DepthRange::ZeroToOne => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "depth_range_tests.rs"]
mod tests;
