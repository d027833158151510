//! Error types for the bx math shim
//!
//! The glam and fixed-size array builders cannot fail. Errors only come
//! from the bounds-checked slice views and from the C boundary.

use std::fmt;

/// Result type for bx math operations
pub type Result<T> = std::result::Result<T, Error>;

/// bx math errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A caller buffer is too short for the requested matrix or vector view
    InvalidBuffer(String),

    /// A required pointer was null at the C boundary
    NullPointer(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBuffer(msg) => write!(f, "Invalid buffer: {}", msg),
            Error::NullPointer(msg) => write!(f, "Null pointer: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
