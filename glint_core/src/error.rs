//! Error types for Glint
//!
//! The core algorithms never fail on degenerate numeric input; they return a
//! conservative default instead. These errors belong to the validating APIs
//! layered on top (staging buffer access, mesh preparation, index checks).

use std::fmt;

/// Result type for Glint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Glint errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sub-range access outside of a buffer (negative operand, overflow or past the end)
    OutOfBounds(String),

    /// Malformed mesh input (bad index count, index out of range, empty stream)
    InvalidMesh(String),

    /// Invalid resource or descriptor
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            Error::InvalidMesh(msg) => write!(f, "Invalid mesh: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error, logging it at ERROR level with file:line first
///
/// Defaults to `Error::InvalidResource`. Prefix with `Variant =>` to pick
/// another variant.
///
/// # Example
///
/// ```no_run
/// # use glint_core::engine_err;
/// let err = engine_err!("glint::Mesh", "Vertex {} missing", 3);
/// let err = engine_err!(InvalidMesh => "glint::Mesh", "Vertex {} missing", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident => $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::glint::Error::$variant(message)
    }};
    ($source:expr, $($arg:tt)*) => {
        $crate::engine_err!(InvalidResource => $source, $($arg)*)
    };
}

/// Log an error and return it from the enclosing function
///
/// Same forms as [`engine_err!`].
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident => $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant => $source, $($arg)*))
    };
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
