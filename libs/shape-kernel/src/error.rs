//! # Shape Errors
//!
//! Error types for the inspection and parsing helpers of the kernel.
//!
//! Generators themselves never fail: out-of-range parameters are clamped and
//! degenerate sizes are replaced by a small epsilon. Errors only surface from
//! APIs that inspect or parse caller-supplied data.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur when validating meshes or parsing shape descriptors.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A face's index list does not describe whole triangles.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// A face references a vertex that does not exist.
    #[error("Face {face} references vertex {index} but the mesh has {vertex_count} positions")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// The shape kind tag is not part of the registry.
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),

    /// Invalid kernel configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ShapeError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an unknown shape kind error.
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownShapeKind(name.into())
    }
}

/// Result type alias for kernel helpers.
pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::IndexOutOfRange {
            face: 2,
            index: 40,
            vertex_count: 24,
        };
        let text = err.to_string();
        assert!(text.contains("Face 2"));
        assert!(text.contains("24"));

        let err = ShapeError::unknown_kind("Teapot");
        assert!(err.to_string().contains("Teapot"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: ShapeError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, ShapeError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeError>();
    }
}
