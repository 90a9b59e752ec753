//! Error types for surface sampling.

use thiserror::Error;

/// Errors that can occur while sampling a mesh surface.
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    /// The mesh has no faces to sample from.
    #[error("mesh has no faces to sample")]
    EmptyMesh,

    /// The mesh surface area is zero or non-finite.
    #[error("mesh surface is degenerate (total area {total_area})")]
    DegenerateSurface {
        /// The computed total surface area.
        total_area: f64,
    },
}

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, SampleError>;
