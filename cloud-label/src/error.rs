//! Error types for label extraction and transfer.

use thiserror::Error;

/// Errors that can occur while deriving or transferring labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    /// A curve references a vertex index the mesh does not have.
    #[error("curve references vertex {index} but mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The sampled point cloud has no points to transfer labels onto.
    #[error("point cloud is empty")]
    EmptyPointCloud,
}

/// Result type for labeling operations.
pub type Result<T> = std::result::Result<T, LabelError>;
