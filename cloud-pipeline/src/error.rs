//! Error types for the pipeline driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The feature-to-model mapping is not 1-to-1 for a model id.
    #[error("expected exactly one CAD model for {model_id:?}, found {candidates}")]
    AmbiguousMapping {
        /// The model id (feature file's parent directory name).
        model_id: String,
        /// Number of candidate model files found.
        candidates: usize,
    },

    /// No feature files were found under the input tree.
    #[error("no feature files found under {root}")]
    NoFeatureFiles {
        /// The searched feature root.
        root: PathBuf,
    },

    /// A feature file sits directly in the feature root, so no model id
    /// can be derived from its parent directory.
    #[error("cannot derive a model id for {path}")]
    MissingModelId {
        /// The offending feature file.
        path: PathBuf,
    },

    /// File loading or writing failed.
    #[error(transparent)]
    Io(#[from] cloud_io::IoError),

    /// Surface sampling failed.
    #[error(transparent)]
    Sample(#[from] cloud_sample::SampleError),

    /// Label extraction or transfer failed.
    #[error(transparent)]
    Label(#[from] cloud_label::LabelError),

    /// Filesystem traversal failed.
    #[error("I/O error: {0}")]
    Fs(#[from] std::io::Error),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
