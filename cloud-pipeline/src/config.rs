//! Pipeline configuration.

use std::path::PathBuf;

/// Number of surface points sampled per model in the reference
/// configuration.
pub const DEFAULT_SAMPLE_COUNT: usize = 8096;

/// Explicit configuration for one pipeline invocation.
///
/// There is no ambient state: every run receives its roots, sampling
/// count, and seed through this struct.
///
/// # Example
///
/// ```
/// use cloud_pipeline::{PipelineConfig, DEFAULT_SAMPLE_COUNT};
///
/// let config = PipelineConfig::new("data", "data/pcloud");
/// assert_eq!(config.sample_count, DEFAULT_SAMPLE_COUNT);
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root of the input tree (holds `feat/` and `obj/`).
    pub input_root: PathBuf,
    /// Directory the labeled tables are written to.
    pub output_root: PathBuf,
    /// Number of surface points to sample per model.
    pub sample_count: usize,
    /// Optional random seed for reproducible sampling.
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Create a configuration with the default sampling count and no
    /// fixed seed.
    #[must_use]
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
        }
    }

    /// Set the sampling count.
    #[must_use]
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Fix the sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The feature-file subtree.
    #[must_use]
    pub fn feat_root(&self) -> PathBuf {
        self.input_root.join("feat")
    }

    /// The CAD-model subtree.
    #[must_use]
    pub fn obj_root(&self) -> PathBuf {
        self.input_root.join("obj")
    }

    /// The model directory for a given model id.
    #[must_use]
    pub fn model_dir(&self, model_id: &str) -> PathBuf {
        self.obj_root().join(model_id)
    }

    /// The output path for a given table filename.
    #[must_use]
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_root.join(filename)
    }
}
