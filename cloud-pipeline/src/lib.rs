//! Batch driver for the CAD-to-point-cloud labeling pipeline.
//!
//! For every feature sidecar under the input tree this crate locates the
//! matching CAD model, samples its surface, derives edge/corner ground
//! truth, transfers the labels onto the sampled cloud, and writes one
//! columnar table per model.
//!
//! Models are independent, so the batch runs them in parallel; a failure
//! in one model never aborts the others.
//!
//! # Directory layout
//!
//! ```text
//! input_root/
//!   feat/<model-id>/<name>_features.json
//!   obj/<model-id>/<model>.obj        (exactly one per model-id)
//! output_root/
//!   <prefix>_pcloud_points.csv
//! ```
//!
//! # Example
//!
//! ```no_run
//! use cloud_pipeline::{run_batch, PipelineConfig};
//!
//! let config = PipelineConfig::new("data", "data/pcloud").with_seed(42);
//! let summary = run_batch(&config).unwrap();
//! println!("{} written, {} failed", summary.processed, summary.failed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod discover;
mod error;
mod run;

pub use config::{PipelineConfig, DEFAULT_SAMPLE_COUNT};
pub use discover::{find_feature_files, output_filename, resolve_model_path};
pub use error::{PipelineError, Result};
pub use run::{process_feature_file, run_batch, BatchSummary};
