//! Per-model runs and the batch loop.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::discover::{find_feature_files, output_filename, resolve_model_path};
use crate::error::{PipelineError, Result};
use cloud_io::{load_feature_set, load_obj, save_labeled_cloud};
use cloud_label::{extract_boundary_points, transfer_labels};
use cloud_sample::sample_surface;

/// Outcome of a batch invocation.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Number of models processed successfully.
    pub processed: usize,
    /// Number of models whose run failed.
    pub failed: usize,
    /// Paths of the tables written, in discovery order.
    pub outputs: Vec<PathBuf>,
}

/// Run the pipeline for a single feature file.
///
/// Stages run strictly in sequence: resolve the model, load inputs,
/// sample the surface, extract boundary points, transfer labels, write
/// the table. The output file is only created after every computation
/// has succeeded, so a failure never leaves a partial table behind.
///
/// Returns the path of the written table.
///
/// # Errors
///
/// Any stage failure aborts this model's run; see [`PipelineError`].
pub fn process_feature_file(config: &PipelineConfig, feat_path: &Path) -> Result<PathBuf> {
    let model_path = resolve_model_path(config, feat_path)?;
    debug!(feature = %feat_path.display(), model = %model_path.display(), "resolved model");

    let mesh = load_obj(&model_path)?;
    let features = load_feature_set(feat_path)?;

    let cloud = sample_surface(&mesh, config.sample_count, config.seed)?;
    let boundary = extract_boundary_points(&features, &mesh)?;
    let labeled = transfer_labels(&boundary, &cloud)?;

    debug!(
        vertices = mesh.vertex_count(),
        boundary = boundary.len(),
        edges = labeled.edge_count(),
        corners = labeled.corner_count(),
        "labels transferred"
    );

    fs::create_dir_all(&config.output_root)?;
    let out_path = config.output_path(&output_filename(feat_path));
    save_labeled_cloud(&labeled, &out_path)?;

    info!(
        output = %out_path.display(),
        points = labeled.len(),
        edges = labeled.edge_count(),
        "wrote labeled point cloud"
    );
    Ok(out_path)
}

/// Run the pipeline over every feature file under the input tree.
///
/// Models are independent, so they are processed in parallel. A failing
/// model is logged and counted but never aborts the rest of the batch.
///
/// # Errors
///
/// Returns [`PipelineError::NoFeatureFiles`] when discovery finds
/// nothing, or an error if the feature tree itself cannot be traversed.
pub fn run_batch(config: &PipelineConfig) -> Result<BatchSummary> {
    let feat_root = config.feat_root();
    let feature_files = find_feature_files(&feat_root)?;
    if feature_files.is_empty() {
        return Err(PipelineError::NoFeatureFiles { root: feat_root });
    }

    info!(models = feature_files.len(), "starting batch");

    let results: Vec<(&PathBuf, Result<PathBuf>)> = feature_files
        .par_iter()
        .map(|feat_path| (feat_path, process_feature_file(config, feat_path)))
        .collect();

    let mut summary = BatchSummary::default();
    for (feat_path, result) in results {
        match result {
            Ok(out_path) => {
                summary.processed += 1;
                summary.outputs.push(out_path);
            }
            Err(err) => {
                summary.failed += 1;
                warn!(feature = %feat_path.display(), error = %err, "model failed");
            }
        }
    }

    info!(
        processed = summary.processed,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}
