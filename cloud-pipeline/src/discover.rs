//! File discovery and the feature-to-model mapping.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};

/// Collect all feature sidecar files (`*.json`) under a root, recursing
/// into subdirectories.
///
/// The result is sorted so batch runs are deterministic.
///
/// # Errors
///
/// Returns an error if a directory cannot be read. A missing root yields
/// an empty list.
pub fn find_feature_files(feat_root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if feat_root.is_dir() {
        collect_json_files(feat_root, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Resolve the CAD model file belonging to a feature file.
///
/// The model id is the feature file's parent directory name; the model
/// must be the single `*.obj` file under `obj/<model-id>/`.
///
/// # Errors
///
/// Returns [`PipelineError::AmbiguousMapping`] unless exactly one
/// candidate exists (a missing model directory counts as zero), and
/// [`PipelineError::MissingModelId`] if the feature file has no usable
/// parent directory name.
pub fn resolve_model_path(config: &PipelineConfig, feat_path: &Path) -> Result<PathBuf> {
    let model_id = feat_path
        .parent()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .ok_or_else(|| PipelineError::MissingModelId {
            path: feat_path.to_path_buf(),
        })?
        .to_string();

    let model_dir = config.model_dir(&model_id);
    let mut candidates = Vec::new();
    if model_dir.is_dir() {
        for entry in fs::read_dir(&model_dir)? {
            let path = entry?.path();
            if path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("obj"))
            {
                candidates.push(path);
            }
        }
    }

    if candidates.len() != 1 {
        return Err(PipelineError::AmbiguousMapping {
            model_id,
            candidates: candidates.len(),
        });
    }
    Ok(candidates.remove(0))
}

/// Derive the output table filename from a feature filename.
///
/// The prefix is the feature filename's leading token, up to the first
/// underscore; a stem without underscores is used whole.
///
/// # Example
///
/// ```
/// use cloud_pipeline::output_filename;
/// use std::path::Path;
///
/// let name = output_filename(Path::new("feat/007/00000007_features.json"));
/// assert_eq!(name, "00000007_pcloud_points.csv");
/// ```
#[must_use]
pub fn output_filename(feat_path: &Path) -> String {
    let stem = feat_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    let prefix = stem.split('_').next().unwrap_or(stem);
    format!("{prefix}_pcloud_points.csv")
}
