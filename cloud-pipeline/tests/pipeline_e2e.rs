//! End-to-end tests over a real directory tree.
//!
//! These build a miniature input tree (feature sidecars + OBJ models) in
//! a temp directory, run the batch, and inspect the written tables.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use cloud_io::load_labeled_cloud;
use cloud_pipeline::{process_feature_file, run_batch, PipelineConfig, PipelineError};

/// A unit square as a quad face (exercises fan triangulation).
const SQUARE_OBJ: &str = "\
# unit square
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

/// Two curves sharing vertex 1, so that vertex is a corner.
const FEATURES_JSON: &str = r#"{
    "curves": [
        { "name": "Line", "vert_indices": [0, 1] },
        { "name": "Line", "vert_indices": [1, 2] }
    ]
}"#;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_model(root: &Path, model_id: &str) {
    write_file(
        &root.join(format!("feat/{model_id}/{model_id}_features.json")),
        FEATURES_JSON,
    );
    write_file(&root.join(format!("obj/{model_id}/part.obj")), SQUARE_OBJ);
}

#[test]
fn batch_produces_labeled_tables() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_model(root, "00000007");

    let config = PipelineConfig::new(root, root.join("pcloud"))
        .with_sample_count(64)
        .with_seed(42);
    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.outputs.len(), 1);

    let out_path = root.join("pcloud/00000007_pcloud_points.csv");
    assert_eq!(summary.outputs[0], out_path);

    let labeled = load_labeled_cloud(&out_path).unwrap();
    assert_eq!(labeled.len(), 64);
    assert!(labeled.edge_count() >= 1);
    // Sampled positions stay on the source surface
    for point in &labeled.points {
        assert!(point.position.x >= 0.0 && point.position.x <= 1.0);
        assert!(point.position.y >= 0.0 && point.position.y <= 1.0);
        assert!(point.position.z.abs() < 1e-12);
        // A corner flag always comes with an edge flag
        assert!(!point.is_corner || point.is_edge);
    }
}

#[test]
fn fixed_seed_makes_runs_reproducible() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();
    for root in [dir_a.path(), dir_b.path()] {
        write_model(root, "00000007");
    }

    let run = |root: &Path| {
        let config = PipelineConfig::new(root, root.join("pcloud"))
            .with_sample_count(32)
            .with_seed(9);
        run_batch(&config).unwrap();
        fs::read_to_string(root.join("pcloud/00000007_pcloud_points.csv")).unwrap()
    };

    assert_eq!(run(dir_a.path()), run(dir_b.path()));
}

#[test]
fn one_broken_model_does_not_abort_the_batch() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_model(root, "00000007");
    // Second model has a feature file but no CAD model directory
    write_file(
        &root.join("feat/00000013/00000013_features.json"),
        FEATURES_JSON,
    );

    let config = PipelineConfig::new(root, root.join("pcloud"))
        .with_sample_count(16)
        .with_seed(1);
    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 1);
    assert!(root.join("pcloud/00000007_pcloud_points.csv").exists());
    assert!(!root.join("pcloud/00000013_pcloud_points.csv").exists());
}

#[test]
fn empty_tree_reports_no_feature_files() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig::new(dir.path(), dir.path().join("pcloud"));
    let result = run_batch(&config);
    assert!(matches!(result, Err(PipelineError::NoFeatureFiles { .. })));
}

#[test]
fn failed_run_writes_no_partial_output() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    // Valid model, malformed feature sidecar
    write_file(
        &root.join("feat/00000042/00000042_features.json"),
        r#"{ "curves": [ { "vert_indices": "#,
    );
    write_file(&root.join("obj/00000042/part.obj"), SQUARE_OBJ);

    let config = PipelineConfig::new(root, root.join("pcloud"))
        .with_sample_count(16)
        .with_seed(5);
    let feat = root.join("feat/00000042/00000042_features.json");
    let result = process_feature_file(&config, &feat);

    assert!(matches!(result, Err(PipelineError::Io(_))));
    assert!(!root.join("pcloud/00000042_pcloud_points.csv").exists());
}

#[test]
fn out_of_range_curve_index_fails_that_model() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(
        &root.join("feat/00000099/00000099_features.json"),
        r#"{ "curves": [ { "vert_indices": [0, 99] } ] }"#,
    );
    write_file(&root.join("obj/00000099/part.obj"), SQUARE_OBJ);

    let config = PipelineConfig::new(root, root.join("pcloud"))
        .with_sample_count(16)
        .with_seed(5);
    let feat = root.join("feat/00000099/00000099_features.json");
    let result = process_feature_file(&config, &feat);

    assert!(matches!(result, Err(PipelineError::Label(_))));
}
