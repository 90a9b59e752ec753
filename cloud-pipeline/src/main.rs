//! Batch entry point: label every annotated CAD model under a tree.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cloud_pipeline::{run_batch, PipelineConfig};

/// Convert annotated CAD models into labeled point clouds.
///
/// Walks `INPUT_ROOT/feat/` for feature sidecars, resolves each model
/// under `INPUT_ROOT/obj/`, and writes one labeled table per model into
/// `OUTPUT_ROOT`.
#[derive(Parser)]
#[command(name = "cloud-pipeline", version)]
struct Cli {
    /// Input tree holding feat/ and obj/ subdirectories.
    input_root: PathBuf,

    /// Directory the labeled tables are written to.
    output_root: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::new(cli.input_root, cli.output_root);

    let summary = run_batch(&config)?;
    if summary.processed == 0 {
        bail!("all {} models failed", summary.failed);
    }
    Ok(())
}
