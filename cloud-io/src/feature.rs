//! Feature sidecar loading.
//!
//! Each CAD model ships with a structured sidecar document describing its
//! annotated curves. The document is JSON with a top-level `curves` array;
//! every entry carries an ordered `vert_indices` list of mesh-vertex
//! indices (see [`cloud_types::FeatureSet`]).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{open_error, IoResult};
use crate::IoError;
use cloud_types::FeatureSet;

/// Load a feature set from a sidecar file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist and
/// [`IoError::MalformedFeature`] if the content is not a valid
/// `curves`/`vert_indices` document.
///
/// # Example
///
/// ```no_run
/// use cloud_io::load_feature_set;
///
/// let features = load_feature_set("00000007_features.json").unwrap();
/// println!("{} curves", features.curve_count());
/// ```
pub fn load_feature_set<P: AsRef<Path>>(path: P) -> IoResult<FeatureSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| open_error(path, e))?;
    let features = parse_feature_set(&content)?;
    debug!(
        curves = features.curve_count(),
        occurrences = features.occurrence_count(),
        "loaded feature set"
    );
    Ok(features)
}

/// Parse a feature set from its JSON text.
///
/// # Errors
///
/// Returns [`IoError::MalformedFeature`] if the text does not deserialize
/// into the expected structure.
pub fn parse_feature_set(content: &str) -> IoResult<FeatureSet> {
    serde_json::from_str(content).map_err(|e| IoError::malformed_feature(e.to_string()))
}
