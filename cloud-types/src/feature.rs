//! Curve annotations and the boundary points derived from them.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A named curve referencing mesh vertices by index.
///
/// The index sequence is ordered along the curve. Indices may repeat
/// across curves (and, for closed loops, within one curve); repetition is
/// what identifies corners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCurve {
    /// Optional curve name from the sidecar file (e.g. "BSpline", "Line").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ordered mesh-vertex indices along the curve.
    pub vert_indices: Vec<u32>,
}

impl FeatureCurve {
    /// Create a curve from a list of vertex indices.
    #[must_use]
    pub const fn new(vert_indices: Vec<u32>) -> Self {
        Self {
            name: None,
            vert_indices,
        }
    }

    /// Set the curve name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// The curve annotations of one CAD model.
///
/// Loaded once from the sidecar feature file and treated as immutable.
///
/// # Example
///
/// ```
/// use cloud_types::{FeatureCurve, FeatureSet};
///
/// let features = FeatureSet::new(vec![
///     FeatureCurve::new(vec![0, 1, 2]),
///     FeatureCurve::new(vec![2, 3]),
/// ]);
///
/// assert_eq!(features.curve_count(), 2);
/// assert_eq!(features.occurrence_count(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// The curves of this model.
    pub curves: Vec<FeatureCurve>,
}

impl FeatureSet {
    /// Create a feature set from curves.
    #[must_use]
    pub const fn new(curves: Vec<FeatureCurve>) -> Self {
        Self { curves }
    }

    /// Number of curves.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if there are no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Total number of vertex-index occurrences across all curves,
    /// counting duplicates.
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.curves.iter().map(|c| c.vert_indices.len()).sum()
    }
}

/// A curve vertex with its mesh coordinate and corner flag.
///
/// One entry exists per (curve, vertex-index) occurrence before
/// deduplication, so the same `vertex_index` may appear several times.
/// The coordinate is taken directly from the mesh vertex table, never
/// re-derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint {
    /// Index into the owning mesh's vertex table.
    pub vertex_index: u32,
    /// The mesh vertex coordinate.
    pub position: Point3<f64>,
    /// True if this vertex occurs in more than one curve entry.
    pub is_corner: bool,
}

impl BoundaryPoint {
    /// Create a boundary point.
    #[inline]
    #[must_use]
    pub const fn new(vertex_index: u32, position: Point3<f64>, is_corner: bool) -> Self {
        Self {
            vertex_index,
            position,
            is_corner,
        }
    }
}
