//! Sampled point clouds and their labeled counterpart.

use nalgebra::Point3;

use crate::Aabb;

/// An ordered collection of points sampled from a mesh surface.
///
/// The size is fixed at sampling time and the order is meaningful: label
/// transfer addresses points by their index in this sequence, and the
/// output table is written in the same order.
///
/// # Example
///
/// ```
/// use cloud_types::{Point3, PointCloud};
///
/// let mut cloud = PointCloud::new();
/// cloud.push(Point3::new(0.0, 0.0, 0.0));
/// cloud.push(Point3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(cloud.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    /// The sampled positions, in sampling order.
    pub positions: Vec<Point3<f64>>,
}

impl PointCloud {
    /// Create an empty point cloud.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Create a point cloud with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from a slice of positions.
    #[must_use]
    pub fn from_positions(positions: &[Point3<f64>]) -> Self {
        Self {
            positions: positions.to_vec(),
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the cloud has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a point.
    pub fn push(&mut self, position: Point3<f64>) {
        self.positions.push(position);
    }

    /// Compute the axis-aligned bounding box of the cloud.
    ///
    /// Returns `None` for an empty cloud.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter())
    }
}

impl FromIterator<Point3<f64>> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// A sampled point carrying ground-truth annotation flags.
///
/// Both flags default to false; the label-transfer stage sets them on the
/// points that boundary points matched to. A corner point is always also
/// an edge point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    /// The sampled position, unchanged from the input cloud.
    pub position: Point3<f64>,
    /// True if some boundary point matched this sample.
    pub is_edge: bool,
    /// True if the matching boundary point was a corner.
    pub is_corner: bool,
}

impl LabeledPoint {
    /// Create an unlabeled point at the given position.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            is_edge: false,
            is_corner: false,
        }
    }
}

/// A point cloud with per-point edge/corner annotations.
///
/// Preserves the size and order of the sampled cloud it was built from.
///
/// # Example
///
/// ```
/// use cloud_types::{LabeledCloud, Point3, PointCloud};
///
/// let cloud = PointCloud::from_positions(&[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ]);
/// let labeled = LabeledCloud::unlabeled(&cloud);
///
/// assert_eq!(labeled.len(), 2);
/// assert_eq!(labeled.edge_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledCloud {
    /// The annotated points, in sampling order.
    pub points: Vec<LabeledPoint>,
}

impl LabeledCloud {
    /// Create a labeled cloud from a sampled cloud, all flags false.
    #[must_use]
    pub fn unlabeled(cloud: &PointCloud) -> Self {
        Self {
            points: cloud.positions.iter().map(|p| LabeledPoint::new(*p)).collect(),
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points flagged as edge points.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_edge).count()
    }

    /// Number of points flagged as corners.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_corner).count()
    }
}
