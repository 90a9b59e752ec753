//! Nearest-neighbor label transfer onto a sampled point cloud.

use std::collections::{HashMap, HashSet};

use nalgebra::Point3;

use crate::error::{LabelError, Result};
use cloud_types::{BoundaryPoint, LabeledCloud, PointCloud};

/// Find the index of the cloud point closest to `target`.
///
/// Linear scan over the whole cloud using squared Euclidean distance.
/// Ties are broken by the lowest point index. Returns the winning index
/// and its squared distance.
///
/// The boundary sets this runs for are small (hundreds of points against
/// a cloud of a few thousand), so no spatial index is built.
///
/// # Panics
///
/// Panics if the cloud is empty; [`transfer_labels`] guards against that.
#[must_use]
pub fn nearest_point(cloud: &PointCloud, target: &Point3<f64>) -> (usize, f64) {
    assert!(!cloud.is_empty(), "nearest_point requires a non-empty cloud");

    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;
    for (index, position) in cloud.positions.iter().enumerate() {
        let dist = (position - target).norm_squared();
        if dist < best_dist {
            best_dist = dist;
            best_index = index;
        }
    }
    (best_index, best_dist)
}

/// Transfer boundary-point labels onto their nearest sampled points.
///
/// Boundary points are first deduplicated by vertex index (first
/// occurrence wins; corner flags were computed before deduplication, so
/// no corner is ever lost). Each distinct boundary point then marks its
/// nearest cloud point as an edge point, carrying its corner flag along.
/// Points no boundary point matched keep both flags false.
///
/// When two distinct boundary points select the same cloud point, the
/// assignment with the smaller squared distance wins; equal distances
/// keep the earlier assignment.
///
/// # Errors
///
/// Returns [`LabelError::EmptyPointCloud`] if the cloud has no points.
/// An empty boundary list is not an error: the output simply carries no
/// labels.
pub fn transfer_labels(boundary: &[BoundaryPoint], cloud: &PointCloud) -> Result<LabeledCloud> {
    if cloud.is_empty() {
        return Err(LabelError::EmptyPointCloud);
    }

    let mut labeled = LabeledCloud::unlabeled(cloud);
    let mut seen_vertices = HashSet::new();
    // Squared distance of the assignment currently holding each cloud point
    let mut assigned: HashMap<usize, f64> = HashMap::new();

    for point in boundary {
        if !seen_vertices.insert(point.vertex_index) {
            continue;
        }

        let (index, dist) = nearest_point(cloud, &point.position);
        match assigned.get(&index) {
            Some(&held) if held <= dist => {}
            _ => {
                assigned.insert(index, dist);
                labeled.points[index].is_edge = true;
                labeled.points[index].is_corner = point.is_corner;
            }
        }
    }

    Ok(labeled)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use cloud_types::{FeatureCurve, FeatureSet, TriangleMesh};

    fn cloud_of(positions: &[(f64, f64, f64)]) -> PointCloud {
        positions
            .iter()
            .map(|&(x, y, z)| Point3::new(x, y, z))
            .collect()
    }

    #[test]
    fn empty_cloud_fails() {
        let boundary = [BoundaryPoint::new(0, Point3::origin(), false)];
        assert_eq!(
            transfer_labels(&boundary, &PointCloud::new()),
            Err(LabelError::EmptyPointCloud)
        );
    }

    #[test]
    fn empty_boundary_yields_all_false() {
        let cloud = cloud_of(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let labeled = transfer_labels(&[], &cloud).unwrap();
        assert_eq!(labeled.len(), 2);
        assert_eq!(labeled.edge_count(), 0);
        assert_eq!(labeled.corner_count(), 0);
    }

    #[test]
    fn output_preserves_size_and_coordinates() {
        let cloud = cloud_of(&[(0.5, 0.5, 0.5), (1.5, -2.0, 3.0), (0.0, 0.0, 9.0)]);
        let boundary = [BoundaryPoint::new(0, Point3::new(1.4, -2.0, 3.0), false)];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert_eq!(labeled.len(), cloud.len());
        for (labeled_point, position) in labeled.points.iter().zip(cloud.positions.iter()) {
            assert_eq!(labeled_point.position, *position);
        }
    }

    #[test]
    fn selects_minimum_distance_point() {
        // Points at distances 5, 1, 3 from the origin: the middle one wins
        let cloud = cloud_of(&[(5.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 3.0)]);
        let boundary = [BoundaryPoint::new(0, Point3::origin(), false)];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert!(!labeled.points[0].is_edge);
        assert!(labeled.points[1].is_edge);
        assert!(!labeled.points[2].is_edge);
    }

    #[test]
    fn distance_tie_keeps_lowest_index() {
        let cloud = cloud_of(&[(1.0, 0.0, 0.0), (-1.0, 0.0, 0.0)]);
        let boundary = [BoundaryPoint::new(0, Point3::origin(), false)];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert!(labeled.points[0].is_edge);
        assert!(!labeled.points[1].is_edge);
    }

    #[test]
    fn duplicate_vertex_indices_are_deduplicated() {
        let cloud = cloud_of(&[(0.0, 0.0, 0.0), (10.0, 0.0, 0.0)]);
        // Same vertex twice, flagged as corner by pre-dedup counting
        let boundary = [
            BoundaryPoint::new(4, Point3::origin(), true),
            BoundaryPoint::new(4, Point3::origin(), true),
        ];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert_eq!(labeled.edge_count(), 1);
        assert_eq!(labeled.corner_count(), 1);
        assert!(labeled.points[0].is_corner);
    }

    #[test]
    fn closer_boundary_point_wins_collision() {
        // Both boundary points are nearest to cloud point 0; the second
        // one is closer and must take the assignment with its flag.
        let cloud = cloud_of(&[(0.0, 0.0, 0.0), (100.0, 0.0, 0.0)]);
        let boundary = [
            BoundaryPoint::new(1, Point3::new(0.5, 0.0, 0.0), true),
            BoundaryPoint::new(2, Point3::new(0.1, 0.0, 0.0), false),
        ];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert!(labeled.points[0].is_edge);
        assert!(!labeled.points[0].is_corner);
        assert_eq!(labeled.edge_count(), 1);
    }

    #[test]
    fn farther_boundary_point_loses_collision() {
        let cloud = cloud_of(&[(0.0, 0.0, 0.0), (100.0, 0.0, 0.0)]);
        let boundary = [
            BoundaryPoint::new(1, Point3::new(0.1, 0.0, 0.0), true),
            BoundaryPoint::new(2, Point3::new(0.5, 0.0, 0.0), false),
        ];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert!(labeled.points[0].is_edge);
        assert!(labeled.points[0].is_corner);
    }

    #[test]
    fn corner_implies_edge() {
        let cloud = cloud_of(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (2.0, 2.0, 2.0)]);
        let boundary = [
            BoundaryPoint::new(0, Point3::new(0.1, 0.0, 0.0), true),
            BoundaryPoint::new(1, Point3::new(2.0, 2.0, 2.1), false),
        ];
        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        for point in &labeled.points {
            assert!(!point.is_corner || point.is_edge);
        }
    }

    #[test]
    fn end_to_end_curve_scenario() {
        // One curve [2, 5, 2] over a 6-vertex mesh: vertex 2 is a corner,
        // vertex 5 a plain edge point. Cloud point 3 coincides with
        // vertex 2, cloud point 7 with vertex 5.
        let mesh = TriangleMesh::from_parts(
            (0..6)
                .map(|i| Point3::new(f64::from(i) * 10.0, 0.0, 0.0))
                .collect(),
            vec![[0, 1, 2], [3, 4, 5]],
        );
        let features = FeatureSet::new(vec![FeatureCurve::new(vec![2, 5, 2])]);
        let boundary = crate::extract_boundary_points(&features, &mesh).unwrap();

        let mut positions = vec![(0.0, 500.0, 0.0); 10];
        positions[3] = (20.0, 0.0, 0.0); // vertex 2
        positions[7] = (50.0, 0.0, 0.0); // vertex 5
        let cloud = cloud_of(&positions);

        let labeled = transfer_labels(&boundary, &cloud).unwrap();

        assert!(labeled.points[3].is_edge);
        assert!(labeled.points[3].is_corner);
        assert!(labeled.points[7].is_edge);
        assert!(!labeled.points[7].is_corner);
        for (index, point) in labeled.points.iter().enumerate() {
            if index != 3 && index != 7 {
                assert!(!point.is_edge && !point.is_corner);
            }
        }
    }
}
