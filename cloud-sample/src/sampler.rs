//! Area-weighted Monte Carlo sampling of a triangle mesh surface.

use nalgebra::Point3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SampleError};
use cloud_types::{PointCloud, TriangleMesh};

/// Sample `count` points approximately uniformly over the mesh surface.
///
/// Each draw picks a triangle with probability proportional to its area
/// (binary search over a cumulative-area table), then a uniform point
/// inside that triangle via square-root barycentric interpolation.
///
/// The sampled points carry no ordering relationship to mesh vertices.
///
/// # Arguments
///
/// - `mesh`: The surface to sample
/// - `count`: Number of points to produce
/// - `seed`: Optional random seed for reproducibility
///
/// # Errors
///
/// Returns [`SampleError::EmptyMesh`] if the mesh has no faces and
/// [`SampleError::DegenerateSurface`] if the total area is zero or
/// non-finite.
pub fn sample_surface(mesh: &TriangleMesh, count: usize, seed: Option<u64>) -> Result<PointCloud> {
    if mesh.is_empty() {
        return Err(SampleError::EmptyMesh);
    }

    // Cumulative area table for proportional triangle selection
    let mut cumulative = Vec::with_capacity(mesh.face_count());
    let mut total_area = 0.0;
    for tri in mesh.triangles() {
        total_area += tri.area();
        cumulative.push(total_area);
    }

    if total_area <= 0.0 || !total_area.is_finite() {
        return Err(SampleError::DegenerateSurface { total_area });
    }

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut cloud = PointCloud::with_capacity(count);
    for _ in 0..count {
        let r = rng.gen_range(0.0..total_area);
        let face = cumulative
            .partition_point(|&a| a <= r)
            .min(mesh.face_count() - 1);
        let [i0, i1, i2] = mesh.faces[face];

        cloud.push(point_in_triangle(
            &mesh.positions[i0 as usize],
            &mesh.positions[i1 as usize],
            &mesh.positions[i2 as usize],
            rng.gen(),
            rng.gen(),
        ));
    }

    Ok(cloud)
}

/// Map two unit uniforms to a uniform point inside a triangle.
///
/// Uses the square-root trick: `P = (1-√u)·v0 + √u(1-v)·v1 + √u·v·v2`.
fn point_in_triangle(
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
    u: f64,
    v: f64,
) -> Point3<f64> {
    let su = u.sqrt();
    let w0 = 1.0 - su;
    let w1 = su * (1.0 - v);
    let w2 = su * v;
    Point3::from(w0 * v0.coords + w1 * v1.coords + w2 * v2.coords)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> TriangleMesh {
        TriangleMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn produces_exact_count() {
        let cloud = sample_surface(&unit_square(), 500, Some(7)).unwrap();
        assert_eq!(cloud.len(), 500);
    }

    #[test]
    fn zero_count_yields_empty_cloud() {
        let cloud = sample_surface(&unit_square(), 0, Some(7)).unwrap();
        assert!(cloud.is_empty());
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a = sample_surface(&unit_square(), 100, Some(42)).unwrap();
        let b = sample_surface(&unit_square(), 100, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = sample_surface(&unit_square(), 100, Some(1)).unwrap();
        let b = sample_surface(&unit_square(), 100, Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn points_lie_on_surface() {
        let cloud = sample_surface(&unit_square(), 1000, Some(3)).unwrap();
        for p in &cloud.positions {
            assert!(p.x >= 0.0 && p.x <= 1.0);
            assert!(p.y >= 0.0 && p.y <= 1.0);
            assert_relative_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn samples_proportional_to_area() {
        // One large triangle (area 50) and one tiny (area 0.005): nearly
        // all samples should land on the large one.
        let mesh = TriangleMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(0.0, 10.0, 0.0),
                Point3::new(100.0, 0.0, 0.0),
                Point3::new(100.1, 0.0, 0.0),
                Point3::new(100.0, 0.1, 0.0),
            ],
            vec![[0, 1, 2], [3, 4, 5]],
        );
        let cloud = sample_surface(&mesh, 2000, Some(11)).unwrap();
        let near_large = cloud.positions.iter().filter(|p| p.x <= 10.0).count() as f64;
        assert!(near_large / 2000.0 > 0.99);
    }

    #[test]
    fn empty_mesh_fails() {
        let mesh = TriangleMesh::new();
        assert_eq!(sample_surface(&mesh, 10, None), Err(SampleError::EmptyMesh));
    }

    #[test]
    fn degenerate_surface_fails() {
        // All vertices collinear: every face has zero area
        let mesh = TriangleMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        assert!(matches!(
            sample_surface(&mesh, 10, Some(0)),
            Err(SampleError::DegenerateSurface { .. })
        ));
    }

    #[test]
    fn barycentric_point_stays_inside() {
        let v0 = Point3::new(0.0, 0.0, 0.0);
        let v1 = Point3::new(1.0, 0.0, 0.0);
        let v2 = Point3::new(0.0, 1.0, 0.0);
        for &(u, v) in &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.2, 0.9)] {
            let p = point_in_triangle(&v0, &v1, &v2, u, v);
            assert!(p.x >= 0.0 && p.y >= 0.0 && p.x + p.y <= 1.0 + 1e-12);
        }
    }
}
