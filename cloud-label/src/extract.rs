//! Boundary-point extraction from curve annotations.

use std::collections::HashMap;

use crate::error::{LabelError, Result};
use cloud_types::{BoundaryPoint, FeatureSet, TriangleMesh};

/// Derive the full, non-deduplicated boundary-point list for a model.
///
/// Every (curve, vertex-index) occurrence yields one entry, preserving
/// duplicates: a vertex referenced by two curves appears twice. An entry
/// is a corner iff its vertex index occurs more than once across the
/// flattened sequence - a vertex shared by two or more curves is
/// topologically a corner. Coordinates are looked up directly in the
/// mesh vertex table.
///
/// Pure function: calling it twice on the same inputs yields identical
/// output.
///
/// # Errors
///
/// Returns [`LabelError::IndexOutOfRange`] if any curve references a
/// vertex index at or beyond the mesh's vertex count.
pub fn extract_boundary_points(
    features: &FeatureSet,
    mesh: &TriangleMesh,
) -> Result<Vec<BoundaryPoint>> {
    // Occurrence counts across the flattened curve sequence decide the
    // corner flag before any deduplication happens.
    let mut occurrences: HashMap<u32, u32> = HashMap::new();
    for curve in &features.curves {
        for &index in &curve.vert_indices {
            *occurrences.entry(index).or_insert(0) += 1;
        }
    }

    let mut boundary = Vec::with_capacity(features.occurrence_count());
    for curve in &features.curves {
        for &index in &curve.vert_indices {
            let position = mesh
                .position(index as usize)
                .copied()
                .ok_or(LabelError::IndexOutOfRange {
                    index,
                    vertex_count: mesh.vertex_count(),
                })?;
            let is_corner = occurrences.get(&index).is_some_and(|&n| n > 1);
            boundary.push(BoundaryPoint::new(index, position, is_corner));
        }
    }

    Ok(boundary)
}
