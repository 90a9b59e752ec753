//! Core types for the CAD-to-point-cloud labeling pipeline.
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline:
//!
//! - [`TriangleMesh`] - An indexed triangle mesh loaded from a CAD model
//! - [`FeatureSet`] - Curve annotations referencing mesh vertices by index
//! - [`BoundaryPoint`] - A curve vertex tagged as corner or plain edge point
//! - [`PointCloud`] - Points sampled from a mesh surface
//! - [`LabeledCloud`] - A point cloud with per-point edge/corner flags
//!
//! # Units and coordinates
//!
//! The library is unit-agnostic. All coordinates are `f64`, using a
//! right-handed coordinate system.
//!
//! # Example
//!
//! ```
//! use cloud_types::{Point3, TriangleMesh};
//!
//! let mut mesh = TriangleMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert!((mesh.surface_area() - 0.5).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod cloud;
mod feature;
mod mesh;

pub use bounds::Aabb;
pub use cloud::{LabeledCloud, LabeledPoint, PointCloud};
pub use feature::{BoundaryPoint, FeatureCurve, FeatureSet};
pub use mesh::{Triangle, TriangleMesh};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
