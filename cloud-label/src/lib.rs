//! Ground-truth label derivation and transfer.
//!
//! This crate is the core of the pipeline:
//!
//! - [`extract_boundary_points`] flattens a model's curve annotations
//!   into boundary points, marking vertices shared by multiple curve
//!   entries as corners
//! - [`transfer_labels`] maps each distinct boundary point onto its
//!   nearest neighbor in a sampled point cloud and produces the labeled
//!   output cloud
//!
//! Both operations are pure: they allocate new output and never mutate
//! their inputs.
//!
//! # Example
//!
//! ```
//! use cloud_label::{extract_boundary_points, transfer_labels};
//! use cloud_types::{FeatureCurve, FeatureSet, Point3, PointCloud, TriangleMesh};
//!
//! let mesh = TriangleMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! let features = FeatureSet::new(vec![FeatureCurve::new(vec![0, 1])]);
//!
//! let boundary = extract_boundary_points(&features, &mesh).unwrap();
//! let cloud = PointCloud::from_positions(&mesh.positions);
//! let labeled = transfer_labels(&boundary, &cloud).unwrap();
//!
//! assert_eq!(labeled.edge_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod extract;
mod transfer;

pub use error::{LabelError, Result};
pub use extract::extract_boundary_points;
pub use transfer::{nearest_point, transfer_labels};
