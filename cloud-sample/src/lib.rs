//! Monte Carlo surface sampling.
//!
//! Produces a dense, approximately uniform point cloud from a triangle
//! mesh surface: triangles are drawn with probability proportional to
//! their area, then a uniform point is drawn inside the chosen triangle.
//!
//! Sampling is reproducible when a seed is supplied.
//!
//! # Example
//!
//! ```
//! use cloud_sample::sample_surface;
//! use cloud_types::{Point3, TriangleMesh};
//!
//! let mesh = TriangleMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! let cloud = sample_surface(&mesh, 128, Some(42)).unwrap();
//! assert_eq!(cloud.len(), 128);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod sampler;

pub use error::{Result, SampleError};
pub use sampler::sample_surface;
