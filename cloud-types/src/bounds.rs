//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

/// An axis-aligned bounding box.
///
/// Defined by minimum and maximum corner points. Used for logging and for
/// sanity checks on loaded meshes and sampled clouds.
///
/// # Example
///
/// ```
/// use cloud_types::{Aabb, Point3};
///
/// let points = [Point3::new(0.0, 1.0, 2.0), Point3::new(3.0, -1.0, 5.0)];
/// let aabb = Aabb::from_points(points.iter()).unwrap();
///
/// assert_eq!(aabb.min.y, -1.0);
/// assert_eq!(aabb.max.z, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create an AABB from a single point (zero volume).
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create an AABB covering an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let mut aabb = Self::from_point(*iter.next()?);
        for p in iter {
            aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Size of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Returns true if the point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}
