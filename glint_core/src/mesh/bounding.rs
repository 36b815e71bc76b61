//! Bounding volumes for culling.
//!
//! The bounding sphere is derived from the axis-aligned extents of the
//! points: its center is the box center and its radius is the largest
//! half-extent. This is the approximation the culling code was tuned
//! against. It is not a minimal enclosing sphere and does not always contain
//! every point (the corners of a cube lie outside it).

use glam::Vec3;

// ============================================================================
// AABB
// ============================================================================

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Tightest box around the points, `None` for an empty set
    pub fn from_points(points: &[Vec3]) -> Option<Aabb> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Aabb { min: *first, max: *first };
        for point in rest {
            aabb.min = aabb.min.min(*point);
            aabb.max = aabb.max.max(*point);
        }
        Some(aabb)
    }

    /// Midpoint of the per-axis extents
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half of the size along each axis
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Test if a point lies inside or on the box
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

// ============================================================================
// BOUNDING SPHERE
// ============================================================================

/// Sphere used by culling code; radius is never negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere of an empty point set
    pub const ZERO: BoundingSphere = BoundingSphere { center: Vec3::ZERO, radius: 0.0 };

    /// Extent-based sphere of a box: box center, largest half-extent
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            radius: aabb.half_extents().max_element(),
        }
    }

    /// Test if a point lies inside or on the sphere
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Bounding sphere of a point cloud
///
/// Independent of point order. An empty slice gives [`BoundingSphere::ZERO`].
///
/// # Example
///
/// ```
/// use glint_core::glam::Vec3;
/// use glint_core::glint::mesh::generate_bounding_sphere;
///
/// let sphere = generate_bounding_sphere(&[Vec3::splat(-1.0), Vec3::splat(1.0)]);
/// assert_eq!(sphere.center, Vec3::ZERO);
/// assert_eq!(sphere.radius, 1.0);
/// ```
pub fn generate_bounding_sphere(points: &[Vec3]) -> BoundingSphere {
    Aabb::from_points(points)
        .map(|aabb| BoundingSphere::from_aabb(&aabb))
        .unwrap_or(BoundingSphere::ZERO)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "bounding_tests.rs"]
mod tests;
