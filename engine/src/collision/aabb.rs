//! Axis-aligned bounding box math.
//!
//! Every solid in the walkthrough is approximated by a world-space AABB.
//! Ray queries use the slab method: intersect the ray with each pair of
//! axis-aligned planes and keep the overlapping interval. If the interval
//! is non-empty and ends in front of the origin, the ray hits the box.

use glam::Vec3;

/// A world-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates an AABB from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from a center point and full extents along each axis.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Computes the tightest AABB containing all given points.
    ///
    /// Returns `None` for an empty point set, or when any coordinate is
    /// non-finite (such geometry cannot act as a collider).
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        Some(Self { min, max })
    }

    /// Returns the full extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if any dimension of the box exceeds `threshold`.
    pub fn any_dimension_exceeds(&self, threshold: f32) -> bool {
        let s = self.size();
        s.x > threshold || s.y > threshold || s.z > threshold
    }

    /// Returns true if the point lies inside or on the surface of the box.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Performs a ray intersection test using the slab method.
    ///
    /// # Arguments
    ///
    /// * `origin` - Starting point of the ray
    /// * `dir` - Direction of the ray (must be normalized)
    ///
    /// # Returns
    ///
    /// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
    ///   If the ray starts inside the box, this is the distance to the exit face.
    /// * `None` - No intersection, or the box is entirely behind the origin.
    pub fn ray_intersect(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        // Inverse direction, guarding near-zero components
        let inv_dir = Vec3::new(
            if dir.x.abs() > 1e-10 { 1.0 / dir.x } else { f32::MAX * dir.x.signum() },
            if dir.y.abs() > 1e-10 { 1.0 / dir.y } else { f32::MAX * dir.y.signum() },
            if dir.z.abs() > 1e-10 { 1.0 / dir.z } else { f32::MAX * dir.z.signum() },
        );

        // Entry/exit times against the two YZ planes
        let t1 = (self.min.x - origin.x) * inv_dir.x;
        let t2 = (self.max.x - origin.x) * inv_dir.x;

        let mut t_min = t1.min(t2);
        let mut t_max = t1.max(t2);

        // The two XZ planes
        let t3 = (self.min.y - origin.y) * inv_dir.y;
        let t4 = (self.max.y - origin.y) * inv_dir.y;

        t_min = t_min.max(t3.min(t4));
        t_max = t_max.min(t3.max(t4));

        // The two XY planes
        let t5 = (self.min.z - origin.z) * inv_dir.z;
        let t6 = (self.max.z - origin.z) * inv_dir.z;

        t_min = t_min.max(t5.min(t6));
        t_max = t_max.min(t5.max(t6));

        if t_max >= t_min && t_max >= 0.0 {
            if t_min >= 0.0 {
                Some(t_min)
            } else {
                // Ray starts inside the box
                Some(t_max)
            }
        } else {
            None
        }
    }
}
