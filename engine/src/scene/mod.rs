//! Scene Module
//!
//! Describes the static geometry the collider index is built from. The
//! walkthrough engine never loads 3D assets itself; whatever owns the scene
//! (a glTF loader, a procedural generator, a test fixture) hands the index a
//! slice of [`GeometryObject`] descriptions at build time and is never
//! consulted again until an explicit rebuild.

use glam::Vec3;

use crate::collision::Aabb;

/// One renderable object in the environment, as seen by the collider index.
///
/// Bounds may be supplied precomputed (the usual case for loaded models) or
/// derived lazily from the object's vertex positions. An object with neither
/// is simply not a collider.
#[derive(Debug, Clone)]
pub struct GeometryObject {
    /// Identifier carried through into the collider volume for diagnostics
    pub name: String,
    /// Precomputed world-space bounds, if the asset pipeline provided them
    pub bounds: Option<Aabb>,
    /// World-space vertex positions, used to compute bounds when `bounds` is `None`
    pub points: Vec<Vec3>,
    /// Explicit "treat me as a collider" marker, regardless of size
    pub is_collider: bool,
    /// Base surface color (r, g, b in 0..=1), when known
    pub color: Option<[f32; 3]>,
}

impl GeometryObject {
    /// Creates a bare geometry object with no bounds, points, or markers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: None,
            points: Vec::new(),
            is_collider: false,
            color: None,
        }
    }

    /// Sets precomputed world-space bounds.
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets vertex positions for lazy bounds computation.
    pub fn with_points(mut self, points: Vec<Vec3>) -> Self {
        self.points = points;
        self
    }

    /// Marks the object as a collider regardless of its size.
    pub fn marked_collider(mut self) -> Self {
        self.is_collider = true;
        self
    }

    /// Sets the base surface color.
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns this object's world-space bounds.
    ///
    /// Prefers precomputed bounds; otherwise computes them from the vertex
    /// positions. Returns `None` when neither source yields a usable box.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.bounds.or_else(|| Aabb::from_points(&self.points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precomputed_bounds_win() {
        let precomputed = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let obj = GeometryObject::new("wall")
            .with_bounds(precomputed)
            .with_points(vec![Vec3::splat(100.0)]);
        assert_eq!(obj.bounding_box(), Some(precomputed));
    }

    #[test]
    fn test_lazy_bounds_from_points() {
        let obj = GeometryObject::new("mesh").with_points(vec![
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(2.0, 3.0, 1.0),
        ]);
        let aabb = obj.bounding_box().unwrap();
        assert_eq!(aabb.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_no_bounds_available() {
        let obj = GeometryObject::new("empty");
        assert!(obj.bounding_box().is_none());
    }
}
