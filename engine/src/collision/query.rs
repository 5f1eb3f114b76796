//! Collision Query Service
//!
//! Answers "is it unsafe to be at point P, or to face direction D, within
//! distance L?" using discrete ray fans against the collider index. A true
//! swept-volume test is unnecessary for a point camera; a fixed fan of
//! directions is a cheap, conservative approximation biased toward
//! over-rejection, which is the right bias for a walkthrough viewer.
//!
//! Two independent guards exist and both are authoritative:
//! - the omnidirectional safety fan keeps the camera *body* away from walls;
//! - the wider viewing fan, tested at three times the distance, keeps the
//!   *view* from clipping through geometry even when the body would fit.
//!
//! An empty or not-yet-built index makes every query report "safe" (fail
//! open): motion is never frozen by incomplete data.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::collision::ColliderIndex;

/// Number of directions in the omnidirectional safety fan.
pub const SAFETY_FAN_SIZE: usize = 18;

/// Distance thresholds and fan shape for collision queries.
#[derive(Debug, Clone, Copy)]
pub struct CollisionConfig {
    /// Minimum allowed proximity to any collider volume
    pub collision_distance: f32,
    /// Number of rays in the viewing-direction fan
    pub num_view_rays: usize,
    /// How far the view rays spread from the facing direction
    pub view_spread: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            collision_distance: 4.5,
            num_view_rays: 12,
            view_spread: 0.3,
        }
    }
}

/// The fixed direction set tested by [`CollisionQuery::is_position_safe`].
///
/// Six axis directions, four horizontal diagonals, four vertical diagonals,
/// and four 3D diagonals toward +Z.
pub fn safety_directions() -> [Vec3; SAFETY_FAN_SIZE] {
    [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
        // Horizontal diagonals
        Vec3::new(1.0, 0.0, 1.0).normalize(),
        Vec3::new(-1.0, 0.0, 1.0).normalize(),
        Vec3::new(1.0, 0.0, -1.0).normalize(),
        Vec3::new(-1.0, 0.0, -1.0).normalize(),
        // Vertical diagonals
        Vec3::new(1.0, 1.0, 0.0).normalize(),
        Vec3::new(-1.0, 1.0, 0.0).normalize(),
        Vec3::new(1.0, -1.0, 0.0).normalize(),
        Vec3::new(-1.0, -1.0, 0.0).normalize(),
        // 3D diagonals
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(-1.0, 1.0, 1.0).normalize(),
        Vec3::new(1.0, -1.0, 1.0).normalize(),
        Vec3::new(-1.0, -1.0, 1.0).normalize(),
    ]
}

/// Stateless query front-end over a [`ColliderIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionQuery {
    /// Distance and fan configuration
    pub config: CollisionConfig,
}

impl CollisionQuery {
    /// Creates a query service with the given configuration.
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    /// Casts one ray and reports whether anything is hit within `max_distance`.
    ///
    /// `dir` must be normalized. An empty index always reports `false`.
    pub fn probe(&self, index: &ColliderIndex, origin: Vec3, dir: Vec3, max_distance: f32) -> bool {
        index.ray_test(origin, dir, max_distance)
    }

    /// Tests the omnidirectional safety fan around `position`.
    ///
    /// Returns `false` (unsafe) as soon as any direction hits a collider
    /// within `collision_distance`; remaining directions are not evaluated.
    pub fn is_position_safe(&self, index: &ColliderIndex, position: Vec3) -> bool {
        if index.is_empty() {
            return true;
        }
        for dir in safety_directions() {
            if self.probe(index, position, dir, self.config.collision_distance) {
                return false;
            }
        }
        true
    }

    /// Tests the viewing-direction fan from `origin` along `facing`.
    ///
    /// Ray 0 is the exact facing direction; the rest spread around it in a
    /// cone of `view_spread`. Each ray is tested at three times the collision
    /// distance, so the view stops short of walls well before the camera
    /// body would. Returns `true` when the view is clear.
    pub fn view_is_clear(&self, index: &ColliderIndex, origin: Vec3, facing: Vec3) -> bool {
        if index.is_empty() {
            return true;
        }
        let max_distance = self.config.collision_distance * 3.0;
        let n = self.config.num_view_rays.max(1);

        for i in 0..n {
            let dir = if i == 0 {
                facing
            } else {
                let angle = i as f32 * TAU / n as f32;
                let spread = self.config.view_spread;
                (facing + Vec3::new(angle.cos() * spread, angle.sin() * spread, 0.0)).normalize()
            };
            if self.probe(index, origin, dir, max_distance) {
                return false;
            }
        }
        true
    }
}
