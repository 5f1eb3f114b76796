//! Vertical bound enforcement.
//!
//! A cheap axis-only guard, independent of the directional collision fans:
//! the camera may never sink below the floor envelope or rise above the
//! ceiling envelope, both derived once from the starting camera height.

use crate::camera::CameraPose;

/// How far below the initial camera height the floor sits.
pub const FLOOR_MARGIN: f32 = 1.0;
/// How far above the initial camera height the ceiling sits.
pub const CEILING_MARGIN: f32 = 15.0;

/// The floor/ceiling envelope for the session.
///
/// Derived once at session start; immutable unless explicitly reset with a
/// new initial height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBounds {
    /// Minimum allowed camera Y
    pub floor_y: f32,
    /// Maximum allowed camera Y
    pub ceiling_y: f32,
}

impl VerticalBounds {
    /// Derives the envelope from the camera's starting height.
    pub fn from_initial_height(initial_y: f32) -> Self {
        Self {
            floor_y: initial_y - FLOOR_MARGIN,
            ceiling_y: initial_y + CEILING_MARGIN,
        }
    }

    /// Clamps the pose into the envelope.
    ///
    /// The look-at target's Y is clamped to the same envelope so orientation
    /// does not fight the position clamp. Returns true if anything changed.
    pub fn clamp(&self, pose: &mut CameraPose) -> bool {
        let mut changed = false;

        if pose.position.y < self.floor_y {
            pose.position.y = self.floor_y;
            pose.target.y = pose.target.y.max(self.floor_y);
            changed = true;
        }
        if pose.position.y > self.ceiling_y {
            pose.position.y = self.ceiling_y;
            pose.target.y = pose.target.y.min(self.ceiling_y);
            changed = true;
        }

        changed
    }

    /// Returns true if the pose's position Y lies inside the envelope.
    pub fn contains(&self, pose: &CameraPose) -> bool {
        pose.position.y >= self.floor_y && pose.position.y <= self.ceiling_y
    }
}
