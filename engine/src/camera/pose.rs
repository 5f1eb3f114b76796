//! Camera pose: the single source of truth for where the camera is and what
//! it faces.

use glam::Vec3;

/// Position plus look-at target. Exactly one pose is live at a time, owned
/// by the motion controller and read by whatever renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space
    pub position: Vec3,
    /// World-space point the camera looks at
    pub target: Vec3,
}

impl Default for CameraPose {
    /// The viewer's starting pose: eye level at the entrance, looking into
    /// the building.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.6, 10.0),
            target: Vec3::new(0.0, 1.6, 0.0),
        }
    }
}

impl CameraPose {
    /// Creates a pose from position and look-at target.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// The normalized facing direction (position toward target).
    ///
    /// Falls back to -Z when position and target coincide.
    pub fn facing(&self) -> Vec3 {
        let to_target = self.target - self.position;
        if to_target.length_squared() > 1e-8 {
            to_target.normalize()
        } else {
            Vec3::NEG_Z
        }
    }

    /// Translates position and target together, preserving the facing
    /// direction.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_normalized() {
        let pose = CameraPose::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        let facing = pose.facing();
        assert!((facing.length() - 1.0).abs() < 1e-6);
        assert!((facing - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_facing_degenerate_falls_back() {
        let pose = CameraPose::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(pose.facing(), Vec3::NEG_Z);
    }

    #[test]
    fn test_translate_preserves_facing() {
        let mut pose = CameraPose::default();
        let facing_before = pose.facing();
        pose.translate(Vec3::new(2.0, 0.5, -1.0));
        assert!((pose.facing() - facing_before).length() < 1e-6);
    }
}
