//! Named viewpoints for scripted navigation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// A named viewpoint: where the camera stands and what it looks at.
///
/// Immutable values supplied by the waypoint list; the tween engine consumes
/// them and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Camera position
    pub position: Vec3,
    /// Look-at target
    #[serde(rename = "lookAt")]
    pub look_at: Vec3,
    /// Display name (e.g. "Kitchen")
    pub name: String,
}

impl Waypoint {
    /// Creates a waypoint from position, look-at target, and name.
    pub fn new(position: Vec3, look_at: Vec3, name: impl Into<String>) -> Self {
        Self {
            position,
            look_at,
            name: name.into(),
        }
    }

    /// The safe default viewpoint used when waypoint data is malformed:
    /// the viewer's starting pose at the building entrance.
    pub fn fallback() -> Self {
        let pose = CameraPose::default();
        Self::new(pose.position, pose.target, "Entrance")
    }

    /// Returns the waypoint itself when all coordinates are finite, or the
    /// fallback viewpoint otherwise. Navigation always proceeds.
    pub fn sanitized(self) -> Self {
        if self.position.is_finite() && self.look_at.is_finite() {
            self
        } else {
            log::warn!("waypoint '{}' has non-finite coordinates, using fallback", self.name);
            Self::fallback()
        }
    }

    /// The pose this waypoint describes.
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.look_at)
    }
}
