//! Waypoint Editor
//!
//! Captures the live camera pose as a named waypoint. Coordinates are
//! rounded to two decimals so saved lists stay diff-friendly and match the
//! format the pose diagnostic log prints.

use glam::Vec3;
use log::info;

use crate::app::waypoints::WaypointList;
use crate::camera::{CameraPose, Waypoint};

/// Builds waypoints from live camera poses.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaypointEditor;

impl WaypointEditor {
    /// Creates an editor.
    pub fn new() -> Self {
        Self
    }

    /// Snapshots `pose` as a waypoint named `name`, rounded to two decimals.
    pub fn capture(&self, pose: CameraPose, name: &str) -> Waypoint {
        Waypoint::new(round_vec(pose.position), round_vec(pose.target), name)
    }

    /// Snapshots `pose` and appends it to `list`.
    pub fn capture_into(&self, pose: CameraPose, name: &str, list: &mut WaypointList) {
        let waypoint = self.capture(pose, name);
        info!(
            "captured waypoint '{}' at [{:.2}, {:.2}, {:.2}]",
            waypoint.name, waypoint.position.x, waypoint.position.y, waypoint.position.z
        );
        list.add(waypoint);
    }
}

fn round_vec(v: Vec3) -> Vec3 {
    Vec3::new(round2(v.x), round2(v.y), round2(v.z))
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_rounds_to_two_decimals() {
        let pose = CameraPose::new(
            Vec3::new(1.23456, 2.71828, -3.14159),
            Vec3::new(0.005, -0.005, 10.0),
        );
        let waypoint = WaypointEditor::new().capture(pose, "Study");

        assert_eq!(waypoint.name, "Study");
        assert_eq!(waypoint.position, Vec3::new(1.23, 2.72, -3.14));
        assert_eq!(waypoint.look_at.z, 10.0);
        assert!((waypoint.look_at.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_capture_into_appends() {
        let mut list = WaypointList::new();
        let editor = WaypointEditor::new();
        editor.capture_into(CameraPose::default(), "Entrance", &mut list);

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().name, "Entrance");
    }
}
