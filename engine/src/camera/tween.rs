//! Waypoint Tween Engine
//!
//! Interpolates the camera pose from its current value to a waypoint over a
//! fixed duration with ease-in-out. Position and look-at target advance with
//! the same eased fraction so translation and orientation stay visually
//! coupled. Starting a new tween always begins from the *live* pose, never
//! from a previous tween's source, so retargeting produces no discontinuity.

use crate::camera::easing::EasingFunction;
use crate::camera::{CameraPose, Waypoint};

/// Default transition duration in seconds.
pub const DEFAULT_TWEEN_DURATION: f32 = 1.5;

/// An in-flight eased transition toward a waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointTween {
    /// Pose at the moment the tween started
    from: CameraPose,
    /// Destination waypoint
    to: Waypoint,
    /// Seconds elapsed since the start
    elapsed: f32,
    /// Total duration in seconds
    duration: f32,
    /// Easing curve applied to the progress fraction
    easing: EasingFunction,
}

impl WaypointTween {
    /// Starts a tween from `from` toward `to` with the default duration.
    pub fn new(from: CameraPose, to: Waypoint) -> Self {
        Self::with_duration(from, to, DEFAULT_TWEEN_DURATION)
    }

    /// Starts a tween with an explicit duration.
    ///
    /// A non-positive duration makes the tween complete on its first advance
    /// (degenerate transitions still fire their completion exactly once).
    pub fn with_duration(from: CameraPose, to: Waypoint, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing: EasingFunction::default(),
        }
    }

    /// The destination waypoint.
    pub fn destination(&self) -> &Waypoint {
        &self.to
    }

    /// Progress fraction in [0, 1] before easing.
    pub fn progress(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether the tween has reached its destination.
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advances the clock by `dt` seconds and returns true exactly when the
    /// tween finishes on this call.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed += dt.max(0.0);
        self.is_finished()
    }

    /// Samples the pose at the current progress.
    ///
    /// Position and look-at target use the same eased fraction.
    pub fn sample(&self) -> CameraPose {
        let t = self.easing.evaluate(self.progress());
        let to = self.to.pose();
        CameraPose::new(
            self.from.position.lerp(to.position, t),
            self.from.target.lerp(to.target, t),
        )
    }
}
