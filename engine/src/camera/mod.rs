//! Camera Module
//!
//! Camera pose, vertical bounds, waypoint tweening, and the motion
//! controller state machine that ties them together.

pub mod bounds;
pub mod controller;
pub mod easing;
pub mod pose;
pub mod tween;
pub mod waypoint;

// Re-export commonly used types at module level
pub use bounds::{CEILING_MARGIN, FLOOR_MARGIN, VerticalBounds};
pub use controller::{
    DEFAULT_SPEED, MotionController, MotionEvent, MotionState, SPEED_MAX, SPEED_MIN, SPEED_STEP,
};
pub use easing::EasingFunction;
pub use pose::CameraPose;
pub use tween::{DEFAULT_TWEEN_DURATION, WaypointTween};
pub use waypoint::Waypoint;
