//! Camera Motion Controller
//!
//! The state machine that decides which motion source drives the camera each
//! frame and validates every proposed pose before it becomes visible. The
//! controller owns pose mutation entirely: nothing else writes the camera
//! pose, so there is exactly one propose -> clamp -> validate -> commit path.
//!
//! Per tick, in order: the active motion source proposes a pose, the
//! vertical bounds clamp it, the collision fans validate it, and on
//! violation the whole delta is discarded (the pose reverts to the last
//! committed one). A rejected move is ordinary control flow, not an error,
//! and never changes the motion state.

use glam::Vec3;
use log::{debug, info};

use crate::camera::bounds::VerticalBounds;
use crate::camera::tween::WaypointTween;
use crate::camera::{CameraPose, Waypoint};
use crate::collision::{ColliderIndex, CollisionConfig, CollisionQuery};
use crate::input::MovementKeys;

/// Lowest allowed free-roam speed (units per frame).
pub const SPEED_MIN: f32 = 0.1;
/// Highest allowed free-roam speed (units per frame).
pub const SPEED_MAX: f32 = 2.0;
/// Increment used by speed-adjust keys.
pub const SPEED_STEP: f32 = 0.1;
/// Starting free-roam speed.
pub const DEFAULT_SPEED: f32 = 0.5;

/// Which motion source currently drives the camera.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MotionState {
    /// No target, pose static
    #[default]
    Idle,
    /// A tween drives the pose toward a waypoint
    AnimatingToWaypoint(WaypointTween),
    /// Keyboard translation drives the pose directly
    FreeRoam,
}

/// Notification emitted by [`MotionController::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum MotionEvent {
    /// A waypoint tween ran to completion
    WaypointReached {
        /// Name of the reached waypoint
        name: String,
    },
}

/// Owns the live camera pose and orchestrates all motion.
#[derive(Debug, Clone)]
pub struct MotionController {
    /// Last committed (known-safe) pose; the only pose rendering ever sees
    pose: CameraPose,
    /// Active motion source
    state: MotionState,
    /// Free-roam movement flags, fed from keyboard state
    movement: MovementKeys,
    /// Free-roam translation per frame, clamped to [SPEED_MIN, SPEED_MAX]
    speed: f32,
    /// Whether collision validation runs at all
    collision_enabled: bool,
    /// Floor/ceiling envelope, derived from the initial pose height
    bounds: VerticalBounds,
    /// Ray-fan query front-end
    query: CollisionQuery,
}

impl MotionController {
    /// Creates a controller at the given starting pose.
    ///
    /// The vertical envelope is derived from the starting height, and
    /// collision validation starts enabled.
    pub fn new(initial_pose: CameraPose) -> Self {
        Self::with_config(initial_pose, CollisionConfig::default())
    }

    /// Creates a controller with explicit collision tuning.
    pub fn with_config(initial_pose: CameraPose, config: CollisionConfig) -> Self {
        Self {
            pose: initial_pose,
            state: MotionState::Idle,
            movement: MovementKeys::default(),
            speed: DEFAULT_SPEED,
            collision_enabled: true,
            bounds: VerticalBounds::from_initial_height(initial_pose.position.y),
            query: CollisionQuery::new(config),
        }
    }

    /// The current committed pose.
    #[inline]
    pub fn current_pose(&self) -> CameraPose {
        self.pose
    }

    /// The active motion state.
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Whether a waypoint tween is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, MotionState::AnimatingToWaypoint(_))
    }

    /// Whether free-roam mode is active.
    pub fn is_free_roam(&self) -> bool {
        matches!(self.state, MotionState::FreeRoam)
    }

    /// The vertical envelope in force for this session.
    pub fn bounds(&self) -> VerticalBounds {
        self.bounds
    }

    /// Current free-roam speed.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the free-roam speed, clamped to the allowed range.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Nudges the speed by `delta` (typically ±[`SPEED_STEP`]).
    pub fn adjust_speed(&mut self, delta: f32) {
        self.set_speed(self.speed + delta);
        info!("move speed: {:.1}", self.speed);
    }

    /// Whether collision validation is enabled.
    pub fn collision_enabled(&self) -> bool {
        self.collision_enabled
    }

    /// Enables or disables collision validation. Takes effect on the next
    /// tick; the vertical bounds clamp is unaffected.
    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
        info!("collision validation {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Replaces the free-roam movement flags (call once per frame from
    /// keyboard state).
    pub fn set_movement(&mut self, movement: MovementKeys) {
        self.movement = movement;
    }

    /// Begins an eased transition toward `waypoint`.
    ///
    /// Any in-flight tween is discarded immediately and never completes; the
    /// new tween starts from the current live pose, so retargeting is free
    /// of discontinuities. Ignored while free-roam mode is active (the mode
    /// toggle, not waypoint selection, exits free-roam).
    pub fn navigate_to(&mut self, waypoint: Waypoint) {
        if self.is_free_roam() {
            debug!("navigate_to('{}') ignored during free-roam", waypoint.name);
            return;
        }
        let waypoint = waypoint.sanitized();
        info!("navigating to waypoint '{}'", waypoint.name);
        self.state = MotionState::AnimatingToWaypoint(WaypointTween::new(self.pose, waypoint));
    }

    /// Toggles free-roam mode.
    ///
    /// Entering kills any in-flight tween; both transitions clear the
    /// movement flags so stale input cannot leak into the next state.
    pub fn set_free_roam(&mut self, enabled: bool) {
        if enabled == self.is_free_roam() {
            return;
        }
        self.movement.reset();
        self.state = if enabled {
            MotionState::FreeRoam
        } else {
            MotionState::Idle
        };
        info!("free-roam {}", if enabled { "on" } else { "off" });
    }

    /// Emits the current position and look-at target as a diagnostic
    /// record, rounded to two decimals (the format waypoint authors paste
    /// back into waypoint lists).
    pub fn log_current_pose(&self) {
        let p = self.pose.position;
        let t = self.pose.target;
        info!(
            "camera position: [{:.2}, {:.2}, {:.2}], look at: [{:.2}, {:.2}, {:.2}]",
            p.x, p.y, p.z, t.x, t.y, t.z
        );
    }

    /// Applies a one-shot tour action (fired on key-down).
    pub fn apply_action(&mut self, action: crate::input::TourAction) {
        use crate::input::TourAction;
        match action {
            TourAction::ToggleFreeRoam => self.set_free_roam(!self.is_free_roam()),
            TourAction::LogPose => self.log_current_pose(),
            TourAction::SpeedUp => self.adjust_speed(SPEED_STEP),
            TourAction::SpeedDown => self.adjust_speed(-SPEED_STEP),
        }
    }

    /// Runs one frame tick.
    ///
    /// `dt` is the frame time in seconds (drives tween progress; free-roam
    /// steps are per-frame by design). Returns a [`MotionEvent`] when a
    /// tween completes this tick.
    pub fn update(&mut self, dt: f32, index: &ColliderIndex) -> Option<MotionEvent> {
        match &mut self.state {
            MotionState::Idle => {
                // The axis guard is unconditional, even with no motion source
                self.bounds.clamp(&mut self.pose);
                None
            }
            MotionState::AnimatingToWaypoint(tween) => {
                tween.advance(dt);
                let mut proposed = tween.sample();
                // Scripted paths are curated: only the bounds clamp applies
                self.bounds.clamp(&mut proposed);
                self.pose = proposed;

                if tween.is_finished() {
                    let name = tween.destination().name.clone();
                    self.state = MotionState::Idle;
                    Some(MotionEvent::WaypointReached { name })
                } else {
                    None
                }
            }
            MotionState::FreeRoam => {
                self.free_roam_step(index);
                None
            }
        }
    }

    /// Applies one frame of keyboard-driven translation, then validates.
    fn free_roam_step(&mut self, index: &ColliderIndex) {
        if !self.movement.any_pressed() {
            self.bounds.clamp(&mut self.pose);
            return;
        }

        let forward = self.pose.facing();
        let right = strafe_axis(forward);

        let delta = forward * (self.movement.forward_axis() as f32 * self.speed)
            + right * (self.movement.right_axis() as f32 * self.speed)
            + Vec3::Y * (self.movement.up_axis() as f32 * self.speed);

        // Translate position and target together so the viewing direction
        // survives the move
        let mut proposed = self.pose;
        proposed.translate(delta);
        self.bounds.clamp(&mut proposed);

        if self.collision_enabled
            && !(self.query.is_position_safe(index, proposed.position)
                && self.query.view_is_clear(index, proposed.position, proposed.facing()))
        {
            // Full rejection: discard the delta, keep the committed pose
            log::trace!("move rejected at {:?}", proposed.position);
            return;
        }

        self.pose = proposed;
    }
}

/// The strafe axis: world-up crossed with the facing direction, normalized.
///
/// Degenerate when facing straight up or down, in which case strafing is
/// suppressed rather than producing a NaN direction.
fn strafe_axis(forward: Vec3) -> Vec3 {
    let right = Vec3::Y.cross(forward);
    if right.length_squared() > 1e-8 {
        right.normalize()
    } else {
        Vec3::ZERO
    }
}
