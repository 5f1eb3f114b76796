//! Guided Tour Manager
//!
//! Steps the camera through the waypoint list in order. The tour itself
//! never moves the camera; it only issues `navigate_to` requests and reacts
//! to the waypoint-reached events the motion controller emits.

use log::{debug, info};

use crate::app::waypoints::WaypointList;
use crate::camera::MotionController;

/// Drives a [`MotionController`] through an ordered waypoint list.
#[derive(Debug, Clone)]
pub struct GuidedTour {
    waypoints: WaypointList,
    current: usize,
    active: bool,
    autoplay: bool,
}

impl GuidedTour {
    /// Creates an inactive tour over `waypoints`.
    pub fn new(waypoints: WaypointList) -> Self {
        Self {
            waypoints,
            current: 0,
            active: false,
            autoplay: false,
        }
    }

    /// The waypoint list being toured.
    pub fn waypoints(&self) -> &WaypointList {
        &self.waypoints
    }

    /// Index of the step the tour is at (or heading toward).
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Whether the tour has been started and not yet finished.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When enabled, reaching a waypoint immediately queues the next one.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    /// Starts (or restarts) the tour from the first waypoint.
    pub fn start(&mut self, controller: &mut MotionController) {
        if self.waypoints.is_empty() {
            debug!("tour start requested with no waypoints");
            return;
        }
        self.current = 0;
        self.active = true;
        self.navigate_current(controller);
    }

    /// Stops the tour without moving the camera.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Jumps the tour to `step` and navigates there.
    pub fn navigate_to_step(&mut self, step: usize, controller: &mut MotionController) {
        if step >= self.waypoints.len() {
            debug!("ignoring navigation to out-of-range step {step}");
            return;
        }
        self.current = step;
        self.active = true;
        self.navigate_current(controller);
    }

    /// Advances to the next waypoint, if one remains.
    ///
    /// Returns `true` if a navigation was issued.
    pub fn next_step(&mut self, controller: &mut MotionController) -> bool {
        if !self.active || self.current + 1 >= self.waypoints.len() {
            return false;
        }
        self.current += 1;
        self.navigate_current(controller);
        true
    }

    /// Handles a click on the hotspot for `step`.
    ///
    /// Clicking the step the tour is currently at advances to the next one;
    /// clicking any other step navigates straight to it.
    pub fn on_hotspot_clicked(&mut self, step: usize, controller: &mut MotionController) {
        if self.active && step == self.current {
            if !self.next_step(controller) {
                info!("tour finished at final waypoint");
                self.active = false;
            }
        } else {
            self.navigate_to_step(step, controller);
        }
    }

    /// Notifies the tour that the controller reached the waypoint it was
    /// animating toward. With autoplay enabled this queues the next step;
    /// at the final waypoint the tour deactivates.
    pub fn on_waypoint_reached(&mut self, name: &str, controller: &mut MotionController) {
        if !self.active {
            return;
        }
        info!("reached waypoint '{name}' (step {})", self.current);
        if !self.autoplay {
            return;
        }
        if !self.next_step(controller) {
            info!("tour finished at final waypoint");
            self.active = false;
        }
    }

    fn navigate_current(&self, controller: &mut MotionController) {
        if let Some(waypoint) = self.waypoints.get(self.current) {
            controller.navigate_to(waypoint.clone());
        }
    }
}
