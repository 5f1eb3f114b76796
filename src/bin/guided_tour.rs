//! Guided Tour - Headless Walkthrough Demo
//!
//! Run with: `cargo run --bin guided_tour`
//!
//! Steps the camera through the default house tour with autoplay, then
//! switches to free-roam and walks forward until a wall rejects the move.
//! No window is opened; set `RUST_LOG=info` (or `debug`) to watch the
//! engine narrate each frame decision.
//!
//! The key bindings an interactive embedding would wire up:
//! - WASD / arrows: Move (free-roam)
//! - E / Q: Rise / descend
//! - M: Toggle free-roam mode
//! - P: Log the current pose (paste-ready waypoint coordinates)
//! - + / -: Adjust free-roam speed

use log::info;

use walkthrough_engine::app::{GuidedTour, WaypointEditor, WaypointList};
use walkthrough_engine::app::{demo_house_objects, house_protective_walls};
use walkthrough_engine::camera::{CameraPose, MotionController, MotionEvent};
use walkthrough_engine::collision::ColliderIndex;
use walkthrough_engine::input::{KeyCode, KeyboardState, classify_key};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut controller = MotionController::new(CameraPose::default());
    let mut index = ColliderIndex::default();

    // Before the scene finishes loading the index is empty and motion is
    // unrestricted; nothing below depends on load order.
    assert!(!index.is_ready());

    index.set_protective_walls(house_protective_walls());
    index.rebuild(&demo_house_objects());
    info!("collider index ready with {} volumes", index.len());

    run_scripted_tour(&mut controller, &index);
    run_free_roam(&mut controller, &index);

    // Capture the spot free-roam ended at, the way the editor would
    let mut captured = WaypointList::new();
    WaypointEditor::new().capture_into(controller.current_pose(), "Where I Stopped", &mut captured);
    controller.log_current_pose();
}

/// Plays the full default tour with autoplay until it deactivates.
fn run_scripted_tour(controller: &mut MotionController, index: &ColliderIndex) {
    let mut tour = GuidedTour::new(WaypointList::default_house_tour());
    tour.set_autoplay(true);
    tour.start(controller);

    let mut frames = 0u32;
    while tour.is_active() && frames < 60 * 60 {
        if let Some(MotionEvent::WaypointReached { name }) = controller.update(FRAME_DT, index) {
            tour.on_waypoint_reached(&name, controller);
        }
        frames += 1;
    }
    info!("scripted tour done after {frames} frames");
}

/// Walks forward in free-roam until collision validation rejects the move.
fn run_free_roam(controller: &mut MotionController, index: &ColliderIndex) {
    let mut keyboard = KeyboardState::new();

    // The M key toggles free-roam, routed the way a window loop would
    if let Some(action) = classify_key(KeyCode::M) {
        controller.apply_action(action);
    }
    keyboard.handle_key(KeyCode::W, true);
    controller.set_movement(keyboard.movement);

    for _ in 0..600 {
        let before = controller.current_pose().position;
        let _ = controller.update(FRAME_DT, index);
        let after = controller.current_pose().position;

        if (after - before).length_squared() < 1e-12 {
            info!(
                "blocked at [{:.2}, {:.2}, {:.2}]",
                after.x, after.y, after.z
            );
            break;
        }
    }

    keyboard.handle_key(KeyCode::W, false);
    controller.set_movement(keyboard.movement);

    // Floor clamp demonstration: try to sink below the envelope
    keyboard.handle_key(KeyCode::Q, true);
    controller.set_movement(keyboard.movement);
    for _ in 0..120 {
        let _ = controller.update(FRAME_DT, index);
    }
    let y = controller.current_pose().position.y;
    assert!(y >= controller.bounds().floor_y);
    info!("descent clamped at y = {y:.2}");
}
