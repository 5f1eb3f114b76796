//! Motion Tests - Controller State Machine and Collision Validation
//!
//! End-to-end tests for the motion controller: waypoint tweening, free-roam
//! validation against a collider index, and the vertical envelope.

use glam::Vec3;
use walkthrough_engine::camera::{CameraPose, MotionController, MotionEvent, Waypoint};
use walkthrough_engine::collision::{Aabb, ColliderIndex, ProtectiveWall};
use walkthrough_engine::input::MovementKeys;
use walkthrough_engine::scene::GeometryObject;

const DT: f32 = 1.0 / 60.0;

/// A single wall spanning x in [9, 11], tall and wide enough that walking
/// in +x must be stopped by it.
fn wall_index() -> ColliderIndex {
    let mut index = ColliderIndex::default();
    index.rebuild(&[GeometryObject::new("wall").with_bounds(Aabb::new(
        Vec3::new(9.0, 0.0, -60.0),
        Vec3::new(11.0, 20.0, 60.0),
    ))]);
    index
}

/// Eye-level pose at `x`, facing +x.
fn facing_wall_pose(x: f32) -> CameraPose {
    CameraPose::new(Vec3::new(x, 1.6, 0.0), Vec3::new(x + 10.0, 1.6, 0.0))
}

fn forward_keys() -> MovementKeys {
    let mut keys = MovementKeys::default();
    keys.forward = true;
    keys
}

// ============================================================================
// Free-Roam Collision Validation
// ============================================================================

#[test]
fn test_walk_toward_wall_stops_short() {
    let index = wall_index();
    let mut controller = MotionController::new(facing_wall_pose(-20.0));
    controller.set_free_roam(true);
    controller.set_movement(forward_keys());

    for _ in 0..100 {
        let _ = controller.update(DT, &index);
        // The camera must never get close to the wall face at x = 9
        assert!(controller.current_pose().position.x < 8.5);
    }

    // The viewing fan reaches 13.5 units, so the stop is at x = -4.5
    let final_x = controller.current_pose().position.x;
    assert!((final_x - (-4.5)).abs() < 1e-4, "stopped at x = {final_x}");
}

#[test]
fn test_collision_disabled_walks_through_wall() {
    let index = wall_index();
    let mut controller = MotionController::new(facing_wall_pose(-20.0));
    controller.set_free_roam(true);
    controller.set_collision_enabled(false);
    controller.set_movement(forward_keys());

    for _ in 0..120 {
        let _ = controller.update(DT, &index);
    }

    // 120 steps of 0.5 from x = -20 passes well beyond the wall
    assert!(controller.current_pose().position.x > 11.0);
}

#[test]
fn test_rejected_move_preserves_whole_pose() {
    let index = wall_index();
    // Close enough that any forward proposal fails the viewing fan
    let mut controller = MotionController::new(facing_wall_pose(0.0));
    controller.set_free_roam(true);
    controller.set_movement(forward_keys());

    let before = controller.current_pose();
    let _ = controller.update(DT, &index);
    let after = controller.current_pose();

    assert_eq!(after.position, before.position);
    assert_eq!(after.target, before.target);
}

#[test]
fn test_strafe_allowed_when_view_is_clear() {
    let index = wall_index();
    // Facing away from the wall; the wall sits behind, outside the safety fan
    let mut controller = MotionController::new(CameraPose::new(
        Vec3::new(0.0, 1.6, 0.0),
        Vec3::new(-10.0, 1.6, 0.0),
    ));
    controller.set_free_roam(true);

    let mut keys = MovementKeys::default();
    keys.left = true;
    controller.set_movement(keys);

    let _ = controller.update(DT, &index);
    assert!(controller.current_pose().position.z != 0.0);
}

#[test]
fn test_empty_index_fails_open() {
    let index = ColliderIndex::default();
    assert!(!index.is_ready());

    let mut controller = MotionController::new(facing_wall_pose(0.0));
    controller.set_free_roam(true);
    controller.set_movement(forward_keys());

    let _ = controller.update(DT, &index);
    assert!(controller.current_pose().position.x > 0.0);
}

#[test]
fn test_protective_wall_blocks_like_geometry() {
    let mut index = ColliderIndex::default();
    index.set_protective_walls(vec![ProtectiveWall::new(
        Vec3::new(10.0, 10.0, 0.0),
        Vec3::new(2.0, 20.0, 120.0),
        "boundary",
    )]);
    index.rebuild(&[]);

    let mut controller = MotionController::new(facing_wall_pose(0.0));
    controller.set_free_roam(true);
    controller.set_movement(forward_keys());

    let before = controller.current_pose().position;
    let _ = controller.update(DT, &index);
    assert_eq!(controller.current_pose().position, before);
}

// ============================================================================
// Vertical Envelope
// ============================================================================

#[test]
fn test_descent_clamps_to_floor() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(facing_wall_pose(0.0));
    controller.set_free_roam(true);

    let mut keys = MovementKeys::default();
    keys.down = true;
    controller.set_movement(keys);

    let floor = controller.bounds().floor_y;
    assert!((floor - 0.6).abs() < 1e-6);

    for _ in 0..10 {
        let _ = controller.update(DT, &index);
        assert!(controller.current_pose().position.y >= floor);
    }
    // Settles exactly on the floor, not hovering above it
    assert_eq!(controller.current_pose().position.y, floor);
}

#[test]
fn test_tween_respects_ceiling() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(CameraPose::default());
    let ceiling = controller.bounds().ceiling_y;

    controller.navigate_to(Waypoint::new(
        Vec3::new(0.0, 50.0, 0.0),
        Vec3::new(0.0, 1.6, -5.0),
        "Attic",
    ));

    let mut finished = false;
    for _ in 0..200 {
        if controller.update(DT, &index).is_some() {
            finished = true;
        }
        assert!(controller.current_pose().position.y <= ceiling);
    }
    assert!(finished);
    assert_eq!(controller.current_pose().position.y, ceiling);
}

// ============================================================================
// Waypoint Navigation
// ============================================================================

#[test]
fn test_completed_navigation_lands_on_waypoint() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(CameraPose::default());

    let waypoint = Waypoint::new(
        Vec3::new(-11.79, 2.01, 27.0),
        Vec3::new(-11.78, 1.99, 26.61),
        "Kitchen",
    );
    controller.navigate_to(waypoint.clone());

    let mut event = None;
    for _ in 0..200 {
        if let Some(e) = controller.update(DT, &index) {
            event = Some(e);
            break;
        }
    }

    assert_eq!(
        event,
        Some(MotionEvent::WaypointReached {
            name: "Kitchen".into()
        })
    );
    let pose = controller.current_pose();
    assert!((pose.position - waypoint.position).length() < 1e-3);
    assert!((pose.target - waypoint.look_at).length() < 1e-3);

    // No further event once idle
    assert_eq!(controller.update(DT, &index), None);
}

#[test]
fn test_repeated_navigate_to_same_waypoint_is_idempotent() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(CameraPose::default());

    let waypoint = Waypoint::new(
        Vec3::new(0.0, 1.6, -10.0),
        Vec3::new(0.0, 1.0, 0.0),
        "Dining Room",
    );
    // Back-to-back requests with no tick in between: the second restarts
    // the tween from the unchanged live pose, so the outcome is the same
    controller.navigate_to(waypoint.clone());
    controller.navigate_to(waypoint.clone());

    let mut events = Vec::new();
    for _ in 0..200 {
        if let Some(e) = controller.update(DT, &index) {
            events.push(e);
        }
    }

    assert_eq!(
        events,
        vec![MotionEvent::WaypointReached {
            name: "Dining Room".into()
        }]
    );
    let pose = controller.current_pose();
    assert!((pose.position - waypoint.position).length() < 1e-3);
    assert!((pose.target - waypoint.look_at).length() < 1e-3);
}

#[test]
fn test_retarget_mid_flight_fires_single_event() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(CameraPose::default());

    controller.navigate_to(Waypoint::new(
        Vec3::new(5.0, 2.6, 5.0),
        Vec3::new(0.0, 1.6, 0.0),
        "A",
    ));
    // Partway through, retarget; A's completion must never fire
    for _ in 0..20 {
        assert_eq!(controller.update(DT, &index), None);
    }
    let b = Waypoint::new(Vec3::new(-5.0, 3.0, -5.0), Vec3::new(0.0, 1.6, 0.0), "B");
    controller.navigate_to(b.clone());

    let mut events = Vec::new();
    for _ in 0..200 {
        if let Some(e) = controller.update(DT, &index) {
            events.push(e);
        }
    }

    assert_eq!(
        events,
        vec![MotionEvent::WaypointReached { name: "B".into() }]
    );
    assert!((controller.current_pose().position - b.position).length() < 1e-3);
}

#[test]
fn test_sequential_navigations_fire_two_events() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(CameraPose::default());
    let mut names = Vec::new();

    for (pos, name) in [
        (Vec3::new(5.0, 2.6, 5.0), "A"),
        (Vec3::new(-5.0, 3.0, -5.0), "B"),
    ] {
        controller.navigate_to(Waypoint::new(pos, Vec3::new(0.0, 1.6, 0.0), name));
        for _ in 0..200 {
            if let Some(MotionEvent::WaypointReached { name }) = controller.update(DT, &index) {
                names.push(name);
                break;
            }
        }
    }

    assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_degenerate_waypoint_replaced_by_fallback() {
    let index = ColliderIndex::default();
    let mut controller = MotionController::new(CameraPose::default());

    controller.navigate_to(Waypoint::new(
        Vec3::new(f32::NAN, 1.6, 0.0),
        Vec3::new(0.0, 1.6, 0.0),
        "Broken",
    ));

    let mut event = None;
    for _ in 0..200 {
        if let Some(e) = controller.update(DT, &index) {
            event = Some(e);
            break;
        }
        assert!(controller.current_pose().position.is_finite());
    }

    let fallback = Waypoint::fallback();
    assert_eq!(
        event,
        Some(MotionEvent::WaypointReached {
            name: fallback.name.clone()
        })
    );
    assert!((controller.current_pose().position - fallback.position).length() < 1e-3);
}
