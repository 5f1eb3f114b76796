//! Walkthrough Engine Library
//!
//! A collision-aware camera engine for guided tours through static 3D
//! interiors. The engine owns the camera pose and validates every proposed
//! move against an indexed, approximate representation of the scene, so the
//! camera can neither clip through walls nor sink below the floor.
//!
//! # Modules
//!
//! - [`scene`] - Geometry descriptions consumed when building the collider index
//! - [`collision`] - AABB math, the scene collider index, and proximity queries
//! - [`camera`] - Camera pose, vertical bounds, waypoint tweening, and the motion controller
//! - [`input`] - Platform-agnostic key codes and movement/tour key state
//!
//! # Example
//!
//! ```ignore
//! use walkthrough_engine::camera::{CameraPose, MotionController, Waypoint};
//! use walkthrough_engine::collision::ColliderIndex;
//! use glam::Vec3;
//!
//! let mut index = ColliderIndex::default();
//! index.rebuild(&scene_objects);
//!
//! let mut controller = MotionController::new(CameraPose::default());
//! controller.navigate_to(Waypoint::new(
//!     Vec3::new(0.0, 1.6, -10.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     "Dining Room",
//! ));
//!
//! // Per-frame tick: propose -> clamp -> validate -> commit.
//! let event = controller.update(1.0 / 60.0, &index);
//! ```

pub mod camera;
pub mod collision;
pub mod input;
pub mod scene;

// Application glue modules (located in src/app/ directory)
#[path = "../../src/app/mod.rs"]
pub mod app;

// Re-export the most commonly used types at crate level for convenience
pub use camera::{CameraPose, MotionController, MotionEvent, MotionState, Waypoint};
pub use collision::{Aabb, ColliderIndex, CollisionConfig, ProtectiveWall};
pub use input::{KeyCode, KeyboardState, MovementKeys, TourAction};
pub use scene::GeometryObject;
