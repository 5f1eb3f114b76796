//! Application Glue
//!
//! Everything the walkthrough binary needs on top of the engine: waypoint
//! lists with JSON persistence, the guided tour manager, the waypoint
//! editor, and the demo house scene.

pub mod editor;
pub mod house;
pub mod tour;
pub mod waypoints;

// Re-export commonly used types at module level
pub use editor::WaypointEditor;
pub use house::{demo_house_objects, house_protective_walls};
pub use tour::GuidedTour;
pub use waypoints::{WaypointFileError, WaypointList};
