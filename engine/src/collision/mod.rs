//! Collision Module
//!
//! Everything between the raw scene description and the yes/no answers the
//! camera needs: AABB math, the scene collider index, and the ray-fan
//! collision queries.

pub mod aabb;
pub mod index;
pub mod query;

// Re-export commonly used types at module level
pub use aabb::Aabb;
pub use index::{ColliderIndex, ColliderVolume, IndexConfig, ProtectiveWall, is_hazard_color};
pub use query::{CollisionConfig, CollisionQuery, SAFETY_FAN_SIZE, safety_directions};
