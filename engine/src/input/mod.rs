//! Input Module
//!
//! Platform-agnostic keyboard handling for the walkthrough. The embedding
//! application translates its native key events into [`KeyCode`] values;
//! the engine keeps only the derived boolean/numeric state.
//!
//! # Example
//!
//! ```
//! use walkthrough_engine::input::{KeyCode, KeyboardState, TourAction, classify_key};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::W, true);
//! assert!(keyboard.movement.forward);
//!
//! assert_eq!(classify_key(KeyCode::M), Some(TourAction::ToggleFreeRoam));
//! ```

pub mod actions;
pub mod keyboard;

// Re-export commonly used types at module level
pub use actions::{TourAction, classify_key};
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
