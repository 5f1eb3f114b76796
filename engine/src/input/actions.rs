//! Discrete tour actions triggered by single key presses.
//!
//! Movement is continuous state (see [`keyboard`](crate::input::keyboard));
//! everything else the walkthrough responds to is a one-shot action fired on
//! key-down.

use crate::input::KeyCode;

/// One-shot actions bound to single keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAction {
    /// Toggle free-roam navigation mode (default: M)
    ToggleFreeRoam,
    /// Emit the current pose as a diagnostic record (default: P)
    LogPose,
    /// Increase free-roam speed (default: +)
    SpeedUp,
    /// Decrease free-roam speed (default: -)
    SpeedDown,
}

/// Classifies a key-down event into a tour action, if it maps to one.
pub fn classify_key(key: KeyCode) -> Option<TourAction> {
    match key {
        KeyCode::M => Some(TourAction::ToggleFreeRoam),
        KeyCode::P => Some(TourAction::LogPose),
        KeyCode::Equal => Some(TourAction::SpeedUp),
        KeyCode::Minus => Some(TourAction::SpeedDown),
        _ => None,
    }
}
