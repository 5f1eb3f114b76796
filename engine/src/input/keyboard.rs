//! Keyboard state tracking for walkthrough navigation.
//!
//! Decoupled from any windowing system: the embedding application maps its
//! native key events onto [`KeyCode`] and feeds press/release transitions
//! here. The engine only ever reads the derived boolean state.

/// Generic key codes for the keys the walkthrough cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Q,
    E,

    // Arrow keys (alternate movement)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Mode and diagnostics
    M,
    P,

    // Speed adjust (+ / -)
    Equal,
    Minus,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which movement keys are currently held.
///
/// Held keys produce continuous motion; the motion controller samples this
/// state once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W / ArrowUp - move toward the look-at target
    pub forward: bool,
    /// S / ArrowDown - move away from the look-at target
    pub backward: bool,
    /// A / ArrowLeft - strafe left
    pub left: bool,
    /// D / ArrowRight - strafe right
    pub right: bool,
    /// E - rise
    pub up: bool,
    /// Q - descend
    pub down: bool,
}

impl MovementKeys {
    /// Creates movement state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates state for a key press/release.
    ///
    /// Returns `true` if the key was a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::E => {
                self.up = pressed;
                true
            }
            KeyCode::Q => {
                self.down = pressed;
                true
            }
            _ => false,
        }
    }

    /// Whether any movement key is held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    /// Releases every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Forward/backward axis (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Left/right axis (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Up/down axis (-1, 0, or 1).
    pub fn up_axis(&self) -> i32 {
        (self.up as i32) - (self.down as i32)
    }
}

/// Complete keyboard state for the walkthrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    /// Held movement keys
    pub movement: MovementKeys,
}

impl KeyboardState {
    /// Creates keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed)
    }

    /// Resets all keyboard state.
    pub fn reset(&mut self) {
        self.movement.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_released() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
        assert_eq!(keys.up_axis(), 0);
    }

    #[test]
    fn test_wasd_and_arrows_alias() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        keys.handle_key(KeyCode::W, false);
        assert!(keys.handle_key(KeyCode::ArrowUp, true));
        assert!(keys.forward);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);
    }

    #[test]
    fn test_vertical_keys() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::E, true);
        assert_eq!(keys.up_axis(), 1);
        keys.handle_key(KeyCode::E, false);
        keys.handle_key(KeyCode::Q, true);
        assert_eq!(keys.up_axis(), -1);
    }

    #[test]
    fn test_non_movement_key_ignored() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::M, true));
        assert!(!keys.handle_key(KeyCode::Unknown, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_reset() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::Q, true);
        keys.reset();
        assert!(!keys.any_pressed());
    }
}
