// Held-key input state

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Snapshot of which keys are currently held.
///
/// Written by key events as they arrive from the window system, read once
/// per frame by the player controller. Writes are single-flag updates with
/// last-write-wins semantics; the worst case of that model is a one-frame
/// delay in reacting to a key transition.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                // Key repeats just re-assert the held flag, which is harmless
                ElementState::Pressed => self.press(key_code),
                ElementState::Released => self.release(key_code),
            }
        }
    }

    /// Mark a key as held
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    /// Mark a key as released
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Check if a key is currently held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Release all keys (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held.clear();
    }

    /// Number of keys currently held
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_nothing_held() {
        let input = InputState::new();
        assert!(!input.is_held(KeyCode::KeyW));
        assert_eq!(input.held_count(), 0);
    }

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyW);
        assert!(input.is_held(KeyCode::KeyW));

        input.release(KeyCode::KeyW);
        assert!(!input.is_held(KeyCode::KeyW));
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut input = InputState::new();
        input.press(KeyCode::ShiftLeft);
        input.press(KeyCode::ShiftLeft);
        assert_eq!(input.held_count(), 1);

        input.release(KeyCode::ShiftLeft);
        assert!(!input.is_held(KeyCode::ShiftLeft));
    }

    #[test]
    fn test_release_without_press() {
        let mut input = InputState::new();
        input.release(KeyCode::KeyS);
        assert!(!input.is_held(KeyCode::KeyS));
    }

    #[test]
    fn test_multiple_keys_held() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyW);
        input.press(KeyCode::ShiftLeft);
        assert!(input.is_held(KeyCode::KeyW));
        assert!(input.is_held(KeyCode::ShiftLeft));
        assert_eq!(input.held_count(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = InputState::new();
        input.press(KeyCode::KeyW);
        input.press(KeyCode::KeyA);
        input.reset();
        assert_eq!(input.held_count(), 0);
    }
}
