// Player action definitions and key binding configuration

use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Represents all in-game actions the player controller responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    /// Adds `rotation_speed` to yaw (counter-clockwise seen from above)
    TurnLeft,
    /// Subtracts `rotation_speed` from yaw
    TurnRight,
    /// Modifier: only has an effect combined with movement
    Dash,
}

/// Configurable mapping from physical keys to actions.
///
/// The turn convention is fixed (`TurnLeft` always increases yaw); which
/// keys produce which action is pure data, so an inverted-turn scheme is
/// just a rebinding, not a separate code path.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// Create an empty binding table
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a key to an action, replacing any previous binding for that key
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.map.insert(key, action);
    }

    /// Remove the binding for a key
    pub fn unbind(&mut self, key: KeyCode) {
        self.map.remove(&key);
    }

    /// Look up the action bound to a key
    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// All keys currently bound to the given action
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.map
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no keys are bound
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    /// WASD + arrows, with either Shift held as the dash modifier
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyW, Action::MoveForward);
        bindings.bind(KeyCode::ArrowUp, Action::MoveForward);
        bindings.bind(KeyCode::KeyS, Action::MoveBackward);
        bindings.bind(KeyCode::ArrowDown, Action::MoveBackward);
        bindings.bind(KeyCode::KeyA, Action::TurnLeft);
        bindings.bind(KeyCode::ArrowLeft, Action::TurnLeft);
        bindings.bind(KeyCode::KeyD, Action::TurnRight);
        bindings.bind(KeyCode::ArrowRight, Action::TurnRight);
        bindings.bind(KeyCode::ShiftLeft, Action::Dash);
        bindings.bind(KeyCode::ShiftRight, Action::Dash);
        bindings
    }
}
