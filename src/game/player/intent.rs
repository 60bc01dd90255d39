// Per-frame movement intent

use crate::engine::input::{Action, InputState, KeyBindings};

use super::config::PlayerConfig;

/// What the player is asking for this frame, derived exactly once per
/// tick so movement and animation see the same snapshot.
///
/// Forward and backward are deliberately not mutually exclusive, and
/// dash is independent of movement (it only matters combined with it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub dash: bool,
}

impl MovementIntent {
    /// Fold the held-key state through the bindings
    pub fn derive(input: &InputState, bindings: &KeyBindings, config: &PlayerConfig) -> Self {
        let held = |action: Action| {
            bindings
                .keys_for(action)
                .iter()
                .any(|key| input.is_held(*key))
        };

        Self {
            forward: held(Action::MoveForward),
            backward: held(Action::MoveBackward),
            turn_left: held(Action::TurnLeft),
            turn_right: held(Action::TurnRight),
            dash: config.dash_enabled && held(Action::Dash),
        }
    }

    /// Whether any translation is requested
    pub fn moving(&self) -> bool {
        self.forward || self.backward
    }
}
