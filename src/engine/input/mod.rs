// Input handling
//
// Keyboard events from the window system are folded into a held-key set
// (`InputState`), which the player controller reads exactly once per
// frame. `KeyBindings` maps physical keys to abstract actions so control
// schemes are configuration, not code.

pub mod bindings;
pub mod state;

pub use bindings::{Action, KeyBindings};
pub use state::InputState;
