// Player movement & animation-state control
//
// One configurable controller replaces the near-identical demo variants:
// collision on/off, dash on/off, and blending on/off are `PlayerConfig`
// fields, not separate code paths.
//
// - `config`: tuning and clip names, with documented defaults
// - `intent`: per-frame snapshot of what the held keys ask for
// - `movement`: intent -> translation/rotation of the body
// - `selector`: intent -> which clip plays, at which rate
// - `controller`: composes the above behind one per-frame hook

pub mod config;
pub mod controller;
pub mod intent;
pub mod movement;
pub mod selector;

pub use config::{ClipNames, ClipSpeedRatios, PlayerConfig};
pub use controller::PlayerController;
pub use intent::MovementIntent;
pub use selector::{AnimationSelector, MotionState};
