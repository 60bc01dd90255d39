// Animation clip playback
//
// The player controller only knows clips by symbolic name; the registry
// resolves names (tolerant of case and substring drift between model
// files and configuration) and exposes start/stop/rate controls.

pub mod registry;

pub use registry::{resolve_clip, ClipId, ClipRegistry, SceneClips};
