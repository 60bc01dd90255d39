// Animation clip registry and name resolution

/// Opaque handle to a registered clip (index in registration order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(pub usize);

/// Playback surface for named animation clips.
///
/// The engine side of the animation system: something that owns clips by
/// name and can start, stop, and rate-scale them. The playback rate is a
/// single global scalar (the scene time scale), not per-clip. Blending is
/// an opaque playback property passed through from player configuration.
pub trait ClipRegistry {
    /// Number of clips currently registered
    fn clip_count(&self) -> usize;

    /// Name of a clip, `None` if the id is stale
    fn clip_name(&self, clip: ClipId) -> Option<&str>;

    /// Start playing a clip
    fn start(&mut self, clip: ClipId, looping: bool);

    /// Stop a playing clip
    fn stop(&mut self, clip: ClipId);

    /// Set the global playback rate scalar
    fn set_playback_rate(&mut self, rate: f32);

    /// Configure blending between clip transitions (seconds)
    fn set_blending(&mut self, enabled: bool, blend_seconds: f32);

    /// Whether no clips are registered at all
    fn is_empty(&self) -> bool {
        self.clip_count() == 0
    }
}

/// Resolve a symbolic clip name against a registry.
///
/// Tolerates naming drift between configuration and model files: tries an
/// exact match, then an ASCII-case-insensitive match, then a
/// case-insensitive substring match (registered name *contains* the
/// target, so `"Walk"` finds `"walk_cycle"`). Each pass scans clips in
/// registration order and the first hit wins.
pub fn resolve_clip(registry: &dyn ClipRegistry, name: &str) -> Option<ClipId> {
    let count = registry.clip_count();

    for i in 0..count {
        if registry.clip_name(ClipId(i)) == Some(name) {
            return Some(ClipId(i));
        }
    }

    for i in 0..count {
        if let Some(candidate) = registry.clip_name(ClipId(i)) {
            if candidate.eq_ignore_ascii_case(name) {
                return Some(ClipId(i));
            }
        }
    }

    let needle = name.to_ascii_lowercase();
    for i in 0..count {
        if let Some(candidate) = registry.clip_name(ClipId(i)) {
            if candidate.to_ascii_lowercase().contains(&needle) {
                return Some(ClipId(i));
            }
        }
    }

    None
}

#[derive(Debug)]
struct Clip {
    name: String,
    playing: bool,
    looping: bool,
}

/// In-memory clip registry for a loaded scene.
///
/// Stands where the real engine's animation-group list would; clip names
/// come from the loaded model and playback state is tracked so the demo
/// can report what is playing.
#[derive(Debug)]
pub struct SceneClips {
    clips: Vec<Clip>,
    playback_rate: f32,
    blending_enabled: bool,
    blend_seconds: f32,
}

impl SceneClips {
    pub fn new() -> Self {
        Self {
            clips: Vec::new(),
            playback_rate: 1.0,
            blending_enabled: false,
            blend_seconds: 0.0,
        }
    }

    /// Register a clip; later registrations enumerate after earlier ones
    pub fn register(&mut self, name: &str) -> ClipId {
        self.clips.push(Clip {
            name: name.to_string(),
            playing: false,
            looping: false,
        });
        ClipId(self.clips.len() - 1)
    }

    /// Register every clip name from a loaded model
    pub fn register_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.register(name);
        }
    }

    /// Whether a clip is currently playing
    pub fn is_playing(&self, clip: ClipId) -> bool {
        self.clips.get(clip.0).map(|c| c.playing).unwrap_or(false)
    }

    /// Name of the clip currently playing, if any
    pub fn playing_name(&self) -> Option<&str> {
        self.clips
            .iter()
            .find(|c| c.playing)
            .map(|c| c.name.as_str())
    }

    /// Current global playback rate
    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }

    /// All registered clip names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.clips.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Default for SceneClips {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipRegistry for SceneClips {
    fn clip_count(&self) -> usize {
        self.clips.len()
    }

    fn clip_name(&self, clip: ClipId) -> Option<&str> {
        self.clips.get(clip.0).map(|c| c.name.as_str())
    }

    fn start(&mut self, clip: ClipId, looping: bool) {
        if let Some(c) = self.clips.get_mut(clip.0) {
            c.playing = true;
            c.looping = looping;
        }
    }

    fn stop(&mut self, clip: ClipId) {
        if let Some(c) = self.clips.get_mut(clip.0) {
            c.playing = false;
        }
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.playback_rate = rate;
    }

    fn set_blending(&mut self, enabled: bool, blend_seconds: f32) {
        self.blending_enabled = enabled;
        self.blend_seconds = blend_seconds;
    }
}
