// Player configuration

/// Symbolic clip names looked up in the scene's clip registry
#[derive(Debug, Clone)]
pub struct ClipNames {
    pub idle: String,
    pub walk: String,
    pub run: String,
}

impl Default for ClipNames {
    fn default() -> Self {
        Self {
            idle: "Survey".to_string(),
            walk: "Walk".to_string(),
            run: "Run".to_string(),
        }
    }
}

/// Intrinsic tempo of each clip, multiplied with the direction-based
/// playback scalar when a clip starts
#[derive(Debug, Clone, Copy)]
pub struct ClipSpeedRatios {
    pub idle: f32,
    pub walk: f32,
    pub run: f32,
}

impl Default for ClipSpeedRatios {
    fn default() -> Self {
        Self {
            idle: 1.0,
            walk: 1.0,
            run: 1.5,
        }
    }
}

/// Player tuning, fixed at spawn except through the documented mutators
/// on the controller.
///
/// Speeds are per frame tick, not per second: `linear_speed` in world
/// units/frame and `rotation_speed` in radians/frame. Values are taken
/// literally, including out-of-range ones; a negative speed simply walks
/// the math backwards.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Movement speed in units per frame
    pub linear_speed: f32,
    /// Turn rate in radians per frame
    pub rotation_speed: f32,
    /// Linear speed multiplier while dashing
    pub dash_multiplier: f32,
    pub clip_names: ClipNames,
    pub clip_speed_ratios: ClipSpeedRatios,
    /// Clip transition blend time, passed through to the clip registry
    pub blend_seconds: f32,
    /// Whether the body sweeps against scene colliders when moving
    pub collisions: bool,
    /// Whether the dash modifier has any effect
    pub dash_enabled: bool,
    /// Whether clip transitions blend
    pub blending_enabled: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            linear_speed: 0.1,
            rotation_speed: 0.02,
            dash_multiplier: 1.5,
            clip_names: ClipNames::default(),
            clip_speed_ratios: ClipSpeedRatios::default(),
            blend_seconds: 0.03,
            collisions: false,
            dash_enabled: true,
            blending_enabled: true,
        }
    }
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_linear_speed(mut self, speed: f32) -> Self {
        self.linear_speed = speed;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_dash_multiplier(mut self, multiplier: f32) -> Self {
        self.dash_multiplier = multiplier;
        self
    }

    pub fn with_clip_names(mut self, idle: &str, walk: &str, run: &str) -> Self {
        self.clip_names = ClipNames {
            idle: idle.to_string(),
            walk: walk.to_string(),
            run: run.to_string(),
        };
        self
    }

    pub fn with_clip_speed_ratios(mut self, idle: f32, walk: f32, run: f32) -> Self {
        self.clip_speed_ratios = ClipSpeedRatios { idle, walk, run };
        self
    }

    pub fn with_blend_seconds(mut self, seconds: f32) -> Self {
        self.blend_seconds = seconds;
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    pub fn with_dash(mut self, enabled: bool) -> Self {
        self.dash_enabled = enabled;
        self
    }

    pub fn with_blending(mut self, enabled: bool) -> Self {
        self.blending_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.linear_speed, 0.1);
        assert_eq!(config.rotation_speed, 0.02);
        assert_eq!(config.dash_multiplier, 1.5);
        assert_eq!(config.blend_seconds, 0.03);
        assert!(!config.collisions);
        assert!(config.dash_enabled);
        assert!(config.blending_enabled);
    }

    #[test]
    fn test_default_clip_names() {
        let names = ClipNames::default();
        assert_eq!(names.idle, "Survey");
        assert_eq!(names.walk, "Walk");
        assert_eq!(names.run, "Run");
    }

    #[test]
    fn test_default_speed_ratios() {
        let ratios = ClipSpeedRatios::default();
        assert_eq!(ratios.idle, 1.0);
        assert_eq!(ratios.walk, 1.0);
        assert_eq!(ratios.run, 1.5);
    }

    #[test]
    fn test_builder_overrides_merge_over_defaults() {
        let config = PlayerConfig::new()
            .with_linear_speed(2.0)
            .with_collisions(true)
            .with_clip_names("Idle", "walk_cycle", "sprint");

        assert_eq!(config.linear_speed, 2.0);
        assert!(config.collisions);
        assert_eq!(config.clip_names.walk, "walk_cycle");
        // untouched fields keep their defaults
        assert_eq!(config.rotation_speed, 0.02);
        assert_eq!(config.dash_multiplier, 1.5);
    }

    #[test]
    fn test_negative_speed_is_accepted() {
        // intentionally unvalidated: the literal value is used
        let config = PlayerConfig::new().with_linear_speed(-0.5);
        assert_eq!(config.linear_speed, -0.5);
    }
}
