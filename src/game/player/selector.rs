// Animation selection state machine

use log::{debug, warn};

use crate::engine::anim::{resolve_clip, ClipId, ClipRegistry};

use super::config::PlayerConfig;
use super::intent::MovementIntent;

/// Global playback scalar while dashing
const DASH_RATE_SCALE: f32 = 1.5;
/// Global playback scalar while moving backward (and not dashing)
const BACKWARD_RATE_SCALE: f32 = 0.7;

/// The three motion states the selector switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Walk,
    Run,
}

impl MotionState {
    /// Derive the target state from this frame's intent
    pub fn from_intent(intent: &MovementIntent) -> Self {
        if intent.moving() {
            if intent.dash {
                Self::Run
            } else {
                Self::Walk
            }
        } else {
            Self::Idle
        }
    }
}

/// Reconciles the playing clip with the target motion state, once per
/// frame.
///
/// Transitions are guarded on the clip *name*: stop/start is only issued
/// when the intended name changes, and the intended name is remembered
/// even when resolution fails so a missing clip is logged once and not
/// re-resolved every frame. An empty registry is re-checked every frame
/// since clips may register after the player spawns.
pub struct AnimationSelector {
    current_name: Option<String>,
    current_clip: Option<ClipId>,
    current_rate: f32,
    warned_empty: bool,
}

impl AnimationSelector {
    pub fn new() -> Self {
        Self {
            current_name: None,
            current_clip: None,
            current_rate: 1.0,
            warned_empty: false,
        }
    }

    /// Last intended clip name (kept even if resolution failed)
    pub fn current_clip_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// The clip actually playing, which lags the intended name after a
    /// failed resolution
    pub fn current_clip(&self) -> Option<ClipId> {
        self.current_clip
    }

    /// Per-frame reconciliation against the registry
    pub fn select(
        &mut self,
        registry: &mut dyn ClipRegistry,
        intent: &MovementIntent,
        config: &PlayerConfig,
    ) {
        if registry.is_empty() {
            if !self.warned_empty {
                warn!("Scene exposes no animation clips; skipping animation work");
                self.warned_empty = true;
            }
            return;
        }

        let state = MotionState::from_intent(intent);
        let (target, ratio) = match state {
            MotionState::Idle => (&config.clip_names.idle, config.clip_speed_ratios.idle),
            MotionState::Walk => (&config.clip_names.walk, config.clip_speed_ratios.walk),
            MotionState::Run => (&config.clip_names.run, config.clip_speed_ratios.run),
        };
        let scale = direction_scale(intent);
        let mut rate = ratio * scale;

        if self.current_name.as_deref() == Some(target.as_str()) {
            // Same clip; only the direction scalar may have changed
            // (e.g. walking forward vs backward)
            if self.current_clip.is_some() && rate != self.current_rate {
                registry.set_playback_rate(rate);
                self.current_rate = rate;
            }
            return;
        }

        let mut resolved = resolve_clip(registry, target);

        // Missing run clip while dashing falls back to walk at the
        // dash-adjusted rate rather than leaving the old clip running
        if resolved.is_none() && state == MotionState::Run {
            resolved = resolve_clip(registry, &config.clip_names.walk);
            if resolved.is_some() {
                rate = config.clip_speed_ratios.walk * scale;
                debug!(
                    "Run clip '{}' not found, falling back to '{}'",
                    target, config.clip_names.walk
                );
            }
        }

        match resolved {
            Some(clip) => {
                if let Some(previous) = self.current_clip {
                    registry.stop(previous);
                }
                registry.start(clip, true);
                registry.set_playback_rate(rate);
                debug!("Playing animation '{}' at rate {:.2}", target, rate);
                self.current_clip = Some(clip);
                self.current_rate = rate;
            }
            None => {
                // Logged once: the intended name is stored below, so the
                // lookup is not repeated until the target changes
                warn!("Animation clip '{}' not found in scene", target);
            }
        }

        self.current_name = Some(target.clone());
    }
}

impl Default for AnimationSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn direction_scale(intent: &MovementIntent) -> f32 {
    if intent.dash && intent.moving() {
        DASH_RATE_SCALE
    } else if intent.backward {
        BACKWARD_RATE_SCALE
    } else {
        1.0
    }
}
