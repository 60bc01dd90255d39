// Player controller: per-frame composition of movement and animation

use std::rc::Rc;

use log::{info, warn};

use crate::engine::anim::ClipRegistry;
use crate::engine::assets::LoadedModel;
use crate::engine::input::{InputState, KeyBindings};
use crate::engine::physics::{Body, KinematicBody, Pose, SimpleBody, StaticColliders};

use super::config::PlayerConfig;
use super::intent::MovementIntent;
use super::movement::apply_movement;
use super::selector::AnimationSelector;

/// Drives one player-controlled body.
///
/// Owns its configuration, key bindings, body and animation selector; the
/// body is never shared between controllers. `tick` is the single entry
/// point, invoked once per rendered frame by the host loop. None of its
/// failure modes escalate: a player with no body or missing clips
/// degrades to a logged no-op, never a dropped frame.
pub struct PlayerController {
    config: PlayerConfig,
    bindings: KeyBindings,
    body: Option<Box<dyn Body>>,
    selector: AnimationSelector,
    blending_applied: bool,
}

impl PlayerController {
    /// Create a controller over an explicit body
    pub fn new(config: PlayerConfig, bindings: KeyBindings, body: Box<dyn Body>) -> Self {
        Self {
            config,
            bindings,
            body: Some(body),
            selector: AnimationSelector::new(),
            blending_applied: false,
        }
    }

    /// Spawn a controller for a loaded model at the given pose.
    ///
    /// The body kind follows `config.collisions` and is fixed for the
    /// controller's lifetime. A model with no meshes yields a bodiless
    /// controller whose `tick` is a complete no-op.
    pub fn spawn(
        model: &LoadedModel,
        pose: Pose,
        config: PlayerConfig,
        bindings: KeyBindings,
        colliders: &Rc<StaticColliders>,
    ) -> Self {
        let body: Option<Box<dyn Body>> = if model.has_body() {
            if config.collisions {
                Some(Box::new(KinematicBody::new(pose, Rc::clone(colliders))))
            } else {
                Some(Box::new(SimpleBody::new(pose)))
            }
        } else {
            warn!(
                "Model '{}' has no meshes; player will be immobile",
                model.name
            );
            None
        };

        info!(
            "Spawned player for model '{}' (collisions: {})",
            model.name, config.collisions
        );

        Self {
            config,
            bindings,
            body,
            selector: AnimationSelector::new(),
            blending_applied: false,
        }
    }

    /// Per-frame hook: read input once, move, then reconcile animation
    /// with the same intent snapshot.
    pub fn tick(&mut self, input: &InputState, clips: &mut dyn ClipRegistry) {
        let Some(body) = self.body.as_deref_mut() else {
            return;
        };

        if !self.blending_applied {
            clips.set_blending(self.config.blending_enabled, self.config.blend_seconds);
            self.blending_applied = true;
        }

        let intent = MovementIntent::derive(input, &self.bindings, &self.config);
        apply_movement(body, &intent, &self.config);
        self.selector.select(clips, &intent, &self.config);
    }

    /// Current body pose, for follow cameras and logging
    pub fn pose(&self) -> Option<Pose> {
        self.body.as_ref().map(|b| b.pose())
    }

    /// Name of the clip the controller last asked for
    pub fn current_clip_name(&self) -> Option<&str> {
        self.selector.current_clip_name()
    }

    /// Change movement speed; takes effect on the next tick
    pub fn set_speed(&mut self, speed: f32) {
        self.config.linear_speed = speed;
    }

    /// Change turn rate; takes effect on the next tick
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.config.rotation_speed = speed;
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}
