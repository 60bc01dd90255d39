// Movement resolution: intent -> pose update for one frame

use crate::core::math::yaw_forward;
use crate::engine::physics::Body;

use super::config::PlayerConfig;
use super::intent::MovementIntent;

/// Apply one frame of translation and rotation to the body.
///
/// Order matters and is fixed: forward displacement, then backward
/// displacement, then rotation. Each displacement reads the yaw current
/// at its own application; because rotation comes last, holding forward
/// and backward together applies both vectors at the same yaw and nets
/// to zero rather than drifting.
pub fn apply_movement(body: &mut dyn Body, intent: &MovementIntent, config: &PlayerConfig) {
    let speed = if intent.dash {
        config.linear_speed * config.dash_multiplier
    } else {
        config.linear_speed
    };

    if intent.forward {
        let delta = yaw_forward(body.pose().yaw) * speed;
        body.move_by(delta);
    }

    if intent.backward {
        let delta = -(yaw_forward(body.pose().yaw) * speed);
        body.move_by(delta);
    }

    let mut turn = 0.0;
    if intent.turn_left {
        turn += config.rotation_speed;
    }
    if intent.turn_right {
        turn -= config.rotation_speed;
    }
    if turn != 0.0 {
        let mut pose = body.pose();
        pose.yaw += turn;
        body.set_pose(pose);
    }
}
