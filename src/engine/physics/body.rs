// Player body abstraction

use glam::Vec3;

/// Position and facing of a controlled body.
///
/// Yaw is in radians and unbounded; it is never wrapped, which does not
/// affect the trigonometry that consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f32,
}

impl Pose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Pose at the origin facing +Z
    pub fn origin() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::origin()
    }
}

/// A body the movement resolver can drive.
///
/// Whether moves go through collision is a fixed property of the body
/// instance: a given body either always moves freely or always delegates
/// to its swept-move primitive, never a mix.
pub trait Body {
    fn pose(&self) -> Pose;

    fn set_pose(&mut self, pose: Pose);

    /// Whether `move_by` performs collision-aware movement
    fn has_collisions(&self) -> bool {
        false
    }

    /// Apply a displacement. Free bodies add the vector directly;
    /// collision bodies sweep against the scene and stop at contact.
    fn move_by(&mut self, delta: Vec3);
}

/// Body with no collision participation: displacement is added directly
#[derive(Debug, Default)]
pub struct SimpleBody {
    pose: Pose,
}

impl SimpleBody {
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }
}

impl Body for SimpleBody {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    fn move_by(&mut self, delta: Vec3) {
        self.pose.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_pose() {
        let pose = Pose::origin();
        assert_eq!(pose.position, Vec3::ZERO);
        assert_eq!(pose.yaw, 0.0);
    }

    #[test]
    fn test_simple_body_set_pose() {
        let mut body = SimpleBody::default();
        body.set_pose(Pose::new(Vec3::new(1.0, 0.0, 2.0), 0.5));
        assert_eq!(body.pose().position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(body.pose().yaw, 0.5);
    }

    #[test]
    fn test_simple_body_move_accumulates() {
        let mut body = SimpleBody::default();
        body.move_by(Vec3::new(0.0, 0.0, 0.1));
        body.move_by(Vec3::new(0.0, 0.0, 0.1));
        assert!((body.pose().position.z - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_simple_body_reports_no_collisions() {
        let body = SimpleBody::default();
        assert!(!body.has_collisions());
    }

    #[test]
    fn test_move_does_not_touch_yaw() {
        let mut body = SimpleBody::new(Pose::new(Vec3::ZERO, 1.3));
        body.move_by(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(body.pose().yaw, 1.3);
    }
}
