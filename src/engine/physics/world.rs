// Static scene colliders and the collision-aware body

use std::rc::Rc;

use glam::Vec3;
use parry3d::math::{Isometry, Vector};
use parry3d::query;
use parry3d::shape::{Capsule, SharedShape};

use super::body::{Body, Pose};

/// Distance kept between a swept body and the surface it hits, so the
/// body never ends a frame embedded in a collider
const COLLISION_SKIN: f32 = 0.001;

/// Immutable set of scene obstacles for swept-move queries.
///
/// Built once at scene setup and shared (read-only) by every collision
/// body; only static geometry is supported.
#[derive(Default)]
pub struct StaticColliders {
    shapes: Vec<(Isometry<f32>, SharedShape)>,
}

impl StaticColliders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis-aligned box obstacle centered at `center`
    pub fn add_cuboid(&mut self, center: Vec3, half_extents: Vec3) {
        self.shapes.push((
            Isometry::translation(center.x, center.y, center.z),
            SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
        ));
    }

    /// Number of registered obstacles
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Largest fraction of `delta` the given capsule can travel from
    /// `origin` before touching an obstacle, in `[0, 1]`.
    fn sweep(&self, capsule: &Capsule, origin: Vec3, delta: Vec3) -> f32 {
        let length = delta.length();
        if length == 0.0 {
            return 1.0;
        }

        let pos = Isometry::translation(origin.x, origin.y, origin.z);
        let vel = Vector::new(delta.x, delta.y, delta.z);
        let still = Vector::zeros();
        let skin_t = COLLISION_SKIN / length;

        let mut allowed = 1.0_f32;
        for (obstacle_pos, shape) in &self.shapes {
            let hit = query::time_of_impact(
                &pos,
                &vel,
                capsule,
                obstacle_pos,
                &still,
                shape.as_ref(),
                1.0,
                true,
            );
            if let Ok(Some(toi)) = hit {
                allowed = allowed.min((toi.toi - skin_t).max(0.0));
            }
        }
        allowed
    }
}

/// Body that sweeps its collision capsule against the scene on every
/// move and stops at first contact. No sliding, no dynamics.
pub struct KinematicBody {
    pose: Pose,
    capsule: Capsule,
    /// Capsule center relative to the pose position (feet)
    capsule_offset: Vec3,
    colliders: Rc<StaticColliders>,
}

impl KinematicBody {
    /// Create a body with the standard player capsule (radius 0.5,
    /// total height 2.0, feet at the pose position)
    pub fn new(pose: Pose, colliders: Rc<StaticColliders>) -> Self {
        Self {
            pose,
            capsule: Capsule::new_y(0.5, 0.5),
            capsule_offset: Vec3::new(0.0, 1.0, 0.0),
            colliders,
        }
    }
}

impl Body for KinematicBody {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    fn has_collisions(&self) -> bool {
        true
    }

    fn move_by(&mut self, delta: Vec3) {
        let center = self.pose.position + self.capsule_offset;
        let allowed = self.colliders.sweep(&self.capsule, center, delta);
        self.pose.position += delta * allowed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_scene() -> Rc<StaticColliders> {
        Rc::new(StaticColliders::new())
    }

    fn walled_scene() -> Rc<StaticColliders> {
        let mut colliders = StaticColliders::new();
        // wall across +Z, front face at z = 1.5
        colliders.add_cuboid(Vec3::new(0.0, 1.0, 2.0), Vec3::new(2.0, 1.0, 0.5));
        Rc::new(colliders)
    }

    #[test]
    fn test_free_move_applies_full_delta() {
        let mut body = KinematicBody::new(Pose::origin(), empty_scene());
        body.move_by(Vec3::new(0.0, 0.0, 2.0));
        assert!((body.pose().position.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_stops_at_wall() {
        let mut body = KinematicBody::new(Pose::origin(), walled_scene());
        body.move_by(Vec3::new(0.0, 0.0, 2.0));

        // capsule front starts at z = 0.5, wall face at z = 1.5: at most
        // one unit of travel before contact
        let z = body.pose().position.z;
        assert!(z > 0.8, "barely moved: z = {z}");
        assert!(z <= 1.0, "passed through wall: z = {z}");
    }

    #[test]
    fn test_move_away_from_wall_is_free() {
        let mut body = KinematicBody::new(Pose::origin(), walled_scene());
        body.move_by(Vec3::new(0.0, 0.0, -2.0));
        assert!((body.pose().position.z + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_blocked_body_stays_blocked() {
        let mut body = KinematicBody::new(Pose::origin(), walled_scene());
        body.move_by(Vec3::new(0.0, 0.0, 2.0));
        let stopped = body.pose().position.z;
        body.move_by(Vec3::new(0.0, 0.0, 2.0));
        assert!((body.pose().position.z - stopped).abs() < 0.01);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut body = KinematicBody::new(Pose::origin(), walled_scene());
        body.move_by(Vec3::ZERO);
        assert_eq!(body.pose().position, Vec3::ZERO);
    }

    #[test]
    fn test_reports_collisions() {
        let body = KinematicBody::new(Pose::origin(), empty_scene());
        assert!(body.has_collisions());
    }
}
