// Math utilities and helper functions

use glam::Vec3;

/// Forward displacement basis for a given yaw angle (radians).
///
/// Movement happens in the XZ plane: yaw 0 faces +Z, yaw π/2 faces +X.
/// Multiply by a speed to get a per-frame displacement.
pub fn yaw_forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
