// Collision and body movement
//
// The controller only sees the `Body` trait: a pose handle plus a move
// primitive. `SimpleBody` adds displacements directly; `KinematicBody`
// sweeps a capsule against the scene's static colliders and stops at
// contact. Which one a player gets is decided at spawn and never mixed.

pub mod body;
pub mod world;

pub use body::{Body, Pose, SimpleBody};
pub use world::{KinematicBody, StaticColliders};
