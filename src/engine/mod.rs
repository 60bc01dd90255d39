// Engine modules: input, animation clips, collision, assets, frame timing

pub mod anim;
pub mod assets;
pub mod frame;
pub mod input;
pub mod physics;
