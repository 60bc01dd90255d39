// Game logic: the player controller and its configuration

pub mod player;
