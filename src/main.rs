use std::rc::Rc;

use anyhow::Result;
use glam::Vec3;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::anim::SceneClips;
use engine::assets::{self, LoadedModel, PendingModel};
use engine::frame::FrameClock;
use engine::input::{InputState, KeyBindings};
use engine::physics::{Pose, StaticColliders};
use game::player::{PlayerConfig, PlayerController};

/// Frames between status log lines (~1 Hz at 60 FPS)
const STATUS_LOG_INTERVAL: u64 = 60;

fn demo_colliders() -> Rc<StaticColliders> {
    let mut colliders = StaticColliders::new();
    // a few obstacles scattered around the walkable area
    colliders.add_cuboid(Vec3::new(4.0, 1.0, 6.0), Vec3::new(1.0, 1.0, 1.0));
    colliders.add_cuboid(Vec3::new(-5.0, 1.0, 3.0), Vec3::new(1.5, 1.0, 0.5));
    colliders.add_cuboid(Vec3::new(0.0, 1.0, -7.0), Vec3::new(2.0, 1.0, 1.0));
    Rc::new(colliders)
}

fn spawn_player(
    model: &LoadedModel,
    clips: &mut SceneClips,
    colliders: &Rc<StaticColliders>,
) -> PlayerController {
    clips.register_all(model.clip_names.iter().map(|s| s.as_str()));
    info!("Available animations: {:?}", clips.names());

    let config = PlayerConfig::new().with_collisions(true);
    PlayerController::spawn(
        model,
        Pose::origin(),
        config,
        KeyBindings::default(),
        colliders,
    )
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Meshwalk...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Meshwalk")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    let colliders = demo_colliders();
    let mut clips = SceneClips::new();
    let mut input = InputState::new();
    let mut clock = FrameClock::new();
    let mut players: Vec<PlayerController> = Vec::new();

    // Load the model manifest named on the command line, or fall back to
    // the built-in walker
    let mut pending: Option<PendingModel> = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading model manifest: {path}");
            Some(assets::load_model(path))
        }
        None => {
            let model = LoadedModel::builtin_walker();
            players.push(spawn_player(&model, &mut clips, &colliders));
            None
        }
    };

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // key-up events are lost while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                clock.begin_frame();

                if let Some(result) = pending.as_mut().and_then(|p| p.poll()) {
                    match result {
                        Ok(model) => players.push(spawn_player(&model, &mut clips, &colliders)),
                        Err(err) => error!("Model load failed: {err}"),
                    }
                    pending = None;
                }

                // controllers tick in registration order
                for player in &mut players {
                    player.tick(&input, &mut clips);
                }

                if clock.frame_count() % STATUS_LOG_INTERVAL == 0 {
                    for (index, player) in players.iter().enumerate() {
                        if let Some(pose) = player.pose() {
                            info!(
                                "player {index}: pos ({:.2}, {:.2}, {:.2}) yaw {:.2} clip {} | {:.0} FPS",
                                pose.position.x,
                                pose.position.y,
                                pose.position.z,
                                pose.yaw,
                                player.current_clip_name().unwrap_or("-"),
                                clock.fps(),
                            );
                        }
                    }
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
