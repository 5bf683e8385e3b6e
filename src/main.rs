//! tile2048 main entry point.
//!
//! The sliding-tile 2048 puzzle, written in Rust using:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** to hold the board and wire input, turns and state hooks
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, apply command line overrides
//! 2. Initialize raylib window and the ECS world with its resources
//! 3. Register state hooks and observers, then enter Setup (deals the board)
//! 4. Each frame: poll keys (observers play turns), apply pending state
//!    transitions, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use tile2048::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use tile2048::events::switchdebug::switch_debug_observer;
use tile2048::game::register_state_hooks;
use tile2048::grid::GridEngine;
use tile2048::resources::gameconfig::GameConfig;
use tile2048::resources::gamestate::{GameState, GameStates, NextGameState};
use tile2048::resources::input::InputState;
use tile2048::resources::palette::TilePalette;
use tile2048::resources::screensize::ScreenSize;
use tile2048::resources::worldsignals::WorldSignals;
use tile2048::systems::control::control_observer;
use tile2048::systems::gamestate::check_pending_state;
use tile2048::systems::input::update_input_state;
use tile2048::systems::render::render_system;
use tile2048::systems::turn::turn_observer;

/// Sliding-tile 2048 puzzle
#[derive(Parser)]
#[command(version, about = "Slide the tiles, merge equal numbers, reach 2048.")]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for tile spawns. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Early-exit: write the configuration and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let palette = match &config.palette_path {
        Some(path) => TilePalette::load_from_file(path).unwrap_or_else(|e| {
            warn!("Failed to load palette {:?}: {}; using defaults", path, e);
            TilePalette::default()
        }),
        None => TilePalette::default(),
    };
    let grid = match config.seed {
        Some(seed) => {
            info!("Seeding tile spawns with {}", seed);
            GridEngine::with_seed(seed)
        }
        None => GridEngine::new(),
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width, window_height)
        .resizable()
        .title("2048");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is bound to quit through the game state instead
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(grid);
    world.insert_resource(palette);
    world.insert_resource(InputState::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_gamestate_change_event));
    register_state_hooks(&mut world);
    world.flush();

    // Set next GameState to Setup and enter it immediately
    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(turn_observer));
    world.spawn(Observer::new(control_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(render_system.after(check_pending_state));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return;
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        update.run(&mut world);

        world.clear_trackers(); // Clear changed resources for next frame

        // Update screen size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut screen = world.resource_mut::<ScreenSize>();
        if screen.w != new_w || screen.h != new_h {
            screen.w = new_w;
            screen.h = new_h;
        }
    }
    info!("Window closed");
}
