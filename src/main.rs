mod game;
mod pointer;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use game::{GameSettings, GameState};
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Stick radius in world units
    #[arg(long, env = "VJOY_RADIUS", default_value_t = 50.0)]
    radius: f32,

    /// Player speed at full deflection, in world units per second
    #[arg(long, env = "VJOY_MOVE_SPEED", default_value_t = 240.0)]
    move_speed: f32,

    /// Minimum visible world width
    #[arg(long, default_value_t = 640.0)]
    world_width: f32,

    /// Minimum visible world height
    #[arg(long, default_value_t = 480.0)]
    world_height: f32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "🕹️ Virtual Joystick".to_owned(),
        window_width: 640,
        window_height: 480,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    ensure!(
        args.world_width > 0.0 && args.world_height > 0.0,
        "world size must be positive, got {}x{}",
        args.world_width,
        args.world_height
    );

    let settings = GameSettings {
        radius: args.radius,
        move_speed: args.move_speed,
        world_width: args.world_width,
        world_height: args.world_height,
    };
    let mut game = GameState::new(&settings).context("Failed to create the joystick")?;

    info!(
        radius = settings.radius,
        move_speed = settings.move_speed,
        "🕹️ Virtual joystick ready"
    );

    loop {
        let dt = get_frame_time();

        // Update game state
        game.update(dt);

        // Draw everything
        game.draw();

        next_frame().await
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
