//! Astromine headless world tool
//!
//! Generates an asteroid field from a seed, optionally simulates idle
//! ticks, reports world statistics, and saves/loads the session. The
//! rendering host consumes the same library API this binary exercises.

use clap::Parser;
use std::path::PathBuf;

use astromine::save::{self, SavedGame};
use astromine::session::GameSession;
use astromine::{BlockType, ThrustInput};

#[derive(Parser)]
#[command(name = "astromine", about = "Asteroid-mining sandbox world tool")]
struct Args {
    /// World seed; the sole shape parameter of the asteroid field
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Load an existing save instead of generating a fresh world
    #[arg(long)]
    load: bool,

    /// Save the session when done
    #[arg(long)]
    save: bool,

    /// Save file path; defaults to the platform data directory
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Idle simulation ticks to run at 60 Hz
    #[arg(long, default_value_t = 0)]
    ticks: u32,
}

fn run(args: &Args) -> Result<(), String> {
    let save_path = match &args.save_file {
        Some(path) => path.clone(),
        None => save::default_save_path().ok_or("no platform save directory available")?,
    };

    let mut session = if args.load {
        tracing::info!(path = %save_path.display(), "loading saved session");
        load_game_from(&save_path)?
    } else {
        tracing::info!(seed = args.seed, "generating world");
        let mut session = GameSession::new(args.seed);
        session.start();
        session
    };

    for _ in 0..args.ticks {
        session.update(1.0 / 60.0, &ThrustInput::default());
    }

    report(&session);

    if args.save {
        if let Some(parent) = save_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        save::save_game(&save_path, &SavedGame::from_session(&session))?;
        tracing::info!(path = %save_path.display(), "session saved");
    }

    Ok(())
}

fn load_game_from(path: &PathBuf) -> Result<GameSession, String> {
    Ok(save::load_game(path)?.into_session())
}

fn report(session: &GameSession) {
    let world = &session.world;
    let solid: usize = world.chunks.values().map(|c| c.solid_count()).sum();
    let faces: usize = world.meshes.values().map(|m| m.face_count()).sum();
    let asteroids = world.generator().map(|g| g.asteroids.len()).unwrap_or(0);

    tracing::info!(
        asteroids,
        chunks = world.chunks.len(),
        meshes = world.meshes.len(),
        solid_blocks = solid,
        faces,
        "world report"
    );

    if let Some(generator) = world.generator() {
        for ast in &generator.asteroids {
            tracing::debug!(
                cx = ast.cx,
                cy = ast.cy,
                cz = ast.cz,
                radius = ast.radius,
                "asteroid"
            );
        }
    }

    tracing::info!(
        health = session.health.hp,
        oxygen = session.oxygen.level,
        fuel = session.fuel.level,
        credits = session.trading.credits,
        basalt = session.inventory.count(BlockType::Basalt),
        "player report"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
