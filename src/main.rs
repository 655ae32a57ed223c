//! Terminal blockfall runner (default binary).
//!
//! Parses the CLI, sets up logging, then drives the engine loop on a
//! current-thread tokio runtime with crossterm input and the framebuffer
//! renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::GameState;
use blockfall::engine::{run_game, ExitReason, GameOutcome, TokioClock};
use blockfall::input::TerminalInput;
use blockfall::term::TerminalCanvas;
use blockfall::types::{GameConfig, FALL_INTERVAL_MS, TARGET_FPS};

const GAME_OVER_HOLD: Duration = Duration::from_millis(1500);

#[derive(Parser, Debug)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle game for the terminal"
)]
struct Cli {
    /// Milliseconds the fall timer must exceed before gravity moves the piece
    #[arg(long, default_value_t = FALL_INTERVAL_MS)]
    fall_interval_ms: u32,

    /// Target frames per second
    #[arg(
        long,
        default_value_t = TARGET_FPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    fps: u32,

    /// Seed for the piece generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_fall_interval_ms(self.fall_interval_ms)
            .with_target_fps(self.fps);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let config = cli.config();
    info!(?config, "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;

    let mut canvas = TerminalCanvas::new();
    canvas.enter()?;

    let result = runtime.block_on(play(config, &mut canvas));

    // Always try to restore terminal state before printing.
    let restored = canvas.exit();
    let outcome = result?;
    restored?;

    match outcome.reason {
        ExitReason::GameOver => println!("Game Over! Score: {}", outcome.score),
        ExitReason::Quit => println!("Quit. Score: {}", outcome.score),
    }
    info!(
        score = outcome.score,
        lines = outcome.lines,
        pieces = outcome.pieces_locked,
        frames = outcome.frames,
        "finished"
    );
    Ok(())
}

async fn play(config: GameConfig, canvas: &mut TerminalCanvas) -> Result<GameOutcome> {
    let mut game = GameState::new(config);
    let mut clock = TokioClock::new();
    let mut input = TerminalInput::new();
    let outcome = run_game(&mut game, &mut clock, &mut input, canvas).await?;

    // Leave the game-over frame up before restoring the terminal
    if outcome.reason == ExitReason::GameOver {
        tokio::time::sleep(GAME_OVER_HOLD).await;
    }
    Ok(outcome)
}
