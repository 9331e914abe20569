mod audio;
mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use bird_attack::compute::{apply_command, init_state, is_shot, resize, tick};
use bird_attack::config::GameConfig;
use bird_attack::entities::{GameState, Viewport, WeaponMode};
use bird_attack::error::Result;
use bird_attack::input::{Action, InputMapper};
use bird_attack::logging;
use bird_attack::scene::build_scene;

use crate::audio::Beeper;

#[derive(Debug, Parser)]
#[command(name = "bird_attack", version, about = "Shoot the birds out of the sky")]
struct Cli {
    /// Weapon variant; overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<WeaponMode>,

    /// JSON file overriding any game constant.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the RNG for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (the terminal is busy with the game).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Disable the shot sound.
    #[arg(long)]
    mute: bool,
}

fn viewport_for(cols: u16, rows: u16, config: &GameConfig) -> Viewport {
    Viewport {
        cols,
        rows,
        cell_width_px: config.display.cell_width_px,
        cell_height_px: config.display.cell_height_px,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  One tick per frame while a game is in
/// progress; the title screen only redraws.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut StdRng,
    beeper: &Beeper,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let frame_time = Duration::from_millis(config.frame_ms);
    let mut mapper = InputMapper::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Some(action) = mapper.translate(&ev, &state.viewport, state.mode, &config.weapon)
            else {
                continue;
            };
            match action {
                Action::Quit => {
                    info!(score = state.score, "quit");
                    return Ok(());
                }
                Action::Resize { cols, rows } => {
                    *state = resize(state, viewport_for(cols, rows, config));
                }
                Action::Command(cmd) => {
                    if state.is_running() && is_shot(state.mode, cmd) {
                        beeper.shot(out)?;
                    }
                    *state = apply_command(state, cmd, config, rng);
                }
            }
        }

        if state.is_running() {
            *state = tick(state, config, rng);
        }

        display::render(out, &build_scene(state, config), &state.viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    let mut config = GameConfig::load_or_default(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if cli.mute {
        config.sound = false;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!(error = %e, "input thread stopped");
                break;
            }
        }
    });

    let result = run(&mut out, &config, &mut rng, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut state = init_state(config.mode, viewport_for(cols, rows, config));
    let beeper = Beeper::new(config.sound);
    info!(mode = ?config.mode, cols, rows, "bird attack ready");
    game_loop(out, &mut state, config, rng, &beeper, rx)
}
