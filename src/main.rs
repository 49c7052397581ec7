//! Mono Breakout desktop entry point
//!
//! Runs the game on in-memory stand-ins for the display, LCD and keypad with
//! the autopilot at the controls, logging every screen and printing a JSON
//! summary at the end.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use serde::Serialize;

use mono_breakout::GameRecord;
use mono_breakout::platform::{CharLcd, Framebuffer, ScriptedKeypad, StdClock};
use mono_breakout::settings::Settings;
use mono_breakout::sim::{GamePhase, GameState};
use mono_breakout::{Game, consts};

#[derive(Parser)]
#[command(name = "mono-breakout")]
#[command(about = "Play Breakout on a simulated 128x64 display with the autopilot")]
struct Args {
    /// JSON settings file (any subset of fields)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Number of games to play before exiting
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// Autopilot seed
    #[arg(long)]
    seed: Option<u64>,
    /// Sleep for real instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Stop after this many ticks even if games are unfinished
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
}

#[derive(Serialize)]
struct RunSummary {
    games: Vec<GameRecord>,
    ticks: u64,
    final_phase: GamePhase,
    final_state: GameState,
    lcd: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.games > 0, "--games must be at least 1");

    let mut settings = Settings::load(args.settings.as_deref())?;
    settings.autopilot.enabled = true;
    if let Some(seed) = args.seed {
        settings.autopilot.seed = seed;
    }
    if args.realtime {
        settings.time_scale = 1.0;
    }
    settings.validate()?;

    log::info!(
        "Mono Breakout starting: {}x{} display, {} game(s), seed {}",
        consts::SCREEN_WIDTH,
        consts::SCREEN_HEIGHT,
        args.games,
        settings.autopilot.seed
    );

    let clock = StdClock::from_settings(&settings);
    let mut game = Game::new(
        settings,
        Framebuffer::new(),
        CharLcd::new(),
        ScriptedKeypad::idle(),
        clock,
    );

    let mut phase = game.phase();
    while game.records().len() < args.games {
        let next = game.step();
        if next != phase {
            for line in game.text().lines() {
                log::info!("LCD | {line}");
            }
            phase = next;
        }
        if game.ticks() >= args.max_ticks {
            log::warn!("Tick limit {} reached, stopping", args.max_ticks);
            break;
        }
    }

    print!("{}", game.display().to_ascii());
    let summary = RunSummary {
        games: game.records().to_vec(),
        ticks: game.ticks(),
        final_phase: game.phase(),
        final_state: *game.state(),
        lcd: game.text().lines(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
