//! Headless PATHGUARD runner.
//!
//! `pathguard-app [tower|lane-jump|tap-target] [rules.toml]`
//!
//! The tower game runs in real time on the game loop thread with a simple
//! bot tapping at a fixed cadence. The two smaller games are stepped
//! directly. The final score is printed to stdout as JSON.

use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use serde::Serialize;

use pathguard_app::game_loop::spawn_game_loop;
use pathguard_app::state::{AppState, GameLoopCommand};
use pathguard_core::commands::PlayerCommand;
use pathguard_core::config::GameRules;
use pathguard_core::enums::GamePhase;
use pathguard_sim::engine::{SimConfig, SimulationEngine};
use pathguard_sim::variants::{LaneJumpGame, TapTargetGame};

/// Time between bot taps in the tower game.
const BOT_TAP_INTERVAL: Duration = Duration::from_millis(400);
/// Upper bound on a real-time tower game.
const MAX_RUN_TIME: Duration = Duration::from_secs(180);
/// Ticks between taps for the lane-jump bot: one block at speed 3.
const LANE_BOT_TAP_TICKS: u32 = 20;
/// Ticks between target hits for the tap-target bot.
const TAP_BOT_HIT_TICKS: u32 = 45;

#[derive(Debug, Serialize)]
struct RunSummary {
    game: &'static str,
    score: u32,
    ticks: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let game = args.next().unwrap_or_else(|| "tower".to_string());
    let seed = std::env::var("PATHGUARD_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let summary = match game.as_str() {
        "tower" => {
            let rules = match args.next() {
                Some(path) => {
                    info!("loading rules from {path}");
                    GameRules::load(&path)?
                }
                None => GameRules::default(),
            };
            run_tower(SimConfig {
                seed,
                rules,
                ..Default::default()
            })?
        }
        "lane-jump" => run_lane_jump(),
        "tap-target" => run_tap_target(seed),
        other => return Err(format!("unknown game '{other}'").into()),
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn run_tower(config: SimConfig) -> Result<RunSummary, Box<dyn Error>> {
    let engine = SimulationEngine::new(config)?;
    let state = AppState::new();
    let (tx, handle) = spawn_game_loop(engine, Arc::clone(&state.latest_snapshot))?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    state.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame));

    let started = Instant::now();
    let mut last_tap = Instant::now();
    let mut last_report = 0;
    loop {
        std::thread::sleep(Duration::from_millis(50));

        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver || started.elapsed() > MAX_RUN_TIME {
            break;
        }
        if last_tap.elapsed() >= BOT_TAP_INTERVAL {
            state.send(GameLoopCommand::PlayerCommand(PlayerCommand::Tap));
            last_tap = Instant::now();
        }
        if snapshot.time.tick >= last_report + 625 {
            last_report = snapshot.time.tick;
            info!(
                "tick {}: score {}, lives {}, {} enemies on the path",
                snapshot.time.tick,
                snapshot.score.score,
                snapshot.score.lives,
                snapshot.enemies.len()
            );
        }
    }

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        return Err("game loop thread panicked".into());
    }

    let snapshot = state.snapshot().ok_or("game loop produced no snapshot")?;
    Ok(RunSummary {
        game: "tower",
        score: snapshot.score.score,
        ticks: snapshot.time.tick,
    })
}

fn run_lane_jump() -> RunSummary {
    let mut game = LaneJumpGame::new();
    let mut ticks = 0u64;
    while !game.is_game_over() {
        game.tick();
        ticks += 1;
        if ticks % u64::from(LANE_BOT_TAP_TICKS) == 0 {
            game.tap();
        }
    }
    info!("lane jump bot fell after {ticks} ticks");
    RunSummary {
        game: "lane-jump",
        score: game.score(),
        ticks,
    }
}

fn run_tap_target(seed: u64) -> RunSummary {
    let mut game = TapTargetGame::new(seed);
    game.start();
    let mut ticks = 0u64;
    while game.is_active() {
        game.tick();
        ticks += 1;
        if ticks % u64::from(TAP_BOT_HIT_TICKS) == 0 {
            game.hit_target();
        }
    }
    RunSummary {
        game: "tap-target",
        score: game.score(),
        ticks,
    }
}
