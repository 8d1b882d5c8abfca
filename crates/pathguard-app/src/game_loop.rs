//! Game loop thread: ticks the engine every 16 ms and publishes snapshots.
//!
//! The engine is built by the caller, so configuration errors surface before
//! any thread exists, and then moved into the loop thread. Commands arrive
//! via an `mpsc` channel. Each snapshot replaces the shared slot for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use pathguard_core::constants::TICK_MILLIS;
use pathguard_core::events::GameEvent;
use pathguard_core::state::GameStateSnapshot;
use pathguard_sim::engine::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MILLIS);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle. The thread exits on
/// `Shutdown` or when every sender has been dropped.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("pathguard-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            info!("game loop stopping at tick {}", engine.time().tick);
            return;
        }

        // 2. Advance one tick (engine handles phase gating internally)
        let snapshot = engine.tick();
        log_events(&snapshot.events);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = scaled_tick_duration(engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind; reset rather than burst through missed ticks
            next_tick_time = now;
        }
    }
}

/// Queue everything waiting on the channel. Returns false when the loop
/// should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// Wall-clock time per tick at the given scale. Scales near zero fall back
/// to the nominal rate; stopping the game is done with `Pause`.
fn scaled_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::GameOver { score } => info!("game over, final score {score}"),
            other => debug!("{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathguard_core::commands::PlayerCommand;
    use pathguard_core::enums::GamePhase;
    use pathguard_sim::engine::SimConfig;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION.as_millis(), 16);
    }

    #[test]
    fn test_scaled_tick_duration() {
        let half = scaled_tick_duration(2.0);
        let nanos = half.as_nanos() as i128 - 8_000_000;
        assert!(nanos.abs() < 1_000, "got {half:?}");
        assert_eq!(scaled_tick_duration(0.0), TICK_DURATION);
        assert_eq!(scaled_tick_duration(1.0), TICK_DURATION);
    }

    #[test]
    fn test_drain_commands_stops_on_shutdown() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.tick().phase, GamePhase::Active);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(engine(), Arc::clone(&latest)).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut advanced = false;
        while Instant::now() < deadline {
            let tick = latest
                .lock()
                .unwrap()
                .as_ref()
                .map(|s: &GameStateSnapshot| s.time.tick)
                .unwrap_or(0);
            if tick >= 3 {
                advanced = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(advanced, "game loop should keep ticking");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_exits_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(engine(), latest).unwrap();
        drop(tx);
        handle.join().unwrap();
    }
}
